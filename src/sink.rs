use std::io::Write;

use colored::Colorize;

use crate::error::Result;
use crate::report::Report;
use crate::utils::truncate_str;

/// Anything that persists or displays a finished report
pub trait ReportSink {
    fn write(&mut self, report: &Report) -> Result<()>;
}

/// Writes the report as pretty-printed JSON
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn write(&mut self, report: &Report) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Human-readable layout: general statistics, then the top-N table
pub struct TextSink<W: Write> {
    writer: W,
    color: bool,
    currency: String,
    show_products: bool,
}

const TITLE_WIDTH: usize = 40;

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            color: false,
            currency: "R$".to_string(),
            show_products: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Append a table of every product in input order
    pub fn with_products(mut self, show: bool) -> Self {
        self.show_products = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_products(&mut self, report: &Report) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.heading(&format!("All products ({})", report.products.len())))?;
        writeln!(
            self.writer,
            "  {:<width$} {:>14} {:>6} {:>7} {:>6}  Link",
            "Title", "Price", "Rating", "Reviews", "Score",
            width = TITLE_WIDTH
        )?;

        for scored in &report.products {
            let record = &scored.record;
            let rating = record
                .rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| "-".to_string());
            let count = record
                .rating_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());

            writeln!(
                self.writer,
                "  {:<width$} {:>14} {:>6} {:>7} {:>6.2}  {}",
                truncate_str(&record.title, TITLE_WIDTH),
                self.money(record.price),
                rating,
                count,
                scored.score,
                record.url,
                width = TITLE_WIDTH
            )?;
        }
        Ok(())
    }

    fn heading(&self, text: &str) -> String {
        if self.color { text.bold().to_string() } else { text.to_string() }
    }

    fn money(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{} {:.2}", self.currency, v),
            None => "n/a".to_string(),
        }
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn write(&mut self, report: &Report) -> Result<()> {
        let summary = &report.summary;

        writeln!(self.writer, "{}", self.heading("General statistics"))?;
        writeln!(self.writer, "  Products:      {}", summary.records)?;
        if summary.unparsable_prices > 0 {
            writeln!(self.writer, "  No price:      {}", summary.unparsable_prices)?;
        }
        writeln!(self.writer, "  Mean price:    {}", self.money(summary.price.map(|p| p.mean)))?;
        writeln!(self.writer, "  Lowest price:  {}", self.money(summary.price.map(|p| p.min)))?;
        writeln!(self.writer, "  Highest price: {}", self.money(summary.price.map(|p| p.max)))?;
        match summary.mean_rating {
            Some(rating) => writeln!(self.writer, "  Mean rating:   {:.2}", rating)?,
            None => writeln!(self.writer, "  Mean rating:   n/a")?,
        }
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "{}",
            self.heading(&format!("Top {} recommended products", report.top_n))
        )?;
        writeln!(
            self.writer,
            "  {:<5} {:<width$} {:>14} {:>6} {:>6}  Link",
            "Rank", "Title", "Price", "Rating", "Score",
            width = TITLE_WIDTH
        )?;

        for entry in &report.ranking {
            let record = &entry.scored.record;
            let rating = record
                .rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| "-".to_string());
            let score = format!("{:>6.2}", entry.scored.score);
            let score = if self.color && entry.rank == 1 { score.green().to_string() } else { score };

            writeln!(
                self.writer,
                "  {:<5} {:<width$} {:>14} {:>6} {}  {}",
                entry.label(),
                truncate_str(&record.title, TITLE_WIDTH),
                self.money(record.price),
                rating,
                score,
                record.url,
                width = TITLE_WIDTH
            )?;
        }

        if self.show_products {
            self.write_products(report)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
