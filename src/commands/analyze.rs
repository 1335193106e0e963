//! Analyze command: read raw records, run the pipeline, write the report

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use colored::Colorize;
use tracing::info;

use shelfrank::config::{Config, OutputFormat};
use shelfrank::error::{Result, ShelfError};
use shelfrank::pipeline::{analyze, Analysis};
use shelfrank::sink::{JsonSink, ReportSink, TextSink};
use shelfrank::source::{JsonSource, RecordSource};

/// Rank products from a JSON file (or stdin) and print or save the report
pub fn cmd_analyze(
    input: &str,
    top: Option<u64>,
    json: bool,
    output: Option<PathBuf>,
    no_color: bool,
    all: bool,
) -> Result<()> {
    let config = Config::load()?;
    let top_n = match top {
        Some(n) => usize::try_from(n)
            .map_err(|_| ShelfError::ConfigError(format!("--top {} is too large", n)))?,
        None => config.top_n,
    };
    let format = if json { OutputFormat::Json } else { config.format };

    let records = JsonSource::from_arg(input).fetch()?;

    let report = match analyze(&records, top_n) {
        Analysis::Complete(report) => report,
        Analysis::NoData => {
            eprintln!("No products found in '{}'. Nothing to analyze.", input);
            return Ok(());
        }
    };

    let mut sink: Box<dyn ReportSink> = match (&output, format) {
        (Some(path), OutputFormat::Json) => Box::new(JsonSink::new(BufWriter::new(File::create(path)?))),
        (Some(path), OutputFormat::Text) => Box::new(
            TextSink::new(BufWriter::new(File::create(path)?))
                .with_currency(config.currency.clone())
                .with_products(all),
        ),
        (None, OutputFormat::Json) => Box::new(JsonSink::new(io::stdout().lock())),
        (None, OutputFormat::Text) => {
            // Check if terminal supports colors
            let use_color = config.color && !no_color && atty::is(atty::Stream::Stdout);
            Box::new(
                TextSink::new(io::stdout().lock())
                    .with_color(use_color)
                    .with_currency(config.currency.clone())
                    .with_products(all),
            )
        }
    };

    sink.write(&report)?;

    if let Some(path) = output {
        info!(path = %path.display(), "report written");
        let done = format!("Analysis saved to {}", path.display());
        if !no_color && atty::is(atty::Stream::Stderr) {
            eprintln!("{} {}", "✓".green(), done);
        } else {
            eprintln!("{}", done);
        }
    }

    Ok(())
}
