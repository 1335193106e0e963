use tracing::{debug, info};

use crate::error::{Result, ShelfError};
use crate::normalize::normalize;
use crate::rank::rank;
use crate::record::RawRecord;
use crate::report::Report;
use crate::score::score_all;

/// Outcome of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    Complete(Report),
    /// The input held no records at all
    NoData,
}

impl Analysis {
    /// Treat "no data" as an error, for callers that cannot continue without a report
    pub fn into_report(self) -> Result<Report> {
        match self {
            Analysis::Complete(report) => Ok(report),
            Analysis::NoData => Err(ShelfError::NoData),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Analysis::Complete(report) => Some(report),
            Analysis::NoData => None,
        }
    }
}

/// Normalize, score, rank and summarize a batch of raw records
pub fn analyze(raw: &[RawRecord], top_n: usize) -> Analysis {
    if raw.is_empty() {
        info!("no records to analyze");
        return Analysis::NoData;
    }
    info!(records = raw.len(), top_n, "starting analysis");

    let normalized = normalize(raw);
    let unparsable = normalized.iter().filter(|r| r.price.is_none()).count();
    debug!(unparsable, "normalized records");

    let scored = score_all(&normalized);
    let ranking = rank(&scored, top_n);
    debug!(ranked = ranking.len(), "ranked records");

    let report = Report::assemble(&normalized, scored, ranking, top_n);
    info!(
        ranked = report.ranking.len(),
        best = report.winner().map(|e| e.scored.record.title.as_str()).unwrap_or(""),
        "analysis complete"
    );

    Analysis::Complete(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_no_data() {
        assert_eq!(analyze(&[], 3), Analysis::NoData);
        assert!(matches!(analyze(&[], 3).into_report(), Err(ShelfError::NoData)));
    }

    #[test]
    fn test_all_malformed_still_reports() {
        let raw = vec![
            RawRecord::with_review("A", "indisponível", "", "sem nota"),
            RawRecord::with_review("B", "???", "", ""),
        ];
        let analysis = analyze(&raw, 3);
        let report = analysis.report().expect("malformed input still yields a report");

        assert_eq!(report.summary.records, 2);
        assert_eq!(report.summary.unparsable_prices, 2);
        assert_eq!(report.ranking.len(), 2);
        assert_eq!(report.products.len(), 2);
        assert!(report.ranking.iter().all(|e| e.scored.score == 0.0));
    }
}
