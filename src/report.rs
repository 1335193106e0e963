use serde::{Deserialize, Serialize};

use crate::record::{NormalizedRecord, RankedEntry, ScoredRecord};

/// Statistics over the valid prices of a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Total number of normalized records
    pub records: usize,
    /// Records with a valid price
    pub priced: usize,
    pub unparsable_prices: usize,
    /// `None` when no record has a valid price
    pub price: Option<PriceStats>,
    /// Mean over records with a rating, `None` when none has one
    pub mean_rating: Option<f64>,
}

impl Summary {
    pub fn from_records(records: &[NormalizedRecord]) -> Self {
        let prices: Vec<f64> = records.iter().filter_map(|r| r.price).collect();
        let ratings: Vec<f64> = records.iter().filter_map(|r| r.rating).collect();

        let price = mean(&prices).map(|mean| PriceStats {
            mean,
            min: prices.iter().copied().fold(f64::INFINITY, f64::min),
            max: prices.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        });

        Summary {
            records: records.len(),
            priced: prices.len(),
            unparsable_prices: records.len() - prices.len(),
            price,
            mean_rating: mean(&ratings),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// One product on the price x rating plot; `rank` is set for top-N entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub title: String,
    pub price: f64,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

/// Finished analysis handed to a sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    /// Requested ranking size (the ranking may be shorter)
    pub top_n: usize,
    pub ranking: Vec<RankedEntry>,
    /// Every scored record, in input order
    pub products: Vec<ScoredRecord>,
    /// Every record with a valid price, in input order
    pub scatter: Vec<ScatterPoint>,
}

impl Report {
    /// Package statistics, scored products and ranking into a report
    pub fn assemble(
        records: &[NormalizedRecord],
        products: Vec<ScoredRecord>,
        ranking: Vec<RankedEntry>,
        top_n: usize,
    ) -> Self {
        let scatter = records
            .iter()
            .filter_map(|record| {
                let price = record.price?;
                let rank = ranking
                    .iter()
                    .find(|entry| entry.scored.record.input_index == record.input_index)
                    .map(|entry| entry.rank);
                Some(ScatterPoint {
                    title: record.title.clone(),
                    price,
                    rating: record.rating_or_default(),
                    rank,
                })
            })
            .collect();

        Report {
            summary: Summary::from_records(records),
            top_n,
            ranking,
            products,
            scatter,
        }
    }

    /// Best entry, if any
    pub fn winner(&self) -> Option<&RankedEntry> {
        self.ranking.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, price: Option<f64>, rating: Option<f64>) -> NormalizedRecord {
        NormalizedRecord {
            input_index: index,
            title: format!("P{}", index),
            price,
            url: String::new(),
            rating,
            rating_count: None,
        }
    }

    #[test]
    fn test_summary_stats() {
        let records = vec![
            record(0, Some(1000.0), Some(5.0)),
            record(1, Some(500.0), Some(3.0)),
            record(2, Some(750.0), Some(4.0)),
        ];
        let summary = Summary::from_records(&records);
        let price = summary.price.unwrap();

        assert_eq!(summary.records, 3);
        assert_eq!(price.mean, 750.0);
        assert_eq!(price.min, 500.0);
        assert_eq!(price.max, 1000.0);
        assert_eq!(summary.mean_rating, Some(4.0));
    }

    #[test]
    fn test_summary_excludes_missing_fields() {
        let records = vec![
            record(0, None, None),
            record(1, Some(20.0), Some(2.0)),
        ];
        let summary = Summary::from_records(&records);

        assert_eq!(summary.priced, 1);
        assert_eq!(summary.unparsable_prices, 1);
        assert_eq!(summary.price.unwrap().mean, 20.0);
        assert_eq!(summary.mean_rating, Some(2.0));
    }

    #[test]
    fn test_summary_without_any_price() {
        let summary = Summary::from_records(&[record(0, None, None)]);
        assert!(summary.price.is_none());
        assert!(summary.mean_rating.is_none());
    }

    #[test]
    fn test_mean_rating_absent_when_no_record_has_one() {
        let records = vec![
            record(0, Some(10.0), None),
            record(1, Some(30.0), None),
        ];
        let scored = crate::score::score_all(&records);
        let ranking = crate::rank::rank(&scored, 3);
        let report = Report::assemble(&records, scored, ranking, 3);

        assert_eq!(report.summary.price.unwrap().mean, 20.0);
        // Failed ratings are left out rather than averaged in as 0.0
        assert_eq!(report.summary.mean_rating, None);
        assert!(report.scatter.iter().all(|p| p.rating == 0.0));
    }

    #[test]
    fn test_mean_rating_skips_absent_ratings() {
        let records = vec![
            record(0, Some(10.0), Some(4.0)),
            record(1, Some(30.0), None),
            record(2, Some(20.0), Some(2.0)),
        ];
        let summary = Summary::from_records(&records);
        assert_eq!(summary.mean_rating, Some(3.0));
    }

    #[test]
    fn test_scatter_marks_ranked_records() {
        let records = vec![record(0, Some(10.0), Some(4.0)), record(1, None, Some(5.0))];
        let scored = crate::score::score_all(&records);
        let ranking = crate::rank::rank(&scored, 1);
        let report = Report::assemble(&records, scored, ranking, 1);

        assert_eq!(report.products.len(), 2);
        assert_eq!(report.scatter.len(), 1);
        assert_eq!(report.scatter[0].rank, Some(1));
        assert_eq!(report.winner().map(|e| e.scored.record.input_index), Some(0));
    }
}
