//! Weighted desirability score.
//!
//! Scoring runs in two phases: [`Bounds::from_records`] reduces the whole batch to
//! its min/max ranges, then [`score_record`] maps each record onto those ranges.
//! Every signal is normalized relative to the batch, so a score only has meaning
//! next to the other scores from the same batch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::{NormalizedRecord, ScoredRecord, SubScores};

/// Share of the score taken by the rating (0-5 stars)
pub const RATING_WEIGHT: f64 = 0.5;
/// Share of the score taken by the number of ratings
pub const COUNT_WEIGHT: f64 = 0.3;
/// Share of the score taken by price (cheaper is better)
pub const PRICE_WEIGHT: f64 = 0.2;
/// Composite scores are reported on a 0-10 scale
pub const SCORE_SCALE: f64 = 10.0;
/// Upper end of the rating scale
pub const MAX_RATING: f64 = 5.0;

/// Dataset-wide ranges used to normalize each signal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// Lowest valid price, `None` when no record has a valid price
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub max_rating_count: u64,
}

impl Bounds {
    /// Reduce the full set of records to its normalization bounds
    pub fn from_records(records: &[NormalizedRecord]) -> Self {
        let mut bounds = Bounds::default();

        for record in records {
            if let Some(price) = record.price {
                bounds.min_price = Some(bounds.min_price.map_or(price, |min| min.min(price)));
                bounds.max_price = Some(bounds.max_price.map_or(price, |max| max.max(price)));
            }
            bounds.max_rating_count = bounds.max_rating_count.max(record.rating_count_or_default());
        }

        bounds
    }

    /// Width of the valid price range, `None` when it is empty or a single point
    fn price_span(&self) -> Option<(f64, f64)> {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) if max > min => Some((min, max - min)),
            _ => None,
        }
    }
}

/// Rating mapped onto [0, 1]
pub fn rating_norm(record: &NormalizedRecord) -> f64 {
    (record.rating_or_default() / MAX_RATING).clamp(0.0, 1.0)
}

/// Rating count relative to the busiest listing; 0 for every record when nobody has ratings
pub fn count_norm(record: &NormalizedRecord, bounds: &Bounds) -> f64 {
    if bounds.max_rating_count == 0 {
        return 0.0;
    }
    record.rating_count_or_default() as f64 / bounds.max_rating_count as f64
}

/// Inverted price position: cheapest is 1, most expensive is 0.
///
/// A degenerate range gives 1 to every valid price. An unparsable price always gets 0.
pub fn price_norm(record: &NormalizedRecord, bounds: &Bounds) -> f64 {
    let Some(price) = record.price else {
        return 0.0;
    };
    match bounds.price_span() {
        Some((min, span)) => (1.0 - (price - min) / span).clamp(0.0, 1.0),
        None => 1.0,
    }
}

/// Combine normalized signals into the weighted composite on the 0-10 scale
pub fn composite(parts: &SubScores) -> f64 {
    (parts.rating * RATING_WEIGHT + parts.count * COUNT_WEIGHT + parts.price * PRICE_WEIGHT)
        * SCORE_SCALE
}

/// Score one record against precomputed bounds
pub fn score_record(record: &NormalizedRecord, bounds: &Bounds) -> ScoredRecord {
    let parts = SubScores {
        rating: rating_norm(record),
        count: count_norm(record, bounds),
        price: price_norm(record, bounds),
    };

    ScoredRecord {
        record: record.clone(),
        parts,
        score: composite(&parts),
    }
}

/// Score a whole batch. Bounds are reduced first, then each record is scored independently.
pub fn score_all(records: &[NormalizedRecord]) -> Vec<ScoredRecord> {
    let bounds = Bounds::from_records(records);
    debug!(?bounds, records = records.len(), "computed normalization bounds");

    records
        .iter()
        .map(|record| score_record(record, &bounds))
        .collect()
}
