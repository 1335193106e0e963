use serde::{Deserialize, Serialize};

/// A product listing exactly as captured from the retail site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub title: String,
    /// Currency-formatted price text (e.g., "R$ 1.299,00")
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub url: String,
    /// Rating on a 0-5 scale, when the source already parsed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of ratings, when the source already parsed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u64>,
    /// Composite review text such as "4,5 (37)", used when `rating` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

impl RawRecord {
    /// Record whose rating and count are already numeric
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        url: impl Into<String>,
        rating: f64,
        rating_count: u64,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            url: url.into(),
            rating: Some(rating),
            rating_count: Some(rating_count),
            review: None,
        }
    }

    /// Record whose rating still has to be split out of review text
    pub fn with_review(
        title: impl Into<String>,
        price: impl Into<String>,
        url: impl Into<String>,
        review: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            url: url.into(),
            rating: None,
            rating_count: None,
            review: Some(review.into()),
        }
    }
}

/// A record with typed fields. `None` marks a field that was missing or unparsable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Position in the raw input, used to break score ties
    pub input_index: usize,
    pub title: String,
    pub price: Option<f64>,
    pub url: String,
    pub rating: Option<f64>,
    pub rating_count: Option<u64>,
}

impl NormalizedRecord {
    /// Rating as consumed by scoring (absent reads as 0.0)
    pub fn rating_or_default(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Rating count as consumed by scoring (absent reads as 0)
    pub fn rating_count_or_default(&self) -> u64 {
        self.rating_count.unwrap_or(0)
    }
}

/// Per-signal normalized values, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub rating: f64,
    pub count: f64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub record: NormalizedRecord,
    pub parts: SubScores,
    /// Weighted composite, nominally 0-10
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position
    pub rank: usize,
    #[serde(flatten)]
    pub scored: ScoredRecord,
}

impl RankedEntry {
    /// Ordinal label used in rendered reports ("1º", "2º", ...)
    pub fn label(&self) -> String {
        format!("{}º", self.rank)
    }
}
