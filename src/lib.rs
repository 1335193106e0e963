pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod record;
pub mod report;
pub mod score;
pub mod sink;
pub mod source;
pub mod utils;

pub use error::{Result, ShelfError};
pub use pipeline::{analyze, Analysis};
pub use record::{NormalizedRecord, RankedEntry, RawRecord, ScoredRecord};
pub use report::Report;
