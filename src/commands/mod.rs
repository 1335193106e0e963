//! Command implementations for shelfrank CLI

mod analyze;
mod misc;

pub use analyze::*;
pub use misc::*;
