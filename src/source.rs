use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ShelfError};
use crate::record::RawRecord;

/// Anything that can hand over a batch of captured product listings
pub trait RecordSource {
    fn fetch(&mut self) -> Result<Vec<RawRecord>>;
}

/// Where a [`JsonSource`] reads from
#[derive(Debug, Clone)]
enum Input {
    File(PathBuf),
    Stdin,
}

/// Reads a JSON array of raw records
#[derive(Debug, Clone)]
pub struct JsonSource {
    input: Input,
}

impl JsonSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self { input: Input::File(path.as_ref().to_path_buf()) }
    }

    pub fn stdin() -> Self {
        Self { input: Input::Stdin }
    }

    /// `-` means stdin, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::stdin()
        } else {
            Self::from_path(arg)
        }
    }
}

impl RecordSource for JsonSource {
    fn fetch(&mut self) -> Result<Vec<RawRecord>> {
        let content = match &self.input {
            Input::File(path) => std::fs::read_to_string(path).map_err(|e| {
                ShelfError::SourceError(format!("{}: {}", path.display(), e))
            })?,
            Input::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let records = parse_records(&content)?;
        debug!(records = records.len(), input = ?self.input, "read raw records");
        Ok(records)
    }
}

/// Parse a JSON array of raw records
pub fn parse_records(content: &str) -> Result<Vec<RawRecord>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(content)?)
}

/// Source over records already in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for MemorySource {
    fn fetch(&mut self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }
}
