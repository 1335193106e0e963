use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Could not read product records: {0}")]
    SourceError(String),

    #[error("No product records to analyze")]
    NoData,
}

impl ShelfError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ShelfError::JsonError(_) | ShelfError::SourceError(_) => Some(
                "Input must be a JSON array of records, e.g.:\n  [{\"title\": \"...\", \"price\": \"R$ 1.299,00\", \"url\": \"...\", \"rating\": 4.5, \"rating_count\": 37}]"
            ),
            ShelfError::TomlError(_) | ShelfError::ConfigError(_) => Some(
                "Check your configuration with `shelfrank config show`\nOr recreate it with `shelfrank config init`"
            ),
            ShelfError::NoData => Some(
                "The source produced no records. Check that the search returned any products."
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
