//! Error types for counter_app

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the widget's outer surfaces
///
/// `increase` and `decrease` never fail; these come from attribute parsing,
/// config loading and bound validation.
#[derive(Error, Debug)]
pub enum CounterError {
    /// A host attribute value that isn't an integer
    #[error("attribute `{name}` expects an integer, got {value:?}")]
    InvalidAttribute { name: String, value: String },

    /// A host attribute the widget doesn't observe
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    /// A control label other than `-` or `+`
    #[error("unknown action {0:?}, expected `-` or `+`")]
    UnknownAction(String),

    /// `min` is greater than `max`
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i32, max: i32 },

    /// `count` lies outside `[min, max]`
    #[error("count {count} is outside [{min}, {max}]")]
    CountOutOfBounds { count: i32, min: i32, max: i32 },

    /// Failed to read a config file
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a config file
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to build the editor schema
    #[error("schema serialization failed: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Result type for counter_app operations
pub type Result<T> = std::result::Result<T, CounterError>;
