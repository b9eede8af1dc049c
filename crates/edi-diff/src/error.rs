// error.rs — Error types for the diff subsystem.
//
// Comparing and classifying never fail; these cover configuration loading,
// validation-report input and rendering.

use thiserror::Error;

/// Errors that can occur around diff computation and rendering.
#[derive(Debug, Error)]
pub enum DiffError {
    /// Reading a config or report file failed.
    #[error("I/O error on {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The TOML config could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A result from a superseded comparison was offered to a session.
    #[error("stale comparison: generation {got}, current is {current}")]
    StaleGeneration { got: u64, current: u64 },

    /// Invalid or malformed data.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
