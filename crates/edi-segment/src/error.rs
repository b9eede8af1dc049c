// error.rs — Error types for segment parsing and file storage.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while loading or looking up EDI files.
///
/// Parsing itself never fails; malformed text just yields fewer segments.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// No stored file has this id.
    #[error("file not found: {0}")]
    NotFound(Uuid),

    /// Reading a file from disk failed.
    #[error("I/O error on {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
