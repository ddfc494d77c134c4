use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelbookError {
    /// Recoverable: callers report it to the user and carry on.
    #[error("record index {index} is out of range (the book holds {len} records)")]
    RecordOutOfRange { index: usize, len: usize },

    #[error("{}: line {}: expected 6 comma-separated fields, found {}", path.display(), line, found)]
    MalformedLine {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TelbookError>;
