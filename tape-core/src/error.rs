//! Error types for tape emulation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while operating a tape device.
#[derive(Error, Debug)]
pub enum TapeError {
    #[error("Tape not found: {0}")]
    TapeNotFound(PathBuf),

    #[error("Malformed record {text:?} at position {position}")]
    MalformedRecord { text: String, position: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for tape operations.
pub type TapeResult<T> = Result<T, TapeError>;
