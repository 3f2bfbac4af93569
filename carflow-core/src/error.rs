//! Error types for carflow-core

use thiserror::Error;

/// Main error type for the carflow-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Format error for a malformed input line.
    ///
    /// Ingestion is all-or-nothing: the first malformed line aborts the
    /// load, so a partial dataset can never understate totals.
    #[error("format error on line {line_no}: {message} (line: {line:?})")]
    Format {
        /// 1-based line number in the input
        line_no: usize,
        /// The offending line, as read
        line: String,
        /// What was wrong with it
        message: String,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for carflow-core
pub type Result<T> = std::result::Result<T, Error>;
