//! Error types for the respell library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RespellError`] enum. I/O failures from the dictionary, input, or
//! output files convert automatically via `From`.

use std::io;

use thiserror::Error;

/// The main error type for respell operations.
#[derive(Error, Debug)]
pub enum RespellError {
    /// I/O errors (dictionary, input file, or output file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors from CLI output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A suggestion index outside the candidate list. This is a contract
    /// violation by the caller and is always propagated.
    #[error("invalid suggestion index {index} (have {count} suggestions)")]
    InvalidSuggestionIndex { index: usize, count: usize },

    /// An operation invoked in a state that does not allow it.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with [`RespellError`].
pub type Result<T> = std::result::Result<T, RespellError>;

impl RespellError {
    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        RespellError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RespellError::Other(msg.into())
    }
}
