use std::io;

use thiserror::Error;

use crate::tabulated::tabulatederror::TabulatedFunctionError;

/// Failures of the encode/decode routines.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The underlying stream failed.
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    /// Structurally malformed data: negative count, truncation, bad envelope.
    #[error("malformed data: {0}")]
    Format(String),

    /// A text token that is not a number of the expected kind.
    #[error("cannot parse '{token}' as {expected}")]
    Parse {
        token: String,
        expected: &'static str
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed data describing points that cannot form a function.
    #[error("decoded points rejected: {0}")]
    Function(#[from] TabulatedFunctionError)
}

impl CodecError {
    pub(crate) fn negative_count(count: i64) -> CodecError {
        CodecError::Format(format!("points count must not be negative, got {}", count))
    }

    pub(crate) fn truncated(read: usize, declared: usize) -> CodecError {
        CodecError::Format(format!(
            "stream ended after {} of {} declared points",
            read, declared
        ))
    }
}
