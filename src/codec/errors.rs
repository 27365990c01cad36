//! Codec error types.

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors produced while decoding a persisted line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A line does not parse as a record. Scan sites skip these and
    /// continue; one corrupt line must not make a whole file unreadable.
    #[error("malformed record ({reason}): {line:?}")]
    MalformedRecord { line: String, reason: String },
}

impl CodecError {
    /// Create a malformed-record error for the given line.
    pub fn malformed(line: &str, reason: impl Into<String>) -> Self {
        CodecError::MalformedRecord {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}
