//! Inventory error types.

use std::io;

use thiserror::Error;

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors surfaced by the inventory store.
///
/// `Storage` is the one fatal-to-the-operation class: local file I/O
/// failures are not transient in this design, so they propagate instead of
/// being retried or swallowed. Malformed individual records never surface
/// here; scan sites skip them with a WARN log.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A book with this id (case-insensitive) already exists.
    #[error("book id already exists: {id}")]
    AlreadyExists { id: String },

    /// No book with this id (case-insensitive) exists.
    #[error("book not found: {id}")]
    NotFound { id: String },

    /// Price range query with min above max.
    #[error("invalid price range: min {min} exceeds max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Reading or writing the backing file failed.
    #[error("inventory storage unavailable: {context}")]
    Storage {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl InventoryError {
    /// Create a storage error wrapping the underlying I/O failure.
    pub fn storage(context: impl Into<String>, source: io::Error) -> Self {
        InventoryError::Storage {
            context: context.into(),
            source,
        }
    }
}
