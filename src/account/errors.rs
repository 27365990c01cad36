//! Account error types.

use std::io;

use thiserror::Error;

/// Result type for account operations
pub type AccountResult<T> = Result<T, AccountError>;

/// Errors surfaced by the account store.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Credential mismatch. Returned uniformly for "no such user" and
    /// "wrong secret"; the message must not reveal which.
    #[error("invalid credentials")]
    AuthFailed,

    /// An account with this username already exists (case-sensitive).
    #[error("username already exists: {username}")]
    AlreadyExists { username: String },

    /// The role string names neither recognized role.
    #[error("invalid role: {role:?} (expected Manager or Cashier)")]
    InvalidRole { role: String },

    /// Reading or writing the backing file failed.
    #[error("account storage unavailable: {context}")]
    Storage {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl AccountError {
    /// Create a storage error wrapping the underlying I/O failure.
    pub fn storage(context: impl Into<String>, source: io::Error) -> Self {
        AccountError::Storage {
            context: context.into(),
            source,
        }
    }
}
