//! Error types for the revocation store.

use thiserror::Error;

/// Errors surfaced by the store and its storage collaborator
#[derive(Error, Debug)]
pub enum StoreError {
    /// Caller supplied an unusable argument (e.g. an empty jti)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A record with this jti already exists
    ///
    /// jti generation upstream must guarantee global uniqueness, so this
    /// signals a caller bug. The existing record is never overwritten.
    #[error("Duplicate jti: {jti}")]
    DuplicateJti { jti: String },

    /// The persistence collaborator could not complete a read or write
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl StoreError {
    /// Whether retrying the failed operation can succeed
    ///
    /// Only storage failures are retriable; validation and duplicate-key
    /// errors indicate caller bugs that a retry would simply repeat.
    pub fn is_retriable(&self) -> bool {
        matches!(self, StoreError::Storage { .. })
    }

    /// Convenience constructor for storage failures
    pub fn storage(message: impl Into<String>) -> Self {
        StoreError::Storage {
            message: message.into(),
        }
    }
}
