//! # Record Store Errors
//!
//! Store failures are infrastructure failures. Handlers never map them to a
//! client error; they surface to the HTTP layer as an opaque 500.

use thiserror::Error;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing service failed or could not be reached
    #[error("Store backend error: {0}")]
    Backend(String),

    /// A stored item cannot be represented as a movie record
    #[error("Store codec error: {0}")]
    Codec(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }

    pub fn codec(msg: impl Into<String>) -> Self {
        StoreError::Codec(msg.into())
    }
}
