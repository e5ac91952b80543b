//! Error types for the store clients.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur talking to the external backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("API request failed ({status}): {body}")]
    Api { status: u16, body: String },

    /// Referenced record does not resolve.
    #[error("not found: {0}")]
    NotFound(String),

    /// Username/password pair rejected by the identity service.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Raw-content fetch by URL failed.
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// Mutation attempted on a record the backend has never persisted.
    #[error("entity has no object id")]
    Unsaved,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
