//! Error types for the function layer.

use eventcloud_media::MediaError;
use eventcloud_store::StoreError;
use eventcloud_types::RequestError;
use thiserror::Error;

/// Result type for hooks and cloud functions.
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Errors surfaced to the external dispatcher.
///
/// Validation errors pass through verbatim; store and media failures abort
/// the invocation that hit them. Cleanup failures never reach this type —
/// they are swallowed at their call sites.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// Caller validation failed (`AuthRequired` / `MissingParam`).
    #[error(transparent)]
    Request(#[from] RequestError),

    /// No function is registered under the invoked name.
    #[error("unknown cloud function: {0}")]
    UnknownFunction(String),

    /// Backend I/O failed on the critical path.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Derivative rendering failed.
    #[error(transparent)]
    Media(#[from] MediaError),
}
