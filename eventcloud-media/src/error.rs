//! Error types for derivative rendering.

use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur rendering a derivative.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The source bytes are not a decodable image.
    #[error("image decode failed: {0}")]
    Decode(#[source] image::ImageError),

    /// JPEG encoding of the derivative failed.
    #[error("image encode failed: {0}")]
    Encode(#[source] image::ImageError),
}
