//! Image derivative rendering.
//!
//! Takes an uploaded image's raw bytes and produces a normalized JPEG
//! derivative: either a bounded fit (aspect preserved, never enlarged) or a
//! hard resize to an exact box. Output is always quality-90 JPEG; the
//! encoder writes full-resolution chroma, so no color detail is lost to
//! subsampling.

mod derivative;
mod error;

pub use derivative::{render, DerivativeSpec};
pub use error::{MediaError, MediaResult};

/// Bound applied to primary image derivatives.
pub const PRIMARY_BOUND: u32 = 1000;

/// Edge length of the square thumbnail derivative.
pub const THUMBNAIL_SIZE: u32 = 40;

/// JPEG quality for all derivatives.
pub const JPEG_QUALITY: u8 = 90;

/// MIME type of every rendered derivative.
pub const DERIVATIVE_MIME: &str = "image/jpeg";
