//! Resize and re-encode logic.

use crate::error::{MediaError, MediaResult};
use crate::JPEG_QUALITY;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

/// How a derivative relates to its source dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivativeSpec {
    /// Fit inside `max_w` × `max_h`: aspect ratio preserved, no padding,
    /// and a source already inside the box keeps its dimensions.
    Bounded { max_w: u32, max_h: u32 },
    /// Hard resize to exactly `w` × `h`, stretching as needed.
    Exact { w: u32, h: u32 },
}

impl DerivativeSpec {
    /// Bounded square fit.
    #[must_use]
    pub fn bounded(max: u32) -> Self {
        Self::Bounded {
            max_w: max,
            max_h: max,
        }
    }

    /// Exact square.
    #[must_use]
    pub fn exact(size: u32) -> Self {
        Self::Exact { w: size, h: size }
    }
}

/// Renders a JPEG derivative of the given source image bytes.
///
/// The source format is whatever the decoder recognizes; the output is
/// always quality-90 JPEG. Alpha is dropped by converting to RGB before
/// encoding.
pub fn render(bytes: &[u8], spec: DerivativeSpec) -> MediaResult<Vec<u8>> {
    let source = image::load_from_memory(bytes).map_err(MediaError::Decode)?;

    let resized = match spec {
        DerivativeSpec::Bounded { max_w, max_h } => {
            if source.width() <= max_w && source.height() <= max_h {
                // Already inside the box: re-encode only, never enlarge.
                source
            } else {
                source.resize(max_w, max_h, FilterType::Lanczos3)
            }
        }
        DerivativeSpec::Exact { w, h } => source.resize_exact(w, h, FilterType::Lanczos3),
    };

    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    encoder.encode_image(&rgb).map_err(MediaError::Encode)?;

    Ok(out)
}
