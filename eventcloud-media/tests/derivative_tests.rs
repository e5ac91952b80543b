use eventcloud_media::{render, DerivativeSpec, MediaError, PRIMARY_BOUND, THUMBNAIL_SIZE};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

/// Encodes a solid-color test image as PNG bytes.
fn png_image(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, image::Rgb([120, 80, 200]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn dimensions(jpeg: &[u8]) -> (u32, u32) {
    let img = image::load_from_memory(jpeg).unwrap();
    (img.width(), img.height())
}

#[test]
fn bounded_shrinks_landscape_preserving_ratio() {
    let out = render(&png_image(2000, 1000), DerivativeSpec::bounded(PRIMARY_BOUND)).unwrap();
    assert_eq!(dimensions(&out), (1000, 500));
}

#[test]
fn bounded_shrinks_portrait_preserving_ratio() {
    let out = render(&png_image(500, 2000), DerivativeSpec::bounded(PRIMARY_BOUND)).unwrap();
    assert_eq!(dimensions(&out), (250, 1000));
}

#[test]
fn bounded_never_enlarges() {
    let out = render(&png_image(320, 240), DerivativeSpec::bounded(PRIMARY_BOUND)).unwrap();
    assert_eq!(dimensions(&out), (320, 240));
}

#[test]
fn bounded_at_exact_bound_keeps_dimensions() {
    let out = render(&png_image(1000, 1000), DerivativeSpec::bounded(PRIMARY_BOUND)).unwrap();
    assert_eq!(dimensions(&out), (1000, 1000));
}

#[test]
fn exact_ignores_aspect_ratio() {
    let out = render(&png_image(800, 200), DerivativeSpec::exact(THUMBNAIL_SIZE)).unwrap();
    assert_eq!(dimensions(&out), (40, 40));
}

#[test]
fn exact_enlarges_tiny_sources() {
    let out = render(&png_image(8, 8), DerivativeSpec::exact(THUMBNAIL_SIZE)).unwrap();
    assert_eq!(dimensions(&out), (40, 40));
}

#[test]
fn output_is_jpeg() {
    let out = render(&png_image(100, 100), DerivativeSpec::bounded(PRIMARY_BOUND)).unwrap();
    assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
}

#[test]
fn jpeg_source_is_accepted() {
    let first = render(&png_image(1200, 900), DerivativeSpec::bounded(PRIMARY_BOUND)).unwrap();
    // Re-run on the JPEG output, as happens when a user re-crops an image.
    let second = render(&first, DerivativeSpec::exact(THUMBNAIL_SIZE)).unwrap();
    assert_eq!(dimensions(&second), (40, 40));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = render(b"not an image", DerivativeSpec::bounded(PRIMARY_BOUND)).unwrap_err();
    assert!(matches!(err, MediaError::Decode(_)));
}
