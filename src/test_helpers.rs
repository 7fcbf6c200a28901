//! Shared test utilities: synthetic images and fixture files.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let path = tmp.path().join("photo.jpg");
//! write_test_image(&path, 1920, 1080, ImageFormat::Jpeg);
//! ```

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Opaque RGBA image whose pixels encode their own coordinates.
///
/// Every pixel differs from its neighbours, so crop offsets show up as
/// mismatches instead of passing by accident.
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

/// Encode a gradient of the given size to `path` in `format`.
///
/// Written as RGB8 so lossy alpha-less encoders (JPEG) accept it; the file
/// name's extension is ignored.
pub fn write_test_image(path: &Path, width: u32, height: u32, format: ImageFormat) {
    DynamicImage::ImageRgba8(gradient(width, height))
        .to_rgb8()
        .save_with_format(path, format)
        .unwrap_or_else(|e| panic!("failed to write fixture {}: {e}", path.display()));
}

/// Decode the image at `path` and return its dimensions.
pub fn image_dims(path: &Path) -> (u32, u32) {
    let img = image::open(path).unwrap_or_else(|e| panic!("failed to open {}: {e}", path.display()));
    (img.width(), img.height())
}
