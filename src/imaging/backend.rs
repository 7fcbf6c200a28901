//! Image processing backend trait and error type.
//!
//! The [`ImageBackend`] trait covers the four pipeline stages that touch pixels
//! or files: load, crop, resample and write. Geometry stays out of it; the
//! backend is told exactly which rectangle to cut and which size to produce.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use a recording mock.

use super::calculations::CropRect;
use super::params::TargetSize;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures from the backend, each labelled with the stage it came from.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("open file: {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("decode image: {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("decode image: {}: image has no pixels", .path.display())]
    EmptyImage { path: PathBuf },
    #[error("crop image: {rect} does not fit the {width}x{height} source")]
    InvalidRegion {
        rect: CropRect,
        width: u32,
        height: u32,
    },
    #[error("create file: {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("encode image: {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Trait for image processing backends.
///
/// Buffers move through by value: each stage consumes its input and hands back
/// a new owned image, so no two stages ever hold the same pixels.
pub trait ImageBackend {
    /// Open and fully decode an image, detecting the format from its content.
    fn load(&self, path: &Path) -> Result<RgbaImage, BackendError>;

    /// Copy the pixels inside `rect` into a new buffer.
    fn crop(&self, image: RgbaImage, rect: CropRect) -> Result<RgbaImage, BackendError>;

    /// Scale to exactly `target` pixels.
    fn resample(&self, image: RgbaImage, target: TargetSize) -> RgbaImage;

    /// Encode and write the image to `path`.
    fn write(&self, image: &RgbaImage, path: &Path) -> Result<(), BackendError>;
}
