//! Pure Rust image backend on top of the `image` crate.
//!
//! ## Crate mapping
//!
//! | Stage | Crate / function |
//! |---|---|
//! | Decode (BMP, GIF, JPEG, PNG, TIFF, WebP) | `ImageReader::with_guessed_format` + `decode` |
//! | Crop | `image::imageops::crop_imm` (plain copy) |
//! | Resample | `image::imageops::resize` with [`RESAMPLE_FILTER`] |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |

use super::backend::{BackendError, ImageBackend};
use super::calculations::CropRect;
use super::params::TargetSize;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ImageError, ImageReader, RgbaImage};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// The one interpolation filter used for scaling (bilinear).
pub const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

/// Backend that decodes, crops, scales and encodes in-process.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode as PNG through `writer`, flushing so buffered write errors surface.
fn encode_png<W: Write>(image: &RgbaImage, writer: &mut W) -> Result<(), ImageError> {
    let encoder =
        PngEncoder::new_with_quality(&mut *writer, CompressionType::Default, PngFilter::Adaptive);
    image.write_with_encoder(encoder)?;
    writer.flush().map_err(ImageError::IoError)
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<RgbaImage, BackendError> {
        let file = File::open(path).map_err(|source| BackendError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        // No format hint from the extension: only the content decides
        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|source| BackendError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(format = ?reader.format(), "detected input format");

        let decoded = reader.decode().map_err(|source| BackendError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(BackendError::EmptyImage {
                path: path.to_path_buf(),
            });
        }
        Ok(decoded.into_rgba8())
    }

    fn crop(&self, image: RgbaImage, rect: CropRect) -> Result<RgbaImage, BackendError> {
        let (width, height) = image.dimensions();
        if !rect.fits_within(width, height) {
            return Err(BackendError::InvalidRegion {
                rect,
                width,
                height,
            });
        }
        if rect.width() == width && rect.height() == height {
            return Ok(image);
        }
        Ok(imageops::crop_imm(&image, rect.left, rect.top, rect.width(), rect.height()).to_image())
    }

    fn resample(&self, image: RgbaImage, target: TargetSize) -> RgbaImage {
        if image.dimensions() == target.as_tuple() {
            return image;
        }
        imageops::resize(&image, target.width(), target.height(), RESAMPLE_FILTER)
    }

    fn write(&self, image: &RgbaImage, path: &Path) -> Result<(), BackendError> {
        let file = File::create(path).map_err(|source| BackendError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        write_or_remove(image, BufWriter::new(file), path)
    }
}

/// Encode into `writer`, the already-created file at `path`. On failure the
/// writer is closed and the partial file at `path` deleted.
fn write_or_remove<W: Write>(
    image: &RgbaImage,
    mut writer: W,
    path: &Path,
) -> Result<(), BackendError> {
    match encode_png(image, &mut writer) {
        Ok(()) => Ok(()),
        Err(source) => {
            drop(writer);
            if let Err(e) = std::fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "could not remove partial output");
            }
            Err(BackendError::Encode {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
