//! High-level image operations.
//!
//! These functions combine calculations with backend execution: they compute
//! the geometry, then drive the backend through each stage in order.

use super::backend::{BackendError, ImageBackend};
use super::calculations::center_crop_rect;
use super::params::{CropOutcome, CropParams};
use tracing::{debug, info, instrument};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Center-crop the source to the target aspect ratio, scale it to the exact
/// target size and write it out.
///
/// Stages run strictly in order (load, crop, resample, write) and the first
/// failure returns immediately; nothing after it runs.
#[instrument(skip_all, fields(source = %params.source.display(), target = %params.target))]
pub fn crop_image(backend: &impl ImageBackend, params: &CropParams) -> Result<CropOutcome> {
    let source = backend.load(&params.source)?;
    let source_dims = source.dimensions();
    debug!(width = source_dims.0, height = source_dims.1, "decoded source");

    let rect = center_crop_rect(source_dims, params.target);
    debug!(crop = %rect, "computed crop region");

    let cropped = backend.crop(source, rect)?;
    let resized = backend.resample(cropped, params.target);
    backend.write(&resized, &params.output)?;
    info!(output = %params.output.display(), "wrote image");

    Ok(CropOutcome {
        source: params.source.clone(),
        source_dims,
        crop: rect,
        output: params.output.clone(),
        output_dims: resized.dimensions(),
    })
}
