//! Top-level run: validated config in, written image out.
//!
//! Derives the output path, builds [`CropParams`] and drives the production
//! [`RustBackend`] through the pipeline. Every failure is terminal and maps to
//! one exit status:
//!
//! | Category | Exit code |
//! |---|---|
//! | usage (arity, unknown flag, non-positive or oversized dimension) | 2 |
//! | parse (non-numeric dimension) | 3 |
//! | I/O (open input, create output) | 4 |
//! | decode | 5 |
//! | encode | 6 |
//! | internal (crop region outside source) | 70 |

use crate::config::{ConfigError, CropConfig};
use crate::imaging::{
    BackendError, CropOutcome, CropParams, ImageBackend, RustBackend, crop_image,
};
use crate::naming::output_path;
use thiserror::Error;

pub const EXIT_USAGE: u8 = 2;
pub const EXIT_PARSE: u8 = 3;
pub const EXIT_IO: u8 = 4;
pub const EXIT_DECODE: u8 = 5;
pub const EXIT_ENCODE: u8 = 6;
pub const EXIT_INTERNAL: u8 = 70;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Imaging(#[from] BackendError),
}

impl ProcessError {
    /// Process exit status for this failure category.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProcessError::Config(ConfigError::Parse { .. }) => EXIT_PARSE,
            ProcessError::Config(_) => EXIT_USAGE,
            ProcessError::Imaging(err) => match err {
                BackendError::Open { .. } | BackendError::Create { .. } => EXIT_IO,
                BackendError::Decode { .. } | BackendError::EmptyImage { .. } => EXIT_DECODE,
                BackendError::Encode { .. } => EXIT_ENCODE,
                BackendError::InvalidRegion { .. } => EXIT_INTERNAL,
            },
        }
    }
}

/// Plan the run without executing it.
pub fn plan(config: &CropConfig) -> CropParams {
    CropParams {
        source: config.source.clone(),
        output: output_path(&config.source, config.target),
        target: config.target,
    }
}

/// Run the pipeline with the production backend.
pub fn run(config: &CropConfig) -> Result<CropOutcome, ProcessError> {
    run_with(&RustBackend::new(), config)
}

/// Run the pipeline with any backend.
pub fn run_with(
    backend: &impl ImageBackend,
    config: &CropConfig,
) -> Result<CropOutcome, ProcessError> {
    Ok(crop_image(backend, &plan(config))?)
}
