//! Run configuration.
//!
//! There are no config files and no environment variables: the command line is
//! the whole configuration. `main` collects raw strings with clap, and
//! [`CropConfig::from_args`] validates them into typed values.
//!
//! ## Dimension rules
//!
//! ```text
//! "300"   → 300
//! "abc"   → ConfigError::Parse     ("define target width: invalid digit found in string")
//! "0"     → ConfigError::NotPositive
//! "-5"    → ConfigError::NotPositive
//! "99999999999" → ConfigError::TooLarge
//! ```
//!
//! Dimensions are read as signed base-10 integers first so that negative
//! values get a precise message instead of a generic parse failure.
//!
//! Both dimensions together must also fit the output buffer: an RGBA target
//! of `width × height × 4` bytes may not exceed [`MAX_OUTPUT_BYTES`], so
//! `100000 100000` is refused up front instead of failing the allocation.

use crate::imaging::TargetSize;
use std::fmt;
use std::num::{NonZeroU32, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Largest decoded output buffer a run may allocate, in bytes (512 MiB, the
/// same ceiling `image::Limits` applies to decoding by default).
pub const MAX_OUTPUT_BYTES: u64 = 512 * 1024 * 1024;

/// Bytes per output pixel (RGBA, 8 bits per channel).
const BYTES_PER_PIXEL: u64 = 4;

/// Which target dimension a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("define target {axis}: {source}")]
    Parse {
        axis: Axis,
        source: ParseIntError,
    },
    #[error("define target {axis}: must be a positive integer, got {value}")]
    NotPositive { axis: Axis, value: i64 },
    #[error("define target {axis}: {value} is too large")]
    TooLarge { axis: Axis, value: i64 },
    #[error(
        "define target size: {width}x{height} needs {bytes} bytes, over the limit of {limit}",
        limit = MAX_OUTPUT_BYTES
    )]
    OutputTooLarge { width: u32, height: u32, bytes: u64 },
}

/// Validated configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct CropConfig {
    pub source: PathBuf,
    pub target: TargetSize,
}

impl CropConfig {
    /// Validate raw command-line values.
    ///
    /// Width is checked before height, so a run with two bad values reports
    /// the width. The combined size is checked last.
    pub fn from_args(source: PathBuf, width: &str, height: &str) -> Result<Self, ConfigError> {
        let width = parse_dimension(Axis::Width, width)?;
        let height = parse_dimension(Axis::Height, height)?;
        check_output_size(width.get(), height.get())?;
        Ok(Self {
            source,
            target: TargetSize::new(width, height),
        })
    }
}

/// Parse one target dimension as a base-10 integer and require it to be ≥ 1.
pub fn parse_dimension(axis: Axis, raw: &str) -> Result<NonZeroU32, ConfigError> {
    let value: i64 = raw
        .parse()
        .map_err(|source| ConfigError::Parse { axis, source })?;
    match u32::try_from(value).ok().and_then(NonZeroU32::new) {
        Some(dimension) => Ok(dimension),
        None if value <= 0 => Err(ConfigError::NotPositive { axis, value }),
        None => Err(ConfigError::TooLarge { axis, value }),
    }
}

/// Reject targets whose RGBA buffer would exceed [`MAX_OUTPUT_BYTES`].
pub fn check_output_size(width: u32, height: u32) -> Result<(), ConfigError> {
    // u32 · u32 · 4 < 2^66 could overflow u64; saturate instead
    let bytes = (width as u64)
        .saturating_mul(height as u64)
        .saturating_mul(BYTES_PER_PIXEL);
    if bytes > MAX_OUTPUT_BYTES {
        return Err(ConfigError::OutputTooLarge {
            width,
            height,
            bytes,
        });
    }
    Ok(())
}
