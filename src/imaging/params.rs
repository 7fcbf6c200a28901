//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`operations`](super::operations), which sequences the
//! pipeline, and the [`backend`](super::backend), which does the pixel and
//! codec work. A mock backend can be swapped in without touching the
//! operation logic.
//!
//! ## Types
//!
//! - [`TargetSize`]: exact output dimensions, both at least 1 px.
//! - [`CropParams`]: source path, output path and target size for one run.
//! - [`CropOutcome`]: what a run did, for reporting.

use super::calculations::CropRect;
use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Exact output dimensions. Zero is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl TargetSize {
    pub fn new(width: NonZeroU32, height: NonZeroU32) -> Self {
        Self { width, height }
    }

    /// Build from raw values, `None` if either is zero.
    pub fn from_u32(width: u32, height: u32) -> Option<Self> {
        Some(Self::new(NonZeroU32::new(width)?, NonZeroU32::new(height)?))
    }

    pub fn width(self) -> u32 {
        self.width.get()
    }

    pub fn height(self) -> u32 {
        self.height.get()
    }

    pub fn as_tuple(self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parameters for one center-crop-and-resize run.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub target: TargetSize,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct CropOutcome {
    pub source: PathBuf,
    /// Decoded source dimensions (width, height).
    pub source_dims: (u32, u32),
    /// Region of the source that was kept.
    pub crop: CropRect,
    pub output: PathBuf,
    /// Dimensions of the written image; always equals the requested target.
    pub output_dims: (u32, u32),
}
