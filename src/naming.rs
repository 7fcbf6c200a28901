//! Output filename derivation.
//!
//! The result is written next to its source as `{stem}-{W}x{H}.png`:
//! - `photos/beach.jpg` at 300x200 → `photos/beach-300x200.png`
//! - `scan.tar.gz` at 64x64 → `scan.tar-64x64.png` (only the last extension goes)
//! - `README` at 10x10 → `README-10x10.png`
//!
//! The output is always PNG whatever the input format was.

use crate::imaging::TargetSize;
use std::path::{Path, PathBuf};

/// Joins the source stem and the target dimensions.
pub const SEPARATOR: char = '-';

/// Extension of every written file.
pub const OUTPUT_EXTENSION: &str = "png";

/// Derive the output path for `source` resized to `target`.
pub fn output_path(source: &Path, target: TargetSize) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}{SEPARATOR}{target}.{OUTPUT_EXTENSION}"))
}
