//! # crop
//!
//! Center-crop a raster image to a target aspect ratio, scale it to exact
//! dimensions and write the result as PNG next to the original.
//!
//! # Architecture: One Straight Pipeline
//!
//! ```text
//! parse → load → compute crop → crop → resample → write
//! ```
//!
//! Each step runs once and the first failure ends the run. Pixel buffers move
//! from step to step by value; nothing is shared and nothing persists except
//! the output file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Validates command-line values into a typed [`config::CropConfig`] |
//! | [`imaging`] | Crop geometry, the backend trait and the `image`-based backend |
//! | [`naming`] | `{stem}-{W}x{H}.png` output path derivation |
//! | [`process`] | Runs the pipeline, maps failures to exit codes |
//! | [`output`] | Success summary formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Path First
//!
//! The command line is `crop <path> <width> <height>`. The dimensions-first
//! form is not accepted.
//!
//! ## Exact Integer Geometry
//!
//! The crop rectangle compares and applies aspect ratios by
//! cross-multiplication, so the result is the mathematical floor. A source
//! whose ratio already matches the target is never trimmed by a pixel of
//! floating-point error.
//!
//! ## PNG-Only Output
//!
//! Output is always lossless PNG regardless of the input format, so a second
//! generation of lossy compression is never added.
//!
//! ## Distinct Exit Codes
//!
//! Every failure category has its own non-zero exit status (see
//! [`process`]), and the one-line `<context>: <error>` message goes to stderr.

pub mod config;
pub mod imaging;
pub mod logging;
pub mod naming;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
