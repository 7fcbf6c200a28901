//! Image processing: pure Rust, built on the `image` crate.
//!
//! | Stage | Crate / function |
//! |---|---|
//! | **Load** | `ImageReader` with content-sniffed format |
//! | **Crop geometry** | [`center_crop_rect`] |
//! | **Crop** | `imageops::crop_imm` |
//! | **Resample** | `imageops::resize` with a bilinear (triangle) filter |
//! | **Write** | `PngEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop geometry (unit testable)
//! - **Parameters**: Data structures describing a run and its result
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: The pipeline, combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{CropRect, center_crop_rect};
pub use operations::crop_image;
pub use params::{CropOutcome, CropParams, TargetSize};
pub use rust_backend::RustBackend;
