//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::TargetSize;
use std::fmt;

/// A crop region in source-image pixel coordinates.
///
/// Edges are half-open: `left`/`top` are inclusive, `right`/`bottom` exclusive.
/// Anything produced by [`center_crop_rect`] satisfies
/// `0 <= left < right <= W` and `0 <= top < bottom <= H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width() as f64 / self.height() as f64
    }

    /// Whether the rectangle is non-empty and lies inside a `width × height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= width
            && self.bottom <= height
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width(),
            self.height(),
            self.left,
            self.top
        )
    }
}

/// Calculate the centered crop rectangle matching a target aspect ratio.
///
/// One source dimension is always kept whole; the other is cut down so that
/// `crop_w / crop_h` matches `target_w / target_h` up to truncation. Equal
/// ratios keep the full image.
///
/// # Arguments
/// * `source` - Source image dimensions (width, height)
/// * `target` - Target dimensions; non-zero by construction
///
/// # Panics
/// Panics if either source dimension is zero. Decoders never hand back such an
/// image: the backend reports it as a decode error first.
///
/// # Examples
/// ```
/// # use crop::imaging::{TargetSize, center_crop_rect};
/// // Square source to 16:9 keeps the width and trims top and bottom
/// let target = TargetSize::from_u32(16, 9).unwrap();
/// let rect = center_crop_rect((1000, 1000), target);
/// assert_eq!((rect.width(), rect.height()), (1000, 562));
/// assert_eq!((rect.top, rect.bottom), (219, 781));
/// ```
pub fn center_crop_rect(source: (u32, u32), target: TargetSize) -> CropRect {
    assert!(
        source.0 > 0 && source.1 > 0,
        "source image must not be empty, got {}x{}",
        source.0,
        source.1
    );
    let (src_w, src_h) = (source.0 as u64, source.1 as u64);
    let (tgt_w, tgt_h) = (target.width() as u64, target.height() as u64);

    // W/H > Tw/Th ⇔ W·Th > Tw·H; the divisions below are exact floors
    let (crop_w, crop_h) = if src_w * tgt_h > tgt_w * src_h {
        // Source is wider: keep full height, trim the sides
        let w = src_h * tgt_w / tgt_h;
        (w.clamp(1, src_w), src_h)
    } else {
        // Source is taller (or equal): keep full width, trim top and bottom
        let h = src_w * tgt_h / tgt_w;
        (src_w, h.clamp(1, src_h))
    };

    // All four values are bounded by the u32 source dimensions
    let (src_w, src_h) = source;
    let (crop_w, crop_h) = (crop_w as u32, crop_h as u32);

    let left = (src_w - crop_w) / 2;
    let top = (src_h - crop_h) / 2;

    CropRect {
        left,
        top,
        right: left + crop_w,
        bottom: top + crop_h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn size(w: u32, h: u32) -> TargetSize {
        TargetSize::from_u32(w, h).unwrap()
    }

    // =========================================================================
    // center_crop_rect: fixed cases
    // =========================================================================

    #[test]
    fn square_to_widescreen_keeps_width() {
        // 1000x1000 → 16:9: height = floor(1000 * 9/16) = 562
        let rect = center_crop_rect((1000, 1000), size(16, 9));
        assert_eq!(
            rect,
            CropRect {
                left: 0,
                top: 219,
                right: 1000,
                bottom: 781,
            }
        );
    }

    #[test]
    fn widescreen_to_3_2_keeps_height() {
        // 1920x1080 → 300x200 (1.5): width = 1080 * 1.5 = 1620
        let rect = center_crop_rect((1920, 1080), size(300, 200));
        assert_eq!(rect.width(), 1620);
        assert_eq!(rect.height(), 1080);
        assert_eq!(rect.left, 150);
        assert_eq!(rect.top, 0);
        assert_eq!(rect.aspect_ratio(), 1.5);
    }

    #[test]
    fn portrait_source_to_square() {
        let rect = center_crop_rect((600, 800), size(1, 1));
        assert_eq!(
            rect,
            CropRect {
                left: 0,
                top: 100,
                right: 600,
                bottom: 700,
            }
        );
    }

    #[test]
    fn equal_ratio_keeps_full_image() {
        let rect = center_crop_rect((800, 600), size(400, 300));
        assert_eq!(
            rect,
            CropRect {
                left: 0,
                top: 0,
                right: 800,
                bottom: 600,
            }
        );
    }

    #[test]
    fn odd_margin_rounds_left() {
        // 101x50 → 1:1: crop 50 wide, 51 px of margin → 25 left, 26 right
        let rect = center_crop_rect((101, 50), size(1, 1));
        assert_eq!(rect.left, 25);
        assert_eq!(rect.right, 75);
        assert_eq!(101 - rect.right, 26);
    }

    #[test]
    fn extreme_mismatch_keeps_at_least_one_pixel() {
        // 1x1000 → 1000:1 would truncate to a zero-height crop
        let rect = center_crop_rect((1, 1000), size(1000, 1));
        assert_eq!(rect.width(), 1);
        assert_eq!(rect.height(), 1);
        assert!(rect.fits_within(1, 1000));
    }

    #[test]
    fn single_pixel_source() {
        let rect = center_crop_rect((1, 1), size(300, 200));
        assert_eq!(
            rect,
            CropRect {
                left: 0,
                top: 0,
                right: 1,
                bottom: 1,
            }
        );
    }

    #[test]
    #[should_panic(expected = "source image must not be empty")]
    fn empty_source_panics() {
        center_crop_rect((0, 480), size(300, 200));
    }

    // =========================================================================
    // CropRect helpers
    // =========================================================================

    #[test]
    fn display_shows_size_and_origin() {
        let rect = CropRect {
            left: 150,
            top: 0,
            right: 1770,
            bottom: 1080,
        };
        assert_eq!(rect.to_string(), "1620x1080 at (150, 0)");
    }

    #[test]
    fn fits_within_rejects_out_of_bounds() {
        let rect = CropRect {
            left: 10,
            top: 10,
            right: 110,
            bottom: 60,
        };
        assert!(rect.fits_within(110, 60));
        assert!(!rect.fits_within(109, 60));
        assert!(!rect.fits_within(110, 59));
    }

    #[test]
    fn fits_within_rejects_empty() {
        let rect = CropRect {
            left: 5,
            top: 0,
            right: 5,
            bottom: 10,
        };
        assert!(!rect.fits_within(100, 100));
    }

    // =========================================================================
    // center_crop_rect: properties
    // =========================================================================

    proptest! {
        #[test]
        fn rect_always_within_source_bounds(
            src_w in 1u32..5000,
            src_h in 1u32..5000,
            tgt_w in 1u32..5000,
            tgt_h in 1u32..5000,
        ) {
            let rect = center_crop_rect((src_w, src_h), size(tgt_w, tgt_h));
            prop_assert!(rect.fits_within(src_w, src_h), "{rect:?} outside {src_w}x{src_h}");
        }

        #[test]
        fn rect_ratio_within_one_pixel_of_target(
            src_w in 1u32..5000,
            src_h in 1u32..5000,
            tgt_w in 1u32..5000,
            tgt_h in 1u32..5000,
        ) {
            let rect = center_crop_rect((src_w, src_h), size(tgt_w, tgt_h));
            let tgt_aspect = tgt_w as f64 / tgt_h as f64;
            let (w, h) = (rect.width() as f64, rect.height() as f64);

            // The trimmed side was truncated, so the exact value lies within one
            // pixel of it; clamping to 1 px only ever happens below that.
            if rect.height() == src_h && rect.width() < src_w {
                // |w/h - Tw/Th| · h < 1 ⇔ width within one pixel of h · Tw/Th
                prop_assert!((rect.aspect_ratio() - tgt_aspect).abs() * h < 1.0);
            } else {
                let exact = w / tgt_aspect;
                prop_assert!((exact - h).abs() < 1.0 || h == 1.0);
            }
        }

        #[test]
        fn rect_is_centered(
            src_w in 1u32..5000,
            src_h in 1u32..5000,
            tgt_w in 1u32..5000,
            tgt_h in 1u32..5000,
        ) {
            let rect = center_crop_rect((src_w, src_h), size(tgt_w, tgt_h));
            let right_margin = src_w - rect.right;
            let bottom_margin = src_h - rect.bottom;
            prop_assert!(right_margin - rect.left <= 1);
            prop_assert!(bottom_margin - rect.top <= 1);
        }

        #[test]
        fn matching_ratio_keeps_full_image(
            base_w in 1u32..200,
            base_h in 1u32..200,
            scale in 1u32..20,
        ) {
            let rect = center_crop_rect((base_w * scale, base_h * scale), size(base_w, base_h));
            prop_assert_eq!(rect.width(), base_w * scale);
            prop_assert_eq!(rect.height(), base_h * scale);
        }
    }
}
