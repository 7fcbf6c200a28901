//! CLI output formatting.
//!
//! A successful run prints a short summary:
//!
//! ```text
//! photos/beach.jpg (1920x1080)
//!     Crop: 1620x1080 at (150, 0)
//!     Output: photos/beach-300x200.png (300x200)
//! ```
//!
//! [`format_outcome`] is pure and returns the lines for testability;
//! [`print_outcome`] writes them to stdout. Errors never go through here:
//! `main` prints them to stderr.

use crate::imaging::CropOutcome;

const INDENT: &str = "    ";

/// Summary lines for a completed run.
pub fn format_outcome(outcome: &CropOutcome) -> Vec<String> {
    let (src_w, src_h) = outcome.source_dims;
    let (out_w, out_h) = outcome.output_dims;
    vec![
        format!("{} ({src_w}x{src_h})", outcome.source.display()),
        format!("{INDENT}Crop: {}", outcome.crop),
        format!(
            "{INDENT}Output: {} ({out_w}x{out_h})",
            outcome.output.display()
        ),
    ]
}

pub fn print_outcome(outcome: &CropOutcome) {
    for line in format_outcome(outcome) {
        println!("{}", line);
    }
}
