//! CLI output formatting for batch runs.
//!
//! # Output Format
//!
//! ## Run
//!
//! ```text
//! ==> Cropping 512x96+220+45 from Test_images/Slight under focus
//!     001 frame-0001.tiff -> Test_images/512x96crop/frame-0001.tiff
//!     002 frame-0002.tiff -> Test_images/512x96crop/frame-0002.tiff
//! Done: 2 frames cropped -> Test_images/512x96crop
//! ```
//!
//! A run that matches no files prints a notice instead of the summary:
//!
//! ```text
//! ==> Cropping 512x96+220+45 from empty_dir
//! No matching .tiff files found in empty_dir
//! ```
//!
//! ## List
//!
//! ```text
//! ==> Frames in Test_images/Slight under focus
//!     001 frame-0001.tiff (1936x1216) -> 512x96
//!     002 small.tiff (600x100) -> out of bounds
//! 2 frames matched
//! ```
//!
//! # Architecture
//!
//! Each piece of output has a `format_*` function for testability and a
//! `print_*` wrapper that writes to stdout. Format functions are pure: no
//! I/O, no side effects.

use crate::process::{BatchConfig, BatchReport, CropEvent, ListEntry};
use crate::scan::FRAME_SUFFIX;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Pluralize "frame" for a count.
fn frames_word(n: usize) -> &'static str {
    if n == 1 { "frame" } else { "frames" }
}

// ============================================================================
// Run output
// ============================================================================

/// Format the banner printed before a batch starts.
pub fn format_run_header(config: &BatchConfig) -> String {
    format!(
        "==> Cropping {} from {}",
        config.job.crop.window(),
        config.input_dir.display()
    )
}

/// Print the run banner to stdout.
pub fn print_run_header(config: &BatchConfig) {
    println!("{}", format_run_header(config));
}

/// Format one progress line for a written frame.
pub fn format_crop_event(event: &CropEvent) -> String {
    let CropEvent::FrameWritten {
        index,
        filename,
        output_path,
        ..
    } = event;
    format!(
        "    {} {} -> {}",
        format_index(*index),
        filename,
        output_path.display()
    )
}

/// Print a progress line to stdout.
pub fn print_crop_event(event: &CropEvent) {
    println!("{}", format_crop_event(event));
}

/// Format the summary line for a finished run.
pub fn format_summary(report: &BatchReport) -> String {
    format!(
        "Done: {} {} cropped -> {}",
        report.cropped,
        frames_word(report.cropped),
        report.output_dir.display()
    )
}

/// Print the run summary to stdout.
pub fn print_summary(report: &BatchReport) {
    println!("{}", format_summary(report));
}

/// Format the notice for a run that matched no files.
pub fn format_no_matches(input_dir: &Path) -> String {
    format!(
        "No matching {} files found in {}",
        FRAME_SUFFIX,
        input_dir.display()
    )
}

/// Print the no-match notice to stdout.
pub fn print_no_matches(input_dir: &Path) {
    println!("{}", format_no_matches(input_dir));
}

// ============================================================================
// List output
// ============================================================================

/// Format `list` output: header, one row per matched frame, count footer.
///
/// Each row shows the source dimensions and the size a run would write, or
/// `out of bounds` for frames a run would abort on.
pub fn format_list_output(input_dir: &Path, entries: &[ListEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("==> Frames in {}", input_dir.display()));

    for (i, entry) in entries.iter().enumerate() {
        let planned = match entry.planned {
            Some(size) => size.to_string(),
            None => "out of bounds".to_string(),
        };
        lines.push(format!(
            "    {} {} ({}) -> {}",
            format_index(i + 1),
            entry.filename,
            entry.dimensions,
            planned
        ));
    }

    lines.push(format!(
        "{} {} matched",
        entries.len(),
        frames_word(entries.len())
    ));
    lines
}

/// Print list output to stdout.
pub fn print_list_output(input_dir: &Path, entries: &[ListEntry]) {
    for line in format_list_output(input_dir, entries) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
