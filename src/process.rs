//! Batch crop execution.
//!
//! Second step of a batch run. Takes the listing from the scan step and
//! crops every frame into the output directory, stopping at the first
//! failure.
//!
//! ## Batch Contract
//!
//! - Frames are processed strictly in listing order (sorted by filename).
//! - Each output file keeps its source filename byte-for-byte, inside the
//!   output directory.
//! - The output directory must already exist; the run never creates it. A
//!   missing directory surfaces as a write error on the first frame.
//! - The first error of any kind aborts the batch. Frames written before
//!   the failure stay on disk; nothing is rolled back.
//!
//! [`run`] reports progress through an event callback so the CLI can print
//! each frame as it lands, and returns totals for the summary line.

use crate::config::JobConfig;
use crate::imaging::{
    BackendError, Dimensions, ImageBackend, crop_to_file, get_dimensions, planned_output_size,
};
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
    #[error("Crop failed: {0}")]
    Imaging(#[from] BackendError),
}

/// Everything one batch run needs, resolved before the run starts.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding the source frames.
    pub input_dir: PathBuf,
    /// Directory the cropped frames are written to. Must already exist.
    pub output_dir: PathBuf,
    /// Effective job settings (defaults, config file, CLI overrides).
    pub job: JobConfig,
}

/// Progress event emitted after each written frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropEvent {
    FrameWritten {
        /// 1-based position in the batch.
        index: usize,
        /// Display form of the name; lossy when it is not valid UTF-8.
        filename: String,
        /// Exact path written, raw bytes preserved.
        output_path: PathBuf,
        /// Pixel size of the written file.
        size: Dimensions,
    },
}

/// Totals for the summary line after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub cropped: usize,
    pub output_dir: PathBuf,
}

/// Crop every matching frame in `config.input_dir` into `config.output_dir`.
///
/// Calls `on_event` after each written frame. Returns the totals, or the
/// first error encountered.
pub fn run(
    backend: &impl ImageBackend,
    config: &BatchConfig,
    mut on_event: impl FnMut(&CropEvent),
) -> Result<BatchReport, ProcessError> {
    let listing = scan::scan(&config.input_dir)?;
    let window = config.job.crop.window();

    for (i, file) in listing.files.iter().enumerate() {
        let output_path = config.output_dir.join(&file.filename);
        let size = crop_to_file(backend, &file.path, &output_path, window, config.job.bounds)?;
        on_event(&CropEvent::FrameWritten {
            index: i + 1,
            filename: file.filename.to_string_lossy().into_owned(),
            output_path,
            size,
        });
    }

    Ok(BatchReport {
        cropped: listing.files.len(),
        output_dir: config.output_dir.clone(),
    })
}

/// One row of `list` output: a matched frame and what a run would produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Display form of the name; lossy when it is not valid UTF-8.
    pub filename: String,
    /// Source frame size.
    pub dimensions: Dimensions,
    /// Output size under the effective settings, or `None` when a run
    /// would abort on this frame.
    pub planned: Option<Dimensions>,
}

/// Identify every matching frame without writing anything.
///
/// Backs the `list` command: same scan as [`run`], but frames are only
/// identified and sized up, never decoded in full or written.
pub fn inspect(
    backend: &impl ImageBackend,
    input_dir: &Path,
    job: &JobConfig,
) -> Result<Vec<ListEntry>, ProcessError> {
    let listing = scan::scan(input_dir)?;
    let window = job.crop.window();

    let mut entries = Vec::with_capacity(listing.files.len());
    for file in &listing.files {
        let dimensions = get_dimensions(backend, &file.path)?;
        entries.push(ListEntry {
            filename: file.filename.to_string_lossy().into_owned(),
            dimensions,
            planned: planned_output_size(dimensions, window, job.bounds),
        });
    }
    Ok(entries)
}
