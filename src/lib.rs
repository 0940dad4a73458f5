//! # Framecrop
//!
//! A batch cropper for TIFF capture sequences. Point it at a directory of
//! frames and it cuts the same fixed window out of every one, writing the
//! crops under their original filenames into an output directory.
//!
//! The stock window is 512x96 pixels at offset (220, 45), sized for the
//! sensor strip the tool was built around. Every part of it can be
//! overridden per directory or per invocation.
//!
//! # Architecture: Scan, Then Crop
//!
//! A run has two stages:
//!
//! ```text
//! 1. Scan   input_dir/  →  sorted listing of *.tiff files
//! 2. Crop   listing     →  output_dir/ (one cropped TIFF per frame)
//! ```
//!
//! The full listing is collected and sorted before any pixel work starts,
//! so output order is stable regardless of directory iteration order, and a
//! scan failure aborts before anything is written.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the `.tiff` frames in the input directory, sorted by filename |
//! | [`process`] | Runs the batch: crops every listed frame, emits progress events |
//! | [`imaging`] | Pixel work: decoding, crop-window geometry, padding, TIFF encoding |
//! | [`config`] | Stock settings, `framecrop.toml` loading, CLI override merging |
//! | [`output`] | CLI output formatting for run progress and `list` rows |
//!
//! # Design Decisions
//!
//! ## Selectable Bounds Modes
//!
//! Frames smaller than the crop window are a real occurrence in capture
//! sequences (test shots, reconfigured sensors), so the out-of-bounds
//! behavior is an explicit policy rather than a hard-coded choice:
//!
//! - **`pad`** (default): always produce a full-size output. Pixels the
//!   source covers are copied; the rest stay black. Every output in a batch
//!   has identical dimensions, which is what downstream measurement scripts
//!   assume.
//! - **`clamp`**: shrink the window to the frame and write only the overlap.
//! - **`fail`**: abort the batch with an error.
//!
//! ## Depth-Preserving Padding
//!
//! Padding works per pixel format instead of converting through RGBA8: a
//! 16-bit grayscale source pads to a 16-bit grayscale output. The backend
//! picks the matching buffer type for each [`image::DynamicImage`] variant,
//! so bit depth and channel count survive the trip through the tool.
//!
//! ## Sorted Processing Order
//!
//! The scan sorts filenames bytewise before any cropping starts. Progress
//! output, error reporting, and the order outputs land on disk are all
//! deterministic across platforms and filesystems.
//!
//! ## Errors Are Fatal
//!
//! The first failure of any kind (unreadable directory, undecodable frame,
//! failed write) aborts the whole batch. A capture sequence is processed as
//! a unit; a half-converted directory with a silent gap in the middle is
//! worse than no output, and the frames already written make it obvious
//! where the run stopped.
//!
//! ## Per-Directory Config
//!
//! `framecrop.toml` lives in the input directory, next to the frames it
//! describes. A capture directory carries its own crop geometry, so re-runs
//! don't depend on remembering the right flags. CLI flags override the file
//! for one-off adjustments; precedence is stock defaults, then file, then
//! flags.

pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;
