//! Parameter types for crop operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides what to crop) and the [`backend`](super::backend) (which
//! does the actual pixel work). This separation allows swapping backends
//! (e.g. for testing with a mock) without changing batch logic.

use super::geometry::{BoundsPolicy, CropWindow};
use std::path::PathBuf;

/// Everything a backend needs to crop one frame into one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropParams {
    /// The frame to read.
    pub source: PathBuf,
    /// Where the cropped frame is written. The parent directory must
    /// already exist; backends do not create it.
    pub output: PathBuf,
    /// The region to keep.
    pub window: CropWindow,
    /// What to do when `window` reaches outside the frame.
    pub policy: BoundsPolicy,
}
