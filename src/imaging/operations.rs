//! High-level crop operations.
//!
//! These functions combine window geometry with backend execution.
//! They take settings, compute parameters, and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::geometry::{self, BoundsPolicy, CropWindow};
use super::params::CropParams;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Read a frame's pixel size without decoding it in full.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<Dimensions> {
    backend.identify(path)
}

/// Plan a crop operation without executing it.
///
/// Useful for testing parameter generation.
pub fn plan_crop(
    source: &Path,
    output: &Path,
    window: CropWindow,
    policy: BoundsPolicy,
) -> CropParams {
    CropParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        window,
        policy,
    }
}

/// Crop one frame into `output` and return the written pixel size.
pub fn crop_to_file(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    window: CropWindow,
    policy: BoundsPolicy,
) -> Result<Dimensions> {
    backend.crop(&plan_crop(source, output, window, policy))
}

/// Output size a frame of the given dimensions would produce under the
/// window and bounds mode, or `None` when a run would abort on it instead.
pub fn planned_output_size(
    dims: Dimensions,
    window: CropWindow,
    policy: BoundsPolicy,
) -> Option<Dimensions> {
    geometry::resolve(window, dims, policy)
        .ok()
        .map(|plan| plan.output_size())
}
