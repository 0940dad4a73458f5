//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and crop.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::geometry::BoundsError;
use super::params::CropParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One error variant per way a frame can sink a batch: the source cannot be
/// read, the window cannot be resolved, or the output cannot be written.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Cannot crop {}: {source}", .path.display())]
    Bounds { path: PathBuf, source: BoundsError },
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Pixel size of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for image processing backends.
///
/// Every backend must implement both operations — identify and crop — so the
/// batch loop is backend-agnostic and testable against a mock. Backends are
/// shared by reference and carry no per-call state, hence the `Sync` bound.
pub trait ImageBackend: Sync {
    /// Get frame dimensions without decoding pixel data.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a crop operation. Returns the pixel size of the written file
    /// (smaller than the window under the clamp bounds mode).
    fn crop(&self, params: &CropParams) -> Result<Dimensions, BackendError>;
}
