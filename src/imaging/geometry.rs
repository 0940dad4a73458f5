//! Pure crop-window geometry.
//!
//! Everything needed to decide what a crop produces before touching pixels:
//! resolving a [`CropWindow`] against frame dimensions under a
//! [`BoundsPolicy`] yields a [`CropPlan`] that the backend executes.
//!
//! These functions are pure: no I/O, no side effects, fully unit-tested.

use super::backend::Dimensions;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An axis-aligned crop window, in pixels from the frame's top-left corner.
///
/// Renders in X geometry notation, width x height + left + top:
///
/// ```
/// use framecrop::imaging::geometry::CropWindow;
///
/// let window = CropWindow { left: 220, top: 45, width: 512, height: 96 };
/// assert_eq!(window.to_string(), "512x96+220+45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropWindow {
    /// One past the rightmost column, widened so `left + width` cannot
    /// overflow.
    pub fn right(&self) -> u64 {
        self.left as u64 + self.width as u64
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> u64 {
        self.top as u64 + self.height as u64
    }

    /// Whether the window lies entirely inside a frame of the given size.
    pub fn fits_within(&self, dims: Dimensions) -> bool {
        self.right() <= dims.width as u64 && self.bottom() <= dims.height as u64
    }
}

impl fmt::Display for CropWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.left, self.top)
    }
}

/// What to do when the crop window reaches outside a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Keep the window size and fill the missing area with black.
    #[default]
    Pad,
    /// Shrink the output to the part of the window the frame covers.
    Clamp,
    /// Abort the run.
    Fail,
}

impl fmt::Display for BoundsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pad => "pad",
            Self::Clamp => "clamp",
            Self::Fail => "fail",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BoundsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pad" => Ok(Self::Pad),
            "clamp" => Ok(Self::Clamp),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "unknown bounds mode '{other}' (expected pad, clamp, or fail)"
            )),
        }
    }
}

/// A window that cannot be resolved under the active bounds mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    #[error("crop window {window} exceeds frame bounds {dims}")]
    Exceeds { window: CropWindow, dims: Dimensions },
    #[error("crop window {window} lies entirely outside frame bounds {dims}")]
    Disjoint { window: CropWindow, dims: Dimensions },
}

/// The resolved instruction for cropping one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropPlan {
    /// Copy this frame region as-is.
    Extract(CropWindow),
    /// Write a `width` x `height` black canvas with `overlap` (a frame
    /// region) copied into its top-left corner. `overlap` is `None` when
    /// the window misses the frame entirely.
    Pad {
        width: u32,
        height: u32,
        overlap: Option<CropWindow>,
    },
}

impl CropPlan {
    /// Pixel size of the file this plan writes.
    pub fn output_size(&self) -> Dimensions {
        match self {
            Self::Extract(window) => Dimensions {
                width: window.width,
                height: window.height,
            },
            Self::Pad { width, height, .. } => Dimensions {
                width: *width,
                height: *height,
            },
        }
    }
}

/// Resolve a crop window against frame dimensions under a bounds mode.
///
/// Window coordinates are unsigned, so a window can only reach outside the
/// frame past the right and bottom edges. Any overlap therefore starts at
/// the window's own top-left corner, which is why [`CropPlan::Pad`] always
/// places it at the canvas origin.
///
/// ```
/// use framecrop::imaging::Dimensions;
/// use framecrop::imaging::geometry::{resolve, BoundsPolicy, CropPlan, CropWindow};
///
/// let window = CropWindow { left: 220, top: 45, width: 512, height: 96 };
/// let frame = Dimensions { width: 1936, height: 1216 };
/// let plan = resolve(window, frame, BoundsPolicy::Pad).unwrap();
/// assert_eq!(plan, CropPlan::Extract(window));
/// ```
pub fn resolve(
    window: CropWindow,
    dims: Dimensions,
    policy: BoundsPolicy,
) -> Result<CropPlan, BoundsError> {
    if window.fits_within(dims) {
        return Ok(CropPlan::Extract(window));
    }

    match policy {
        BoundsPolicy::Fail => Err(BoundsError::Exceeds { window, dims }),
        BoundsPolicy::Clamp => overlap(window, dims)
            .map(CropPlan::Extract)
            .ok_or(BoundsError::Disjoint { window, dims }),
        BoundsPolicy::Pad => Ok(CropPlan::Pad {
            width: window.width,
            height: window.height,
            overlap: overlap(window, dims),
        }),
    }
}

/// The part of the window the frame covers, as a frame region. `None` when
/// window and frame do not intersect.
fn overlap(window: CropWindow, dims: Dimensions) -> Option<CropWindow> {
    let right = window.right().min(dims.width as u64);
    let bottom = window.bottom().min(dims.height as u64);
    if window.left as u64 >= right || window.top as u64 >= bottom {
        return None;
    }
    Some(CropWindow {
        left: window.left,
        top: window.top,
        width: (right - window.left as u64) as u32,
        height: (bottom - window.top as u64) as u32,
    })
}
