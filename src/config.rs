//! Crop job configuration module.
//!
//! Handles loading and validating `framecrop.toml`. The file lives in the
//! *input* directory: crop geometry belongs to a capture session, not to the
//! machine running the tool. CLI flags override file values, which override
//! the built-in defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Out-of-bounds handling: "pad", "clamp", or "fail"
//! bounds = "pad"
//!
//! [crop]
//! left = 220     # Window left edge, pixels from the frame's left border
//! top = 45       # Window top edge, pixels from the frame's top border
//! width = 512    # Window width
//! height = 96    # Window height
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [crop]
//! left = 100
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::geometry::{BoundsPolicy, CropWindow};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the per-directory settings file, looked up in the input directory.
/// The suffix filter never matches it, so it does not interfere with runs.
pub const CONFIG_FILE: &str = "framecrop.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Crop job settings loaded from `framecrop.toml`.
///
/// All fields have sensible defaults. Config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobConfig {
    /// Crop window geometry.
    pub crop: CropSettings,
    /// What to do when the window reaches outside a frame.
    pub bounds: BoundsPolicy,
}

impl JobConfig {
    /// Apply CLI flag overrides on top of the loaded settings.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(left) = overrides.left {
            self.crop.left = left;
        }
        if let Some(top) = overrides.top {
            self.crop.top = top;
        }
        if let Some(width) = overrides.width {
            self.crop.width = width;
        }
        if let Some(height) = overrides.height {
            self.crop.height = height;
        }
        if let Some(bounds) = overrides.bounds {
            self.bounds = bounds;
        }
    }

    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.crop.width == 0 {
            return Err(ConfigError::Validation("crop.width must be non-zero".into()));
        }
        if self.crop.height == 0 {
            return Err(ConfigError::Validation(
                "crop.height must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Crop window geometry, in pixels from the frame's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CropSettings {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            left: 220,
            top: 45,
            width: 512,
            height: 96,
        }
    }
}

impl CropSettings {
    /// The settings as imaging geometry.
    pub fn window(&self) -> CropWindow {
        CropWindow {
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
        }
    }
}

/// CLI flag overrides, applied on top of file values by [`JobConfig::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub left: Option<u32>,
    pub top: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub bounds: Option<BoundsPolicy>,
}

/// Load settings from `framecrop.toml` in the given directory.
///
/// Returns the defaults when no config file exists. Rejects unknown keys
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<JobConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(JobConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: JobConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `framecrop.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# framecrop configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the input directory, next to the frames it applies to.
# CLI flags override anything set here.
# Unknown keys will cause an error.

# What to do when the crop window reaches outside a frame:
#   "pad"   - keep the window size, fill the missing area with black
#   "clamp" - shrink the output to the part the frame covers
#   "fail"  - abort the run
bounds = "pad"

# ---------------------------------------------------------------------------
# Crop window
# ---------------------------------------------------------------------------
[crop]
# Window edges, in pixels from the frame's top-left corner.
left = 220
top = 45

# Window size. With bounds = "pad" every output file gets exactly these
# dimensions.
width = 512
height = 96
"##
}
