use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_BACKGROUND, INITIAL_SCALE, KEY_SCALE_STEP, SCALE_PRESETS, SCROLL_SCALE_STEP,
};
use crate::error::{GlanceError, Result};

/// Viewer settings, loadable from a TOML file.
///
/// Every field has a default, so a partial file (or none at all) works.
/// The file is read-only: nothing is written back on exit.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Window background color (RGB).
    pub background: [u8; 3],
    /// Multiplier applied per scroll-wheel notch. Must be above 1.0;
    /// wheel-down uses the reciprocal.
    pub scroll_scale_step: f64,
    /// Multiplier for the keyboard zoom shortcuts. Must be above 1.0.
    pub key_scale_step: f64,
    /// Scale presets bound to the digit shortcuts 1, 2, 3.
    pub scale_presets: [f64; 3],
    /// Scale applied at startup.
    pub initial_scale: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            scroll_scale_step: SCROLL_SCALE_STEP,
            key_scale_step: KEY_SCALE_STEP,
            scale_presets: SCALE_PRESETS,
            initial_scale: INITIAL_SCALE,
        }
    }
}

impl ViewerConfig {
    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Check the values for consistency, returning `self` unchanged when
    /// everything is usable.
    pub fn validated(self) -> Result<Self> {
        if !self.scroll_scale_step.is_finite() || self.scroll_scale_step <= 1.0 {
            return Err(GlanceError::Config(format!(
                "scroll_scale_step must be a finite value above 1.0, got {}",
                self.scroll_scale_step
            )));
        }
        if !self.key_scale_step.is_finite() || self.key_scale_step <= 1.0 {
            return Err(GlanceError::Config(format!(
                "key_scale_step must be a finite value above 1.0, got {}",
                self.key_scale_step
            )));
        }
        for preset in self.scale_presets {
            if !preset.is_finite() || preset <= 0.0 {
                return Err(GlanceError::Config(format!(
                    "scale presets must be positive, got {preset}"
                )));
            }
        }
        if !self.initial_scale.is_finite() || self.initial_scale <= 0.0 {
            return Err(GlanceError::Config(format!(
                "initial_scale must be positive, got {}",
                self.initial_scale
            )));
        }
        Ok(self)
    }
}
