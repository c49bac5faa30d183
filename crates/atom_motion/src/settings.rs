//! Motion settings
//!
//! Process-wide knobs for the motion scene, normally loaded once at startup
//! and handed to the [`Director`](crate::Director):
//!
//! ```toml
//! enabled = true
//! default_duration_ms = 300
//! duration_fast_ms = 100
//! duration_mid_ms = 200
//! duration_slow_ms = 300
//! target_fps = 120
//! ```

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Motion configuration (`motion.toml`)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionSettings {
    /// When false, scheduled motions settle on their end values immediately
    pub enabled: bool,
    /// Duration given by the director to motion configs that have none
    pub default_duration_ms: u64,
    pub duration_fast_ms: u64,
    pub duration_mid_ms: u64,
    pub duration_slow_ms: u64,
    /// Frame rate assumed when the director is pumped by wall-clock time
    pub target_fps: u32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            default_duration_ms: 300,
            duration_fast_ms: 100,
            duration_mid_ms: 200,
            duration_slow_ms: 300,
            target_fps: 120,
        }
    }
}

impl MotionSettings {
    /// Settings with every motion disabled
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }

    pub fn duration_fast(&self) -> Duration {
        Duration::from_millis(self.duration_fast_ms)
    }

    pub fn duration_mid(&self) -> Duration {
        Duration::from_millis(self.duration_mid_ms)
    }

    pub fn duration_slow(&self) -> Duration {
        Duration::from_millis(self.duration_slow_ms)
    }

    /// Parse settings from a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded motion settings");
        Ok(settings)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
