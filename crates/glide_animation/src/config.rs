//! Engine configuration (glide.toml)

use crate::curve::Curve;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Engine-wide animation settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnimationConfig {
    /// Frame rate used for fixed steps
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
    /// Durations are multiplied by this; above 1 slows everything down
    #[serde(default = "default_time_dilation")]
    pub time_dilation: f32,
    /// Reduced motion: every restart completes on the spot
    #[serde(default)]
    pub disable_animations: bool,
    /// Curve for timings built from config
    #[serde(default)]
    pub default_curve: Curve,
    /// Duration for timings built from config
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
}

fn default_target_fps() -> u32 {
    120
}

fn default_time_dilation() -> f32 {
    1.0
}

fn default_duration_ms() -> u64 {
    200
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            target_fps: default_target_fps(),
            time_dilation: default_time_dilation(),
            disable_animations: false,
            default_curve: Curve::default(),
            default_duration_ms: default_duration_ms(),
        }
    }
}

impl AnimationConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AnimationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid {
                key: "target_fps",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.time_dilation.is_finite() && self.time_dilation > 0.0) {
            return Err(ConfigError::Invalid {
                key: "time_dilation",
                reason: format!("must be a positive number, got {}", self.time_dilation),
            });
        }
        Ok(())
    }

    /// Duration a clock actually runs for a declared `duration`.
    ///
    /// Saturates at `Duration::MAX` when dilation overflows it.
    pub fn effective_duration(&self, duration: Duration) -> Duration {
        if self.disable_animations {
            return Duration::ZERO;
        }
        if self.time_dilation == 1.0 {
            return duration;
        }
        Duration::try_from_secs_f64(duration.as_secs_f64() * self.time_dilation as f64)
            .unwrap_or(Duration::MAX)
    }

    /// Length of one frame at `target_fps`
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}
