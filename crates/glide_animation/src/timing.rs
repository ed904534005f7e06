//! Duration and curve carried by every node description

use crate::config::AnimationConfig;
use crate::curve::Curve;
use crate::error::{DescriptionError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a node takes to reach a new target, and along which curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationTiming {
    pub duration: Duration,
    #[serde(default)]
    pub curve: Curve,
}

impl AnimationTiming {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            curve: Curve::Linear,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Duration in seconds; rejects negative, non-finite and overflowing values
    pub fn from_secs_f32(node: &'static str, seconds: f32) -> Result<Self> {
        Duration::try_from_secs_f32(seconds)
            .map(Self::new)
            .map_err(|_| DescriptionError::InvalidDuration { node, seconds })
    }

    /// Timing from the config defaults
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            duration: config.default_duration(),
            curve: config.default_curve,
        }
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }
}

/// Timing fields of a node builder, checked at `build()`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimingBuilder {
    duration: Option<Duration>,
    invalid_seconds: Option<f32>,
    curve: Curve,
}

impl TimingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self.invalid_seconds = None;
        self
    }

    pub fn duration_ms(self, ms: u64) -> Self {
        self.duration(Duration::from_millis(ms))
    }

    pub fn duration_secs(mut self, seconds: f32) -> Self {
        match Duration::try_from_secs_f32(seconds) {
            Ok(duration) => self.duration(duration),
            Err(_) => {
                self.duration = None;
                self.invalid_seconds = Some(seconds);
                self
            }
        }
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn timing(self, timing: AnimationTiming) -> Self {
        self.duration(timing.duration).curve(timing.curve)
    }

    pub fn build(&self, node: &'static str) -> Result<AnimationTiming> {
        if let Some(seconds) = self.invalid_seconds {
            return Err(DescriptionError::InvalidDuration { node, seconds });
        }
        let duration = self
            .duration
            .ok_or(DescriptionError::MissingDuration { node })?;
        Ok(AnimationTiming {
            duration,
            curve: self.curve,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_duration_is_reported() {
        assert_eq!(
            TimingBuilder::new().build("align"),
            Err(DescriptionError::MissingDuration { node: "align" })
        );
    }

    #[test]
    fn bad_seconds_are_reported() {
        let err = TimingBuilder::new().duration_secs(-1.0).build("align");
        assert!(matches!(err, Err(DescriptionError::InvalidDuration { .. })));
        assert!(AnimationTiming::from_secs_f32("align", f32::NAN).is_err());
    }

    #[test]
    fn later_valid_duration_wins() {
        let timing = TimingBuilder::new()
            .duration_secs(f32::INFINITY)
            .duration_ms(250)
            .curve(Curve::Ease)
            .build("align")
            .unwrap();
        assert_eq!(timing.duration, Duration::from_millis(250));
        assert_eq!(timing.curve, Curve::Ease);
    }

    #[test]
    fn config_defaults_feed_timing() {
        let config = AnimationConfig {
            default_duration_ms: 90,
            default_curve: Curve::Decelerate,
            ..AnimationConfig::default()
        };
        let timing = AnimationTiming::from_config(&config);
        assert_eq!(timing.duration, Duration::from_millis(90));
        assert_eq!(timing.curve, Curve::Decelerate);
    }
}
