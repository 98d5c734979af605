use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::RectCachePolicy;

pub const DEFAULT_SCALE_STEP: f64 = 0.1;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("scale step must be a finite number greater than zero, got {0}")]
    InvalidScaleStep(f64),
    #[error("invalid transform config: {0}")]
    Parse(String),
}

/// Tunables for a [`TransformController`](crate::TransformController).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Scale added or removed per wheel notch.
    pub scale_step: f64,
    pub rect_cache: RectCachePolicy,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            scale_step: DEFAULT_SCALE_STEP,
            rect_cache: RectCachePolicy::default(),
        }
    }
}

impl TransformConfig {
    pub fn with_scale_step(self, scale_step: f64) -> Result<Self, ConfigError> {
        Self { scale_step, ..self }.validate()
    }

    pub fn with_rect_cache(self, rect_cache: RectCachePolicy) -> Self {
        Self { rect_cache, ..self }
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.scale_step.is_finite() || self.scale_step <= 0.0 {
            return Err(ConfigError::InvalidScaleStep(self.scale_step));
        }
        Ok(self)
    }

    /// Parse and validate a JSON config; missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = TransformConfig::default();
        assert_eq!(cfg.scale_step, 0.1);
        assert_eq!(cfg.rect_cache, RectCachePolicy::KeepFirst);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_steps() {
        let base = TransformConfig::default();
        assert_eq!(
            base.with_scale_step(0.0),
            Err(ConfigError::InvalidScaleStep(0.0))
        );
        assert_eq!(
            base.with_scale_step(-0.2),
            Err(ConfigError::InvalidScaleStep(-0.2))
        );
        assert!(base.with_scale_step(f64::NAN).is_err());
        assert!(base.with_scale_step(f64::INFINITY).is_err());
        assert_eq!(base.with_scale_step(0.25).unwrap().scale_step, 0.25);
    }

    #[test]
    fn parses_partial_json() {
        let cfg = TransformConfig::from_json(r#"{ "scale_step": 0.2 }"#).unwrap();
        assert_eq!(cfg.scale_step, 0.2);
        assert_eq!(cfg.rect_cache, RectCachePolicy::KeepFirst);

        let cfg = TransformConfig::from_json(r#"{ "rect_cache": "per_gesture" }"#).unwrap();
        assert_eq!(cfg.scale_step, DEFAULT_SCALE_STEP);
        assert_eq!(cfg.rect_cache, RectCachePolicy::PerGesture);
    }

    #[test]
    fn json_errors_are_reported() {
        assert!(matches!(
            TransformConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            TransformConfig::from_json(r#"{ "scale_step": -1.0 }"#),
            Err(ConfigError::InvalidScaleStep(-1.0))
        );
    }
}
