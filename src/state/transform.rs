//! Transform state of the child element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Translation, scale and rotation applied to the child element.
///
/// Translation is in CSS pixels, rotation in degrees, scale unitless.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    pub translation: (f64, f64),
    pub scale: f64,
    pub rotation: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            translation: (0.0, 0.0),
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl TransformState {
    pub fn new(translation: (f64, f64), scale: f64, rotation: f64) -> Self {
        Self {
            translation,
            scale,
            rotation,
        }
    }

    pub fn with_translation(self, x: f64, y: f64) -> Self {
        Self {
            translation: (x, y),
            ..self
        }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    /// CSS `transform` value: translateX, translateY, rotate, scale in that order.
    pub fn transform_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TransformState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateX({}px) translateY({}px) rotate({}deg) scale({})",
            self.translation.0, self.translation.1, self.rotation, self.scale
        )
    }
}
