//! Gesture-driven transform controller.
//!
//! [`TransformController`] owns the transform state, the drag session and the
//! cached rect snapshot. It knows nothing about the DOM: pointer positions come
//! in as viewport coordinates and element geometry is read through the
//! [`Geometry`] trait, so the same code runs under the browser bindings and
//! under plain unit tests.

use crate::config::TransformConfig;
use crate::correction::{ActionKind, Correction};
use crate::state::{DragSession, Rect, RectCachePolicy, RectSnapshot, TransformState};

/// Live bounding rects of the container and the (transformed) child.
pub trait Geometry {
    fn container_rect(&self) -> Rect;
    fn child_rect(&self) -> Rect;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub client_x: f64,
    pub client_y: f64,
    pub delta_y: f64,
}

#[derive(Debug, Default)]
pub struct TransformController {
    state: TransformState,
    drag: DragSession,
    rects: Option<RectSnapshot>,
    config: TransformConfig,
    correction: Correction,
}

impl TransformController {
    pub fn new(config: TransformConfig, correction: Correction) -> Self {
        Self {
            config,
            correction,
            ..Default::default()
        }
    }

    pub fn state(&self) -> TransformState {
        self.state
    }

    pub fn transform_string(&self) -> String {
        self.state.transform_string()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    pub fn rects(&self) -> Option<RectSnapshot> {
        self.rects
    }

    pub fn config(&self) -> TransformConfig {
        self.config
    }

    pub fn set_config(&mut self, config: TransformConfig) {
        self.config = config;
    }

    pub fn set_correction(&mut self, correction: Correction) {
        self.correction = correction;
    }

    /// IDLE -> DRAGGING. Called for a primary-button press over the child.
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) {
        if self.config.rect_cache == RectCachePolicy::PerGesture {
            self.rects = None;
        }
        self.drag.begin(client_x, client_y);
    }

    /// DRAGGING -> IDLE. Harmless while idle.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Pointer moved to `(client_x, client_y)`. Returns whether state changed.
    pub fn on_drag(&mut self, client_x: f64, client_y: f64, geometry: &impl Geometry) -> bool {
        let Some((dx, dy)) = self.drag.advance(client_x, client_y) else {
            return false;
        };
        let rects = self.snapshot(geometry);
        let prev = self.state;
        let proposed = prev.with_translation(prev.translation.0 + dx, prev.translation.1 + dy);
        let corrected = self
            .correction
            .apply(&prev, proposed, &rects, ActionKind::Move);
        self.state.translation = corrected.translation;
        self.state != prev
    }

    /// Zoom by one step around the pointer. Returns whether state changed.
    pub fn on_wheel(&mut self, input: WheelInput, geometry: &impl Geometry) -> bool {
        if self.drag.active || input.delta_y == 0.0 {
            return false;
        }
        if self.config.rect_cache == RectCachePolicy::PerGesture {
            self.rects = None;
        }
        let rects = self.snapshot(geometry);
        let prev = self.state;
        // Negative delta scrolls toward the user: zoom in.
        let direction = if input.delta_y < 0.0 { 1.0 } else { -1.0 };
        let step = self.config.scale_step * direction;
        let (cx, cy) = geometry.child_rect().center();
        let fx = (input.client_x - cx) / prev.scale * step;
        let fy = (input.client_y - cy) / prev.scale * step;
        let proposed = TransformState {
            translation: (prev.translation.0 - fx, prev.translation.1 - fy),
            scale: prev.scale + step,
            rotation: prev.rotation,
        };
        let corrected = self
            .correction
            .apply(&prev, proposed, &rects, ActionKind::Scale);
        self.state.scale = corrected.scale;
        self.state.translation = corrected.translation;
        self.state.rotation = corrected.rotation;
        self.state != prev
    }

    pub fn set_state(&mut self, state: TransformState) {
        self.state = state;
    }

    pub fn set_translation(&mut self, x: f64, y: f64) {
        self.state.translation = (x, y);
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.state.scale = scale;
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.state.rotation = degrees;
    }

    pub fn rotate_by(&mut self, degrees: f64) {
        self.state.rotation += degrees;
    }

    /// Back to the identity transform; also ends any drag.
    pub fn reset(&mut self) {
        self.state = TransformState::default();
        self.drag.end();
    }

    pub fn invalidate_rects(&mut self) {
        self.rects = None;
    }

    fn snapshot(&mut self, geometry: &impl Geometry) -> RectSnapshot {
        *self.rects.get_or_insert_with(|| RectSnapshot {
            container: geometry.container_rect().size(),
            child: geometry.child_rect().size(),
        })
    }
}
