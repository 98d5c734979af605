//! Correction strategies applied to proposed transform updates.
//!
//! Every drag and wheel update is routed through a [`Correction`] before the
//! controller commits it, so callers can impose policy such as zoom limits or
//! pan bounds without touching the gesture math.

use std::fmt;
use std::rc::Rc;

use crate::state::{RectSnapshot, TransformState};

/// Gesture that produced a proposed update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Move,
    Scale,
}

type CorrectionFn = dyn Fn(&TransformState, TransformState, &RectSnapshot, ActionKind) -> TransformState;

/// `(previous, proposed, rects, action) -> corrected` strategy.
///
/// Cheap to clone; equality is identity of the wrapped function so it can sit
/// in Yew properties.
#[derive(Clone)]
pub struct Correction(Rc<CorrectionFn>);

impl Correction {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&TransformState, TransformState, &RectSnapshot, ActionKind) -> TransformState
            + 'static,
    {
        Self(Rc::new(f))
    }

    /// Pass-through.
    pub fn identity() -> Self {
        Self::new(|_, proposed, _, _| proposed)
    }

    /// Clamp scale into `[min, max]`.
    pub fn clamp_scale(min: f64, max: f64) -> Self {
        Self::new(move |_, proposed, _, _| TransformState {
            scale: proposed.scale.clamp(min, max),
            ..proposed
        })
    }

    /// Keep at least `min_visible` pixels of the child overlapping the
    /// container on each axis, assuming the child is laid out centred.
    pub fn keep_visible(min_visible: f64) -> Self {
        Self::new(move |_, proposed, rects, _| {
            let limit = |container: f64, child: f64| {
                ((container + child * proposed.scale) / 2.0 - min_visible).max(0.0)
            };
            let lx = limit(rects.container.width, rects.child.width);
            let ly = limit(rects.container.height, rects.child.height);
            TransformState {
                translation: (
                    proposed.translation.0.clamp(-lx, lx),
                    proposed.translation.1.clamp(-ly, ly),
                ),
                ..proposed
            }
        })
    }

    /// Run `self`, then `next` on its output.
    pub fn then(self, next: Correction) -> Self {
        Self::new(move |prev, proposed, rects, action| {
            let first = self.apply(prev, proposed, rects, action);
            next.apply(prev, first, rects, action)
        })
    }

    pub fn apply(
        &self,
        previous: &TransformState,
        proposed: TransformState,
        rects: &RectSnapshot,
        action: ActionKind,
    ) -> TransformState {
        (self.0)(previous, proposed, rects, action)
    }
}

impl Default for Correction {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Correction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Correction(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Size;

    fn rects() -> RectSnapshot {
        RectSnapshot {
            container: Size {
                width: 400.0,
                height: 300.0,
            },
            child: Size {
                width: 200.0,
                height: 100.0,
            },
        }
    }

    #[test]
    fn identity_returns_proposal() {
        let prev = TransformState::default();
        let proposed = TransformState::new((5.0, 6.0), 3.0, 12.0);
        let out = Correction::identity().apply(&prev, proposed, &rects(), ActionKind::Move);
        assert_eq!(out, proposed);
    }

    #[test]
    fn clamp_scale_caps_both_ends() {
        let c = Correction::clamp_scale(0.5, 2.0);
        let prev = TransformState::default();
        let hi = c.apply(&prev, prev.with_scale(2.3), &rects(), ActionKind::Scale);
        assert_eq!(hi.scale, 2.0);
        let lo = c.apply(&prev, prev.with_scale(0.1), &rects(), ActionKind::Scale);
        assert_eq!(lo.scale, 0.5);
        let mid = c.apply(&prev, prev.with_scale(1.3), &rects(), ActionKind::Scale);
        assert_eq!(mid.scale, 1.3);
    }

    #[test]
    fn keep_visible_bounds_translation() {
        let c = Correction::keep_visible(20.0);
        let prev = TransformState::default();
        // limit x = (400 + 200) / 2 - 20 = 280, y = (300 + 100) / 2 - 20 = 180
        let out = c.apply(
            &prev,
            prev.with_translation(1000.0, -1000.0),
            &rects(),
            ActionKind::Move,
        );
        assert_eq!(out.translation, (280.0, -180.0));
        let inside = c.apply(
            &prev,
            prev.with_translation(10.0, 10.0),
            &rects(),
            ActionKind::Move,
        );
        assert_eq!(inside.translation, (10.0, 10.0));
    }

    #[test]
    fn then_chains_in_order() {
        let c = Correction::clamp_scale(0.5, 2.0).then(Correction::new(|_, p, _, action| {
            assert_eq!(action, ActionKind::Scale);
            p.with_rotation(p.scale * 10.0)
        }));
        let prev = TransformState::default();
        let out = c.apply(&prev, prev.with_scale(5.0), &rects(), ActionKind::Scale);
        assert_eq!(out.scale, 2.0);
        assert_eq!(out.rotation, 20.0);
    }

    #[test]
    fn equality_is_identity() {
        let a = Correction::identity();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Correction::identity());
    }
}
