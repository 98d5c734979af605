//! `use_transform`: binds a [`TransformController`] to a Yew component.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::functional::UseStateSetter;
use yew::prelude::*;

use crate::config::TransformConfig;
use crate::controller::TransformController;
use crate::correction::Correction;
use crate::dom::GestureListeners;
use crate::state::TransformState;
use crate::util::cwarn;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformOptions {
    pub config: TransformConfig,
    pub correction: Correction,
}

/// Current transform plus overrides. Setters skip the correction function.
#[derive(Clone, PartialEq)]
pub struct UseTransformHandle {
    pub state: TransformState,
    /// CSS `transform` value for the child element.
    pub transform: Rc<String>,
    pub set_translation: Callback<(f64, f64)>,
    pub set_scale: Callback<f64>,
    pub set_rotation: Callback<f64>,
    pub rotate_by: Callback<f64>,
    pub reset: Callback<()>,
    pub invalidate_rects: Callback<()>,
}

fn checked(config: TransformConfig) -> TransformConfig {
    match config.validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            cwarn(&format!("pan-zoom: {}; falling back to defaults", e));
            TransformConfig::default()
        }
    }
}

fn override_cb<IN: 'static>(
    controller: &Rc<RefCell<TransformController>>,
    setter: &UseStateSetter<TransformState>,
    apply: impl Fn(&mut TransformController, IN) + 'static,
) -> Callback<IN> {
    let controller = controller.clone();
    let setter = setter.clone();
    Callback::from(move |input: IN| {
        let mut ctrl = controller.borrow_mut();
        apply(&mut *ctrl, input);
        setter.set(ctrl.state());
    })
}

/// Pan with a primary-button drag on `child`, zoom with the wheel over
/// `container`.
///
/// Listeners are attached once both refs resolve; until then every render
/// retries. They are re-bound if either element is replaced and removed on
/// unmount.
#[hook]
pub fn use_transform(
    container: NodeRef,
    child: NodeRef,
    options: TransformOptions,
) -> UseTransformHandle {
    let controller = {
        let opts = options.clone();
        use_mut_ref(move || TransformController::new(checked(opts.config), opts.correction))
    };
    let state = {
        let controller = controller.clone();
        use_state(move || controller.borrow().state())
    };
    let listeners = use_mut_ref(|| None::<GestureListeners>);

    // Effect: keep config and correction in sync with props
    {
        let controller = controller.clone();
        use_effect_with(options, move |opts| {
            let mut ctrl = controller.borrow_mut();
            ctrl.set_config(checked(opts.config));
            ctrl.set_correction(opts.correction.clone());
            || ()
        });
    }
    // Effect: (re)attach listeners every render until bound
    {
        let controller = controller.clone();
        let listeners = listeners.clone();
        let setter = state.setter();
        use_effect(move || {
            let mut slot = listeners.borrow_mut();
            match (container.cast::<HtmlElement>(), child.cast::<HtmlElement>()) {
                (Some(c), Some(ch)) => {
                    if !slot.as_ref().is_some_and(|l| l.is_bound_to(&c, &ch)) {
                        slot.take();
                        let on_change = Callback::from(move |s: TransformState| setter.set(s));
                        *slot = GestureListeners::attach(&c, &ch, controller, on_change);
                    }
                }
                _ => {
                    slot.take();
                }
            }
            || ()
        });
    }
    // Effect: detach on unmount
    {
        let listeners = listeners.clone();
        use_effect_with((), move |_| {
            move || {
                listeners.borrow_mut().take();
            }
        });
    }

    let transform = use_memo(*state, |s| s.transform_string());
    let setter = state.setter();

    UseTransformHandle {
        state: *state,
        transform,
        set_translation: override_cb(&controller, &setter, |c, (x, y): (f64, f64)| c.set_translation(x, y)),
        set_scale: override_cb(&controller, &setter, |c, s: f64| c.set_scale(s)),
        set_rotation: override_cb(&controller, &setter, |c, deg: f64| c.set_rotation(deg)),
        rotate_by: override_cb(&controller, &setter, |c, deg: f64| c.rotate_by(deg)),
        reset: override_cb(&controller, &setter, |c, _: ()| c.reset()),
        invalidate_rects: override_cb(&controller, &setter, |c, _: ()| c.invalidate_rects()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let bad = TransformConfig {
            scale_step: -1.0,
            ..Default::default()
        };
        assert_eq!(checked(bad), TransformConfig::default());
        let good = TransformConfig::default().with_scale_step(0.5).unwrap();
        assert_eq!(checked(good), good);
    }
}
