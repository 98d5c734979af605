//! Browser bindings: element geometry and gesture listener registration.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, EventTarget, HtmlElement, MouseEvent, Node, WheelEvent};
use yew::Callback;

use crate::controller::{Geometry, TransformController, WheelInput};
use crate::state::{Rect, TransformState};
use crate::util::{clog, cwarn, js_error_text};

/// Reads live bounding client rects from the mounted elements.
#[derive(Clone)]
pub struct DomGeometry {
    pub container: HtmlElement,
    pub child: HtmlElement,
}

fn client_rect(el: &HtmlElement) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

impl Geometry for DomGeometry {
    fn container_rect(&self) -> Rect {
        client_rect(&self.container)
    }

    fn child_rect(&self) -> Rect {
        client_rect(&self.child)
    }
}

fn same_node(a: &HtmlElement, b: &HtmlElement) -> bool {
    let b: &Node = b;
    a.is_same_node(Some(b))
}

fn listen(target: &EventTarget, kind: &str, f: &Function) {
    if let Err(e) = target.add_event_listener_with_callback(kind, f) {
        cwarn(&format!("failed to add {} listener: {}", kind, js_error_text(&e)));
    }
}

/// Gesture listeners bound to one container/child pair.
///
/// Wheel goes on the container, mouse-down on the child, mouse-move and
/// mouse-up on the document. Dropping the value removes all of them.
pub struct GestureListeners {
    geometry: DomGeometry,
    document: Document,
    wheel_cb: Closure<dyn FnMut(WheelEvent)>,
    mousedown_cb: Closure<dyn FnMut(MouseEvent)>,
    mousemove_cb: Closure<dyn FnMut(MouseEvent)>,
    mouseup_cb: Closure<dyn FnMut(MouseEvent)>,
}

impl GestureListeners {
    /// Returns `None` when there is no document to listen on.
    pub fn attach(
        container: &HtmlElement,
        child: &HtmlElement,
        controller: Rc<RefCell<TransformController>>,
        on_change: Callback<TransformState>,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let geometry = DomGeometry {
            container: container.clone(),
            child: child.clone(),
        };

        let wheel_cb = {
            let controller = controller.clone();
            let geometry = geometry.clone();
            let on_change = on_change.clone();
            Closure::wrap(Box::new(move |e: WheelEvent| {
                e.prevent_default();
                let input = WheelInput {
                    client_x: e.client_x() as f64,
                    client_y: e.client_y() as f64,
                    delta_y: e.delta_y(),
                };
                let mut ctrl = controller.borrow_mut();
                if !ctrl.on_wheel(input, &geometry) {
                    return;
                }
                let state = ctrl.state();
                drop(ctrl);
                on_change.emit(state);
            }) as Box<dyn FnMut(_)>)
        };
        let mousedown_cb = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                if e.button() != 0 {
                    return;
                }
                // Stops native image drag and text selection.
                e.prevent_default();
                controller
                    .borrow_mut()
                    .pointer_down(e.client_x() as f64, e.client_y() as f64);
            }) as Box<dyn FnMut(_)>)
        };
        let mousemove_cb = {
            let controller = controller.clone();
            let geometry = geometry.clone();
            let on_change = on_change.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let mut ctrl = controller.borrow_mut();
                if !ctrl.is_dragging() {
                    return;
                }
                e.prevent_default();
                if !ctrl.on_drag(e.client_x() as f64, e.client_y() as f64, &geometry) {
                    return;
                }
                let state = ctrl.state();
                drop(ctrl);
                on_change.emit(state);
            }) as Box<dyn FnMut(_)>)
        };
        let mouseup_cb = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |_e: MouseEvent| {
                controller.borrow_mut().pointer_up();
            }) as Box<dyn FnMut(_)>)
        };

        listen(container, "wheel", wheel_cb.as_ref().unchecked_ref());
        listen(child, "mousedown", mousedown_cb.as_ref().unchecked_ref());
        listen(&document, "mousemove", mousemove_cb.as_ref().unchecked_ref());
        listen(&document, "mouseup", mouseup_cb.as_ref().unchecked_ref());
        clog("pan-zoom: gesture listeners attached");

        Some(Self {
            geometry,
            document,
            wheel_cb,
            mousedown_cb,
            mousemove_cb,
            mouseup_cb,
        })
    }

    pub fn is_bound_to(&self, container: &HtmlElement, child: &HtmlElement) -> bool {
        same_node(&self.geometry.container, container) && same_node(&self.geometry.child, child)
    }

    /// Same as dropping; reads better at call sites.
    pub fn detach(self) {}
}

impl Drop for GestureListeners {
    fn drop(&mut self) {
        let _ = self.geometry.container.remove_event_listener_with_callback(
            "wheel",
            self.wheel_cb.as_ref().unchecked_ref(),
        );
        let _ = self.geometry.child.remove_event_listener_with_callback(
            "mousedown",
            self.mousedown_cb.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            "mousemove",
            self.mousemove_cb.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            "mouseup",
            self.mouseup_cb.as_ref().unchecked_ref(),
        );
        clog("pan-zoom: gesture listeners removed");
    }
}
