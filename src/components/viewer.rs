use yew::prelude::*;
use yew_pan_zoom::{TransformOptions, use_transform};

use super::{state_panel::StatePanel, transform_controls::TransformControls};

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerProps {
    pub options: TransformOptions,
    #[prop_or(0.5)]
    pub min_scale: f64,
    #[prop_or(2.0)]
    pub max_scale: f64,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Viewer)]
pub fn viewer(props: &ViewerProps) -> Html {
    let container_ref = use_node_ref();
    let child_ref = use_node_ref();
    let handle = use_transform(
        container_ref.clone(),
        child_ref.clone(),
        props.options.clone(),
    );

    // Buttons go through the setters, which skip the correction, so clamp here.
    let step = props.options.config.scale_step;
    let scale = handle.state.scale;
    let on_zoom_in = {
        let max = props.max_scale;
        handle.set_scale.reform(move |_: ()| (scale + step).min(max))
    };
    let on_zoom_out = {
        let min = props.min_scale;
        handle.set_scale.reform(move |_: ()| (scale - step).max(min))
    };
    let on_rotate_left = handle.rotate_by.reform(|_: ()| -90.0);
    let on_rotate_right = handle.rotate_by.reform(|_: ()| 90.0);
    let on_reset = handle.reset.clone();

    let child_style = format!(
        "transform:{}; transform-origin:center; cursor:grab; user-select:none;",
        handle.transform
    );
    html! {
        <div ref={container_ref} style="position:relative; width:100vw; height:100vh; overflow:hidden; display:flex; align-items:center; justify-content:center; background:#0e1116;">
            <div ref={child_ref} style={child_style}>
                { props.children.clone() }
            </div>
            <StatePanel state={handle.state} transform={AttrValue::from((*handle.transform).clone())} />
            <TransformControls
                on_zoom_in={on_zoom_in}
                on_zoom_out={on_zoom_out}
                on_rotate_left={on_rotate_left}
                on_rotate_right={on_rotate_right}
                on_reset={on_reset}
            />
        </div>
    }
}
