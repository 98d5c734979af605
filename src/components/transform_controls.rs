use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TransformControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_rotate_left: Callback<()>,
    pub on_rotate_right: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(TransformControls)]
pub fn transform_controls(props: &TransformControlsProps) -> Html {
    let zi = props.on_zoom_in.reform(|_: MouseEvent| ());
    let zo = props.on_zoom_out.reform(|_: MouseEvent| ());
    let rl = props.on_rotate_left.reform(|_: MouseEvent| ());
    let rr = props.on_rotate_right.reform(|_: MouseEvent| ());
    let rs = props.on_reset.reform(|_: MouseEvent| ());
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={zo}> {"-"} </button>
        <button onclick={zi}> {"+"} </button>
        <span style="width:8px;"></span>
        <button onclick={rl}> {"⟲ 90°"} </button>
        <button onclick={rr}> {"⟳ 90°"} </button>
        <span style="width:8px;"></span>
        <button onclick={rs}> {"Reset"} </button>
    </div>}
}
