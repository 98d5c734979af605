use yew::prelude::*;
use yew_pan_zoom::TransformState;

#[derive(Properties, PartialEq, Clone)]
pub struct StatePanelProps {
    pub state: TransformState,
    pub transform: AttrValue,
}

#[function_component]
pub fn StatePanel(props: &StatePanelProps) -> Html {
    let raw = serde_json::to_string_pretty(&props.state).unwrap_or_default();
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let (tx, ty) = props.state.translation;
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Offset"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ format!("{:.0}, {:.0}", tx, ty) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#2ea043;", label_style)}>{"Scale"}</span>
                <span style={format!("{} color:#2ea043;", value_style)}>{ format!("{:.2}", props.state.scale) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f0883e;", label_style)}>{"Rotation"}</span>
                <span style={format!("{} color:#f0883e;", value_style)}>{ format!("{}°", props.state.rotation) }</span>
            </div>
            <code style="font-size:11px; opacity:0.7; word-break:break-all;">{ props.transform.to_string() }</code>
            <pre style="margin:0; font-size:11px; opacity:0.7;">{ raw }</pre>
        </div>
    }
}
