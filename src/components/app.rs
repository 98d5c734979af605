use super::viewer::Viewer;
use yew::prelude::*;
use yew_pan_zoom::util::clog;
use yew_pan_zoom::{Correction, RectCachePolicy, TransformConfig, TransformOptions};

const MIN_SCALE: f64 = 0.5;
const MAX_SCALE: f64 = 2.0;
// Pixels of the card that must stay inside the viewport.
const MIN_VISIBLE_PX: f64 = 40.0;

#[function_component(App)]
pub fn app() -> Html {
    // Memoised so the correction keeps its identity across renders.
    let options = use_memo((), |_| TransformOptions {
        config: TransformConfig::default().with_rect_cache(RectCachePolicy::PerGesture),
        correction: Correction::clamp_scale(MIN_SCALE, MAX_SCALE)
            .then(Correction::keep_visible(MIN_VISIBLE_PX)),
    });

    use_effect_with((), |_| {
        clog("pan-zoom demo mounted");
        || ()
    });

    let card_style = "width:320px; height:220px; border-radius:12px; border:1px solid #30363d; \
        background-color:#161b22; \
        background-image:linear-gradient(#2f3641 1px, transparent 1px), linear-gradient(90deg, #2f3641 1px, transparent 1px); \
        background-size:20px 20px; display:flex; align-items:center; justify-content:center; \
        color:#c9d1d9; font-size:18px;";

    html! {
        <div id="root">
            <Viewer options={(*options).clone()} min_scale={MIN_SCALE} max_scale={MAX_SCALE}>
                <div style={card_style}>{"Drag me, scroll to zoom"}</div>
            </Viewer>
        </div>
    }
}
