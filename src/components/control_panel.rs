use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlPanelProps {
    pub opacity: u8,
    pub opacity_step: u8,
    pub on_opacity_change: Callback<u8>,
    pub locked: bool,
    pub on_lock_toggle: Callback<()>,
    pub on_rotate_left: Callback<()>,
    pub on_rotate_right: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    /// Present only when the camera exposes a torch.
    #[prop_or_default]
    pub on_torch_toggle: Option<Callback<()>>,
    #[prop_or_default]
    pub torch_on: bool,
    pub has_image: bool,
}

const BUTTON_STYLE: &str = "background:rgba(0,0,0,0.2); border:1px solid rgba(255,255,255,0.2); color:#fff; border-radius:6px; padding:6px 10px;";
const ACTIVE_LOCK_STYLE: &str = "background:rgba(37,99,235,0.5); border:1px solid rgba(255,255,255,0.2); color:#fff; border-radius:6px; padding:6px 10px;";
const ACTIVE_TORCH_STYLE: &str = "background:rgba(202,138,4,0.5); border:1px solid rgba(255,255,255,0.2); color:#fff; border-radius:6px; padding:6px 10px;";

#[function_component]
pub fn ControlPanel(props: &ControlPanelProps) -> Html {
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let opacity_cb = {
        let cb = props.on_opacity_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<u8>() {
                cb.emit(v.min(100));
            }
        })
    };

    let image_controls = if props.has_image {
        html! {<>
            <div style="display:flex; flex-direction:column; gap:6px;">
                <label style="color:#fff;">{ format!("Opacity: {}%", props.opacity) }</label>
                <input
                    type="range"
                    min="0"
                    max="100"
                    step={props.opacity_step.to_string()}
                    value={props.opacity.to_string()}
                    oninput={opacity_cb}
                    style="width:100%;"
                />
            </div>
            <div style="display:flex; flex-wrap:wrap; gap:8px; justify-content:center;">
                <button style={BUTTON_STYLE} title="Zoom out" onclick={emit(&props.on_zoom_out)} disabled={props.locked}>{"−"}</button>
                <button style={BUTTON_STYLE} title="Zoom in" onclick={emit(&props.on_zoom_in)} disabled={props.locked}>{"+"}</button>
                <button style={BUTTON_STYLE} title="Rotate left" onclick={emit(&props.on_rotate_left)} disabled={props.locked}>{"⟲"}</button>
                <button style={BUTTON_STYLE} title="Rotate right" onclick={emit(&props.on_rotate_right)} disabled={props.locked}>{"⟳"}</button>
                <button
                    style={if props.locked { ACTIVE_LOCK_STYLE } else { BUTTON_STYLE }}
                    title={if props.locked { "Unlock" } else { "Lock" }}
                    onclick={emit(&props.on_lock_toggle)}
                >
                    { if props.locked { "Locked" } else { "Unlocked" } }
                </button>
                <button style={BUTTON_STYLE} title="Reset" onclick={emit(&props.on_reset)}>{"Reset"}</button>
            </div>
        </>}
    } else {
        html! {}
    };

    let torch = match &props.on_torch_toggle {
        Some(cb) => html! {
            <div style="display:flex; justify-content:center;">
                <button
                    style={if props.torch_on { ACTIVE_TORCH_STYLE } else { BUTTON_STYLE }}
                    onclick={emit(cb)}
                >
                    {"Flashlight"}
                </button>
            </div>
        },
        None => html! {},
    };

    html! {<div style="background:rgba(0,0,0,0.8); padding:16px; display:flex; flex-direction:column; gap:16px;">
        { image_controls }
        { torch }
    </div>}
}
