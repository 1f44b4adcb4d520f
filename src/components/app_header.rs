use super::photo_import::PhotoImport;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppHeaderProps {
    pub on_image_select: Callback<String>,
}

#[function_component(AppHeader)]
pub fn app_header(props: &AppHeaderProps) -> Html {
    html! {<div style="background:rgba(0,0,0,0.9); padding:16px; display:flex; align-items:center; justify-content:space-between; border-bottom:1px solid rgba(255,255,255,0.1);">
        <div style="display:flex; align-items:center; gap:12px;">
            <div style="width:32px; height:32px; border-radius:8px; background:linear-gradient(135deg,#60a5fa,#9333ea); display:flex; align-items:center; justify-content:center; font-weight:bold; font-size:14px;">{"H"}</div>
            <div>
                <h1 style="margin:0; font-size:16px; font-weight:600;">{"HoloSketch"}</h1>
                <p style="margin:0; font-size:13px; opacity:0.6;">{"AR Sketch Guide"}</p>
            </div>
        </div>
        <PhotoImport on_image_select={props.on_image_select.clone()} />
    </div>}
}
