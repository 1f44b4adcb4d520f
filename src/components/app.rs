use super::{
    app_header::AppHeader, ar_overlay::ArOverlay, camera_view::CameraView,
    control_panel::ControlPanel,
};
use crate::config::OverlaySettings;
use crate::media;
use crate::model::Transform;
use crate::state::{CameraAction, CameraSession, OverlayController};
use crate::util::revoke_object_url;
use log::{debug, error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::MediaStream;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_memo((), |_| OverlaySettings::load());
    let selected_image = use_state(|| None::<AttrValue>);
    let opacity = {
        let default_opacity = settings.default_opacity;
        use_state(move || default_opacity)
    };
    let is_locked = use_state(|| false);
    let camera = use_reducer(CameraSession::default);
    let controller = use_memo((), |_| OverlayController::new());

    let on_image_select = {
        let selected_image = selected_image.clone();
        let opacity = opacity.clone();
        let is_locked = is_locked.clone();
        let default_opacity = settings.default_opacity;
        Callback::from(move |url: String| {
            if let Some(prev) = &*selected_image {
                revoke_object_url(prev);
            }
            info!("overlay image selected");
            selected_image.set(Some(url.into()));
            opacity.set(default_opacity);
            is_locked.set(false);
        })
    };
    let on_camera_ready = {
        let camera = camera.dispatcher();
        Callback::from(move |stream: Option<MediaStream>| {
            camera.dispatch(CameraAction::Connected(stream))
        })
    };
    let on_transform_change = Callback::from(|t: Transform| {
        debug!(
            "overlay at ({:.1}, {:.1}) scale {:.2} rotation {:.1}",
            t.x, t.y, t.scale, t.rotation
        )
    });

    let rotate_by = |degrees: f64| {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.rotate(degrees))
    };
    let zoom_to = |scale: f64| {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.set_scale(scale))
    };
    let on_reset = {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.reset_transform())
    };
    let on_lock_toggle = {
        let is_locked = is_locked.clone();
        Callback::from(move |_: ()| is_locked.set(!*is_locked))
    };
    let on_opacity_change = {
        let opacity = opacity.clone();
        Callback::from(move |v: u8| opacity.set(v))
    };

    let has_torch = camera.stream.as_ref().is_some_and(media::has_torch);
    let on_torch_toggle = has_torch.then(|| {
        let stream = camera.stream.clone();
        let next = !camera.torch_on;
        let dispatcher = camera.dispatcher();
        Callback::from(move |_: ()| {
            let Some(stream) = stream.clone() else {
                return;
            };
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match media::set_torch(&stream, next).await {
                    Ok(()) => dispatcher.dispatch(CameraAction::TorchSwitched(next)),
                    Err(err) => error!("Flashlight not supported: {err}"),
                }
            });
        })
    });

    let stage = match &*selected_image {
        Some(url) => html! {
            <div style="position:absolute; inset:0;">
                <ArOverlay
                    image_url={url.clone()}
                    opacity={*opacity}
                    locked={*is_locked}
                    controller={(*controller).clone()}
                    on_transform_change={on_transform_change}
                />
            </div>
        },
        None => {
            let text = if camera.stream.is_some() {
                "Import a photo to start tracing with AR overlay. Perfect for sketching and drawing practice."
            } else {
                "Import a photo to start tracing. The image will overlay on your workspace for easy sketching."
            };
            html! {
                <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; pointer-events:none;">
                    <div style="background:rgba(0,0,0,0.6); border-radius:16px; padding:24px; text-align:center; max-width:24rem; margin:0 16px;">
                        <h3 style="margin:0 0 8px 0;">{"Welcome to HoloSketch"}</h3>
                        <p style="margin:0; opacity:0.8;">{ text }</p>
                    </div>
                </div>
            }
        }
    };

    html! {<div style="height:100vh; display:flex; flex-direction:column; background:#000; color:#fff; overflow:hidden;">
        <AppHeader on_image_select={on_image_select} />
        <div style="flex:1; position:relative;">
            <CameraView
                on_camera_ready={on_camera_ready}
                ideal_width={settings.camera_ideal_width}
                ideal_height={settings.camera_ideal_height}
            />
            { stage }
        </div>
        <ControlPanel
            opacity={*opacity}
            opacity_step={settings.opacity_step}
            on_opacity_change={on_opacity_change}
            locked={*is_locked}
            on_lock_toggle={on_lock_toggle}
            on_rotate_left={rotate_by(-settings.rotate_step_degrees)}
            on_rotate_right={rotate_by(settings.rotate_step_degrees)}
            on_reset={on_reset}
            on_zoom_in={zoom_to(settings.zoom_in_scale)}
            on_zoom_out={zoom_to(settings.zoom_out_scale)}
            on_torch_toggle={on_torch_toggle}
            torch_on={camera.torch_on}
            has_image={selected_image.is_some()}
        />
    </div>}
}
