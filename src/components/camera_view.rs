use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlVideoElement, MediaStream};
use yew::prelude::*;

use crate::error::CameraError;
use crate::media;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraViewProps {
    /// Receives the live stream, or `None` when the camera is unavailable.
    pub on_camera_ready: Callback<Option<MediaStream>>,
    pub ideal_width: u32,
    pub ideal_height: u32,
}

#[derive(Clone, Debug, PartialEq)]
enum CameraStatus {
    Starting,
    Live,
    Failed(CameraError),
}

#[function_component(CameraView)]
pub fn camera_view(props: &CameraViewProps) -> Html {
    let video_ref = use_node_ref();
    let status = use_state(|| CameraStatus::Starting);
    let retrying = use_state(|| false);
    let stream_ref = use_mut_ref(|| None::<MediaStream>);

    let start_camera = {
        let video_ref = video_ref.clone();
        let status = status.clone();
        let retrying = retrying.clone();
        let stream_ref = stream_ref.clone();
        let on_ready = props.on_camera_ready.clone();
        let (w, h) = (props.ideal_width, props.ideal_height);
        Callback::from(move |_: ()| {
            let video_ref = video_ref.clone();
            let status = status.clone();
            let retrying = retrying.clone();
            let stream_ref = stream_ref.clone();
            let on_ready = on_ready.clone();
            retrying.set(true);
            spawn_local(async move {
                match media::start_camera(w, h).await {
                    Ok(stream) => match video_ref.cast::<HtmlVideoElement>() {
                        Some(video) => {
                            video.set_muted(true);
                            video.set_src_object(Some(&stream));
                            if let Some(prev) = stream_ref.borrow_mut().replace(stream.clone()) {
                                media::stop_stream(&prev);
                            }
                            info!("camera started");
                            status.set(CameraStatus::Live);
                            on_ready.emit(Some(stream));
                        }
                        // Unmounted while waiting for permission.
                        None => media::stop_stream(&stream),
                    },
                    Err(err) => {
                        error!("Error accessing camera: {err:?}");
                        status.set(CameraStatus::Failed(err));
                        on_ready.emit(None);
                    }
                }
                retrying.set(false);
            });
        })
    };

    {
        let start_camera = start_camera.clone();
        let stream_ref = stream_ref.clone();
        use_effect_with((), move |_| {
            start_camera.emit(());
            move || {
                if let Some(stream) = stream_ref.borrow_mut().take() {
                    media::stop_stream(&stream);
                }
            }
        });
    }

    let retry_cb = {
        let start_camera = start_camera.clone();
        Callback::from(move |_: MouseEvent| start_camera.emit(()))
    };

    let video_style = if *status == CameraStatus::Live {
        "width:100%; height:100%; object-fit:cover; transition:opacity 0.5s; opacity:1;"
    } else {
        "width:100%; height:100%; object-fit:cover; transition:opacity 0.5s; opacity:0;"
    };

    let overlay = match &*status {
        CameraStatus::Starting => html! {
            <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:#000; color:#fff;">
                <div style="text-align:center;">{"Starting camera..."}</div>
            </div>
        },
        CameraStatus::Live => html! {},
        CameraStatus::Failed(err) => html! {
            <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:linear-gradient(135deg,#111827,#000); color:#fff; padding:24px;">
                <div style="text-align:center; max-width:28rem;">
                    <h3 style="margin:0 0 12px 0;">{"Camera Not Available"}</h3>
                    <p style="opacity:0.8; margin:0 0 24px 0; line-height:1.5;">{ err.to_string() }</p>
                    <button
                        onclick={retry_cb}
                        disabled={*retrying}
                        style="background:#2563eb; color:#fff; border:none; border-radius:6px; padding:8px 14px;"
                    >
                        { if *retrying { "Retrying..." } else { "Try Again" } }
                    </button>
                    <p style="font-size:13px; opacity:0.6; margin-top:12px;">
                        {"You can still use HoloSketch without camera access by importing photos to trace."}
                    </p>
                </div>
            </div>
        },
    };

    html! {<div style="position:absolute; inset:0; overflow:hidden; background:#000;">
        <video ref={video_ref} autoplay=true playsinline=true muted=true style={video_style} />
        { overlay }
    </div>}
}
