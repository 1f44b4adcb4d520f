//! Camera stream and torch helpers over `navigator.mediaDevices`.
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, MediaStream, MediaStreamConstraints, MediaStreamTrack, MediaTrackConstraints};

use crate::error::{CameraError, TorchError};

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}

fn ideal(value: u32) -> Object {
    let obj = Object::new();
    set(&obj, "ideal", &JsValue::from(value));
    obj
}

fn camera_error(err: JsValue) -> CameraError {
    match err.dyn_ref::<DomException>() {
        Some(dom) => CameraError::from_dom_name(&dom.name()),
        None => CameraError::Other(format!("{err:?}")),
    }
}

/// Request the rear-facing camera at the given ideal resolution.
pub async fn start_camera(ideal_width: u32, ideal_height: u32) -> Result<MediaStream, CameraError> {
    let window = web_sys::window().ok_or(CameraError::Unsupported)?;
    let navigator = window.navigator();
    // Undefined outside secure contexts.
    let has_devices = Reflect::get(&navigator, &JsValue::from_str("mediaDevices"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);
    if !has_devices {
        return Err(CameraError::Unsupported);
    }
    let devices = navigator.media_devices().map_err(|_| CameraError::Unsupported)?;

    let video = Object::new();
    set(&video, "facingMode", &JsValue::from_str("environment"));
    set(&video, "width", &ideal(ideal_width));
    set(&video, "height", &ideal(ideal_height));
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(camera_error)?;
    let stream = JsFuture::from(promise).await.map_err(camera_error)?;
    stream
        .dyn_into::<MediaStream>()
        .map_err(|v| CameraError::Other(format!("unexpected getUserMedia result: {v:?}")))
}

pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

fn first_video_track(stream: &MediaStream) -> Option<MediaStreamTrack> {
    stream.get_video_tracks().get(0).dyn_into::<MediaStreamTrack>().ok()
}

/// True when the first video track reports `torch: true` in its capabilities.
pub fn has_torch(stream: &MediaStream) -> bool {
    let Some(track) = first_video_track(stream) else {
        return false;
    };
    // getCapabilities is missing on some browsers.
    let Ok(get_caps) = Reflect::get(&track, &JsValue::from_str("getCapabilities")) else {
        return false;
    };
    let Some(get_caps) = get_caps.dyn_ref::<Function>() else {
        return false;
    };
    let Ok(caps) = get_caps.call0(&track) else {
        return false;
    };
    Reflect::get(&caps, &JsValue::from_str("torch"))
        .map(|v| v.as_bool() == Some(true))
        .unwrap_or(false)
}

pub async fn set_torch(stream: &MediaStream, on: bool) -> Result<(), TorchError> {
    if !has_torch(stream) {
        return Err(TorchError::Unsupported);
    }
    let track = first_video_track(stream).ok_or(TorchError::Unsupported)?;
    let torch = Object::new();
    set(&torch, "torch", &JsValue::from_bool(on));
    let constraints = Object::new();
    set(&constraints, "advanced", &Array::of1(&torch));
    let rejected = |e: JsValue| TorchError::Rejected(format!("{e:?}"));
    let promise = track
        .apply_constraints_with_constraints(constraints.unchecked_ref::<MediaTrackConstraints>())
        .map_err(rejected)?;
    JsFuture::from(promise).await.map_err(rejected)?;
    Ok(())
}
