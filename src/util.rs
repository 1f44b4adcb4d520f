// Logging setup and small DOM helpers.
use log::Level;
use wasm_bindgen::JsValue;

pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("logger already initialized"));
    }
}

/// Release an object URL created for an imported image.
pub fn revoke_object_url(url: &str) {
    if url.starts_with("blob:") {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
