//! Browser console logging

use pdfsplit_core::SplitterError;
use wasm_bindgen::{JsCast, JsValue};

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Log a handled failure. User mistakes go to `console.log`, the rest to
/// `console.error` prefixed with `context`.
pub fn report(context: &str, err: &SplitterError) {
    if err.is_user_error() {
        log(&err.to_string());
    } else {
        web_sys::console::error_2(&format!("{}:", context).into(), &err.to_string().into());
    }
}

/// Best-effort message for a thrown JS value
pub fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
