use crate::domain::request::RequestError;
use wasm_bindgen::{JsCast, JsValue};

/// Conversion from RequestError to JsValue for WASM boundary
impl From<RequestError> for JsValue {
    fn from(error: RequestError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// Best-effort text for a thrown JS value (`Error`, string or anything else).
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
