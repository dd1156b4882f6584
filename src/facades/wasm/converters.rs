use crate::domain::request::{RequestError, SendConfig};
use crate::adapters::wasm::error_conversions::js_error_message;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

/// Serializes with the host's own `JSON.stringify`, so JS values keep their
/// usual JSON form (`toJSON`, dropped `undefined` members, ...). Cycles throw.
pub fn payload_to_json(payload: &JsValue) -> Result<String, RequestError> {
    let encoded = js_sys::JSON::stringify(payload)
        .map_err(|e| RequestError::serialization_error(js_error_message(&e)))?;

    encoded
        .as_string()
        .ok_or_else(|| RequestError::serialization_error("Value has no JSON representation"))
}

pub fn config_from_js(config: JsValue) -> Result<SendConfig, RequestError> {
    if config.is_undefined() || config.is_null() {
        return Ok(SendConfig::default());
    }

    from_value(config).map_err(|e| RequestError::InvalidConfig(e.to_string()))
}
