use super::converters;
use crate::domain::request::{operations, PreparedRequest, SendConfig};
use crate::platform::Platform;
use wasm_bindgen::prelude::*;

/// POSTs `data` as JSON to `path`. On a 2xx response the page goes to
/// `redir`; on any other status `error` is alerted; if no response arrives
/// the failure is logged to the console.
///
/// Returns immediately. Throws only if `data` cannot be serialized or `path`
/// is empty.
#[wasm_bindgen]
pub fn json_post(path: &str, data: JsValue, error: &str, redir: &str) -> Result<(), JsValue> {
    post(path, &data, error, redir, &SendConfig::default())
}

/// `json_post` with an options object:
/// `{ navigation: "assign" | "replace", timeout_ms, alert_on_transport_failure }`.
#[wasm_bindgen]
pub fn json_post_with_config(
    path: &str,
    data: JsValue,
    error: &str,
    redir: &str,
    config: JsValue,
) -> Result<(), JsValue> {
    let config = converters::config_from_js(config)?;
    post(path, &data, error, redir, &config)
}

fn post(
    path: &str,
    data: &JsValue,
    error: &str,
    redir: &str,
    config: &SendConfig,
) -> Result<(), JsValue> {
    let body = converters::payload_to_json(data)?;
    let prepared = PreparedRequest::from_encoded(path, body, error, redir, config)?;

    operations::dispatch_prepared(Platform::new(), prepared);
    Ok(())
}
