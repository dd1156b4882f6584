#![cfg(target_arch = "wasm32")]
extern crate wasm_bindgen_test;

use jsonpost::facades::wasm::{json_post, json_post_with_config};
use jsonpost::ports::{AlertPort, NavigatorPort};
use jsonpost::{NavigationMode, Outcome, Platform, PostRequest, SendConfig};
use parking_lot::Mutex;
use std::sync::Arc;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct Recorder {
    alerts: Mutex<Vec<String>>,
    locations: Mutex<Vec<String>>,
}

impl AlertPort for Recorder {
    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }
}

impl NavigatorPort for Recorder {
    fn navigate(&self, target: &str, _mode: NavigationMode) -> Result<(), String> {
        self.locations.lock().push(target.to_string());
        Ok(())
    }
}

#[wasm_bindgen_test]
fn empty_path_throws() {
    let result = json_post("", JsValue::from_str("x"), "Failed", "/next");
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn cyclic_payload_throws() {
    let payload = js_sys::Object::new();
    js_sys::Reflect::set(&payload, &"me".into(), &payload).unwrap();

    let result = json_post("/api/login", payload.into(), "Failed", "/next");

    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn invalid_config_throws() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"navigation".into(), &"reload".into()).unwrap();

    let result = json_post_with_config(
        "/api/login",
        JsValue::from_str("x"),
        "Failed",
        "/next",
        config.into(),
    );

    assert!(result.is_err());
}

#[wasm_bindgen_test]
async fn unreachable_host_is_a_transport_failure() {
    let recorder = Arc::new(Recorder::default());
    let platform = Platform::new()
        .with_alerter(recorder.clone())
        .with_navigator(recorder.clone());
    let request = PostRequest::new("http://127.0.0.1:1/api/login", 1, "Failed", "/next");

    let outcome = jsonpost::send(&platform, &request, &SendConfig::default())
        .await
        .unwrap();

    assert!(matches!(outcome, Outcome::TransportFailed { .. }));
    assert!(recorder.alerts.lock().is_empty());
    assert!(recorder.locations.lock().is_empty());
}
