use wasm_bindgen::prelude::*;
use web_sys::{self, DedicatedWorkerGlobalScope, Window};

pub fn get_global_scope() -> Result<JsValue, JsValue> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    // Fallback to window
    let window = web_sys::window()
        .ok_or_else(|| JsValue::from_str("Neither DedicatedWorkerGlobalScope nor Window found"))?;
    Ok(JsValue::from(window))
}

/// The page's window. Alerts and navigation only exist there, not in workers.
pub fn window() -> Result<Window, JsValue> {
    get_global_scope()?
        .dyn_into::<Window>()
        .map_err(|_| JsValue::from_str("No window in this global scope"))
}
