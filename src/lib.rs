#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod ports;
pub mod platform;

#[cfg(target_arch = "wasm32")]
pub mod global;
pub mod measure;

// Re-exports for testing
pub use domain::request::{
    dispatch, send, NavigationMode, Outcome, PostRequest, RequestError, RequestState, SendConfig,
};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
