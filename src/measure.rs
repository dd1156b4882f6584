use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

pub fn is_debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}

/// Wraps `$block` in `console.time`/`console.timeEnd` when debug mode is on.
/// Expands in place, so `$block` may contain `.await`.
#[macro_export]
macro_rules! time_it {
    ($platform:expr, $label:expr, $block:expr) => {{
        let debug = $crate::measure::is_debug_mode();
        if debug {
            $platform.logger().time($label);
        }
        let result = $block;
        if debug {
            $platform.logger().time_end($label);
        }
        result
    }};
}

pub use crate::time_it;
