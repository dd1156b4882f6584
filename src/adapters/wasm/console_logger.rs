use crate::ports::LoggerPort;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Browser console. Timers use the console's own labelled timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        console::log_1(&JsValue::from_str(message));
    }

    fn error(&self, message: &str) {
        console::error_1(&JsValue::from_str(message));
    }

    fn warn(&self, message: &str) {
        console::warn_1(&JsValue::from_str(message));
    }

    fn time(&self, label: &str) {
        console::time_with_label(label);
    }

    fn time_end(&self, label: &str) {
        console::time_end_with_label(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_global_logger_is_console() {
        let logger = crate::adapters::logger();
        logger.log("jsonpost log");
        logger.warn("jsonpost warn");
        logger.error("jsonpost error");
    }

    #[wasm_bindgen_test]
    fn test_labelled_timer_round_trip() {
        let logger = ConsoleLogger::new();
        logger.time("POST /api/login");
        logger.time_end("POST /api/login");
    }
}
