use super::error_conversions::js_error_message;
use crate::global::window;
use crate::ports::AlertPort;

/// `window.alert`. Blocks the page until dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowAlert;

impl WindowAlert {
    pub fn new() -> Self {
        Self
    }
}

impl AlertPort for WindowAlert {
    fn alert(&self, message: &str) {
        let result = window().and_then(|window| window.alert_with_message(message));
        if let Err(err) = result {
            crate::adapters::logger().error(&format!(
                "Unable to show alert '{}': {}",
                message,
                js_error_message(&err)
            ));
        }
    }
}
