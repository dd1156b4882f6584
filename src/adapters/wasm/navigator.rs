use super::error_conversions::js_error_message;
use crate::domain::request::NavigationMode;
use crate::global::window;
use crate::ports::NavigatorPort;

/// Navigates through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl LocationNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl NavigatorPort for LocationNavigator {
    fn navigate(&self, target: &str, mode: NavigationMode) -> Result<(), String> {
        let location = window()
            .map_err(|e| js_error_message(&e))?
            .location();

        match mode {
            NavigationMode::Assign => location.set_href(target),
            NavigationMode::Replace => location.replace(target),
        }
        .map_err(|e| js_error_message(&e))
    }
}
