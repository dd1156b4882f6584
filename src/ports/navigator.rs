use crate::domain::request::NavigationMode;

/// Global page navigation.
pub trait NavigatorPort: Send + Sync {
    /// Moves the current page to `target`. Called at most once per request.
    fn navigate(&self, target: &str, mode: NavigationMode) -> Result<(), String>;
}
