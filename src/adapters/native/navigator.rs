use crate::domain::request::NavigationMode;
use crate::ports::NavigatorPort;
use parking_lot::Mutex;

/// In-memory browsing context for native builds.
///
/// The location persists; the list of navigations since the last
/// [`take_history`](Self::take_history) is what grows.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    location: Mutex<Option<String>>,
    history: Mutex<Vec<(String, NavigationMode)>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Location after the last navigation, `None` if the page never moved.
    pub fn current(&self) -> Option<String> {
        self.location.lock().clone()
    }

    pub fn history(&self) -> Vec<(String, NavigationMode)> {
        self.history.lock().clone()
    }

    /// Drains the recorded navigations. `current` is unaffected.
    pub fn take_history(&self) -> Vec<(String, NavigationMode)> {
        std::mem::take(&mut *self.history.lock())
    }
}

impl NavigatorPort for MemoryNavigator {
    fn navigate(&self, target: &str, mode: NavigationMode) -> Result<(), String> {
        log::info!("Navigating to {target} ({mode:?})");
        *self.location.lock() = Some(target.to_string());
        self.history.lock().push((target.to_string(), mode));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigator_starts_idle() {
        let navigator = MemoryNavigator::new();
        assert_eq!(navigator.current(), None);
        assert!(navigator.history().is_empty());
    }

    #[test]
    fn test_navigator_tracks_last_location() {
        let navigator = MemoryNavigator::new();
        navigator.navigate("/a", NavigationMode::Assign).unwrap();
        navigator.navigate("/b", NavigationMode::Replace).unwrap();
        assert_eq!(navigator.current().as_deref(), Some("/b"));
        assert_eq!(navigator.history().len(), 2);
    }

    #[test]
    fn test_take_history_keeps_location() {
        let navigator = MemoryNavigator::new();
        navigator.navigate("/a", NavigationMode::Assign).unwrap();

        let taken = navigator.take_history();

        assert_eq!(taken, vec![("/a".to_string(), NavigationMode::Assign)]);
        assert!(navigator.history().is_empty());
        assert_eq!(navigator.current().as_deref(), Some("/a"));
    }
}
