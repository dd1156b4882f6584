use crate::ports::AlertPort;
use parking_lot::Mutex;

/// Native alert adapter.
///
/// There is no modal dialog outside the browser, so messages are written as
/// warnings and kept in order for the embedding application to inspect.
#[derive(Debug, Default)]
pub struct LogAlert {
    shown: Mutex<Vec<String>>,
}

impl LogAlert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message alerted so far, oldest first.
    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().clone()
    }

    /// Drains the recorded messages.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.shown.lock())
    }
}

impl AlertPort for LogAlert {
    fn alert(&self, message: &str) {
        log::warn!("[ALERT] {message}");
        self.shown.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_are_recorded_in_order() {
        let alert = LogAlert::new();
        alert.alert("first");
        alert.alert("second");
        assert_eq!(alert.shown(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_take_drains_messages() {
        let alert = LogAlert::new();
        alert.alert("first");

        assert_eq!(alert.take(), vec!["first".to_string()]);
        assert!(alert.shown().is_empty());

        alert.alert("second");
        assert_eq!(alert.shown(), vec!["second".to_string()]);
    }
}
