use crate::ports::LoggerPort;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Instant;

/// Native logger implementation on top of the `log` facade.
///
/// Output goes wherever the host application installed a logger
/// (`env_logger` in this crate's tests). Timers are kept per label.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    timers: Mutex<HashMap<String, Instant>>,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn time(&self, label: &str) {
        self.timers.lock().insert(label.to_string(), Instant::now());
    }

    fn time_end(&self, label: &str) {
        match self.timers.lock().remove(label) {
            Some(started) => log::debug!("{label}: {}ms", started.elapsed().as_millis()),
            None => log::warn!("Timer '{label}' does not exist"),
        }
    }
}
