/// Global logger instance - automatically selects implementation based on build target.
///
/// Supports both WASM (browser console) and native (`log` facade) platforms.
/// The correct implementation is selected at compile time based on the target architecture.
use crate::adapters::ConsoleLogger;
use crate::ports::LoggerPort;
use once_cell::sync::Lazy;

pub static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}
