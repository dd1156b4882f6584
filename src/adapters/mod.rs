/// Adapters module - platform-specific implementations of ports.

pub mod global_logger;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    ConsoleLogger, FetchTransport as Transport, LocationNavigator as Navigator,
    WindowAlert as Alert,
};
#[cfg(not(target_arch = "wasm32"))]
pub use native::{
    ConsoleLogger, HttpTransport as Transport, LogAlert as Alert, MemoryNavigator as Navigator,
};

pub use global_logger::logger;
