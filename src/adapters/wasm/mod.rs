/// WASM adapters - implementations using browser APIs.

pub mod alert;
pub mod console_logger;
pub mod error_conversions;
pub mod fetch_transport;
pub mod navigator;

pub use alert::WindowAlert;
pub use console_logger::ConsoleLogger;
pub use fetch_transport::FetchTransport;
pub use navigator::LocationNavigator;
