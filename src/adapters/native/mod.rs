/// Native adapters - implementations for native Rust (non-WASM).

pub mod alert;
pub mod console_logger;
pub mod http_transport;
pub mod navigator;

pub use alert::LogAlert;
pub use console_logger::ConsoleLogger;
pub use http_transport::HttpTransport;
pub use navigator::MemoryNavigator;
