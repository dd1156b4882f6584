/// Ports module - Defines the interfaces (traits) that abstract the browser collaborators.
///
/// The request helper only ever talks to these traits. Each target ships its own
/// adapters (see `crate::adapters`), and tests substitute in-memory stubs.

pub mod alert;
pub mod logger;
pub mod navigator;
pub mod transport;

pub use alert::AlertPort;
pub use logger::LoggerPort;
pub use navigator::NavigatorPort;
pub use transport::{HttpStatus, RequestOptions, TransportError, TransportPort};
