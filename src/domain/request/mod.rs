pub mod error;
pub mod operations;
pub mod types;
pub mod validation;

pub use error::RequestError;
pub use operations::{dispatch, encode_payload, execute, prepare, send, PreparedRequest};
pub use types::{NavigationMode, Outcome, PostRequest, RequestState, SendConfig};
pub use validation::validate_destination;
