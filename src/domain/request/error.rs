use std::fmt;

/// Errors that stop a request before it is sent, or that the navigation
/// primitive itself raised. HTTP and transport failures are outcomes, not
/// errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    Serialization(String),
    InvalidDestination(String),
    InvalidConfig(String),
    Navigation(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Serialization(msg) => write!(f, "Serialization Error: {msg}"),
            RequestError::InvalidDestination(msg) => write!(f, "Invalid destination: {msg}"),
            RequestError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            RequestError::Navigation(msg) => write!(f, "Navigation failed: {msg}"),
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn serialization_error(message: impl Into<String>) -> Self {
        RequestError::Serialization(message.into())
    }

    pub fn invalid_destination(message: impl Into<String>) -> Self {
        RequestError::InvalidDestination(message.into())
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Serialization(err.to_string())
    }
}
