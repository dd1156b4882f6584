use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

pub const ACCEPT: &str = "application/json, text/plain, */*";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Options for a single outbound request.
///
/// Built fresh for every call and handed to the transport by reference, so
/// nothing about a request outlives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// A JSON POST carrying `body`, with the `Accept` and `Content-Type`
    /// headers every request of this crate sends.
    pub fn json(body: String, timeout: Option<Duration>) -> Self {
        Self {
            method: "POST",
            headers: vec![
                ("Accept", ACCEPT.to_string()),
                ("Content-Type", CONTENT_TYPE_JSON.to_string()),
            ],
            body,
            timeout,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status code of a response that did arrive. The body is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatus(pub u16);

impl HttpStatus {
    pub fn is_success(self) -> bool {
        (200..=299).contains(&self.0)
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Network(String),
    Timeout(Duration),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {msg}"),
            Self::Timeout(after) => write!(f, "Request timed out after {}ms", after.as_millis()),
        }
    }
}

impl std::error::Error for TransportError {}

/// Transport port - the platform's fetch facility.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TransportPort: Send + Sync {
    async fn post(&self, url: &str, options: &RequestOptions)
        -> Result<HttpStatus, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_options_headers() {
        let options = RequestOptions::json("{}".to_string(), None);
        assert_eq!(options.method, "POST");
        assert_eq!(options.header("Accept"), Some("application/json, text/plain, */*"));
        assert_eq!(options.header("content-type"), Some("application/json"));
        assert_eq!(options.headers.len(), 2);
    }

    #[test]
    fn test_status_classification() {
        assert!(HttpStatus(200).is_success());
        assert!(HttpStatus(204).is_success());
        assert!(HttpStatus(299).is_success());
        assert!(!HttpStatus(199).is_success());
        assert!(!HttpStatus(300).is_success());
        assert!(!HttpStatus(401).is_success());
        assert!(!HttpStatus(503).is_success());
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "Request timed out after 1500ms");
        let err = TransportError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
