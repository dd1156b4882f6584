use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One JSON POST: where to send it, what to send, what to tell the user if
/// the server refuses it and where to go if it accepts it.
#[derive(Debug, Clone)]
pub struct PostRequest<P> {
    pub destination: String,
    pub payload: P,
    pub error_message: String,
    pub redirect_target: String,
}

impl<P> PostRequest<P> {
    pub fn new(
        destination: impl Into<String>,
        payload: P,
        error_message: impl Into<String>,
        redirect_target: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            payload,
            error_message: error_message.into(),
            redirect_target: redirect_target.into(),
        }
    }
}

/// How the success path moves the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// `location.href = target`: pushes a history entry.
    #[default]
    Assign,
    /// `location.replace(target)`: the current entry is replaced.
    Replace,
}

/// Per-call settings. Every field is optional on the JS side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendConfig {
    pub navigation: NavigationMode,
    pub timeout_ms: Option<u32>,
    /// Also alert the user when no response arrives at all. Off by default:
    /// transport failures are only logged.
    pub alert_on_transport_failure: bool,
}

impl SendConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(|ms| Duration::from_millis(u64::from(ms)))
    }
}

/// Terminal result of a request that was actually sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// 2xx: the page was sent to `target`.
    Navigated { target: String },
    /// Non-2xx: the user was alerted, nothing else happened.
    Rejected { status: u16 },
    /// No response: a diagnostic was logged.
    TransportFailed { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Pending,
    Success,
    HttpError,
    TransportError,
}

impl RequestState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RequestState::Success | RequestState::HttpError | RequestState::TransportError
        )
    }
}

impl From<&Outcome> for RequestState {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Navigated { .. } => RequestState::Success,
            Outcome::Rejected { .. } => RequestState::HttpError,
            Outcome::TransportFailed { .. } => RequestState::TransportError,
        }
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestState::Idle => "idle",
            RequestState::Pending => "pending",
            RequestState::Success => "success",
            RequestState::HttpError => "http_error",
            RequestState::TransportError => "transport_error",
        };
        f.write_str(name)
    }
}
