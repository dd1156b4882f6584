/// Native Rust facade for JSON POST requests
/// Provides an ergonomic Rust API that delegates to domain logic
use crate::adapters::native::{HttpTransport, LogAlert, MemoryNavigator};
use crate::domain::request::{self, NavigationMode, Outcome, PostRequest, RequestError, SendConfig};
use crate::platform::Platform;
use reqwest::Url;
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Native JSON POST client
///
/// Owns its browsing context: alerts and navigations are recorded and can be
/// read back with [`alerts`](Self::alerts) and [`location`](Self::location).
pub struct JsonPostClient {
    platform: Platform,
    alerts: Arc<LogAlert>,
    navigator: Arc<MemoryNavigator>,
    config: SendConfig,
}

impl JsonPostClient {
    /// Create a client whose relative destinations resolve against `base_url`
    pub fn new(base_url: Url) -> Self {
        let alerts = Arc::new(LogAlert::new());
        let navigator = Arc::new(MemoryNavigator::new());
        let platform = Platform::new()
            .with_transport(Arc::new(HttpTransport::new().with_base_url(base_url)))
            .with_alerter(alerts.clone())
            .with_navigator(navigator.clone());

        Self {
            platform,
            alerts,
            navigator,
            config: SendConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SendConfig) -> Self {
        self.config = config;
        self
    }

    /// Send and wait for the outcome
    pub async fn send<P: Serialize>(
        &self,
        destination: &str,
        payload: &P,
        error_message: &str,
        redirect_target: &str,
    ) -> Result<Outcome, RequestError> {
        let request = PostRequest::new(destination, payload, error_message, redirect_target);
        request::send(&self.platform, &request, &self.config).await
    }

    /// Send on a detached tokio task; dropping the handle does not cancel it
    pub fn dispatch<P: Serialize>(
        &self,
        destination: &str,
        payload: &P,
        error_message: &str,
        redirect_target: &str,
    ) -> Result<JoinHandle<Option<Outcome>>, RequestError> {
        let request = PostRequest::new(destination, payload, error_message, redirect_target);
        request::dispatch(self.platform.clone(), &request, &self.config)
    }

    /// Current location, `None` until a request succeeds
    pub fn location(&self) -> Option<String> {
        self.navigator.current()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.shown()
    }

    /// Alerts since the last call, leaving none recorded
    pub fn take_alerts(&self) -> Vec<String> {
        self.alerts.take()
    }

    /// Navigations since the last call; `location` is kept
    pub fn take_navigations(&self) -> Vec<(String, NavigationMode)> {
        self.navigator.take_history()
    }
}
