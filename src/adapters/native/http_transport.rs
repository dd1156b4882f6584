use crate::ports::{HttpStatus, RequestOptions, TransportError, TransportPort};
use async_trait::async_trait;
use reqwest::{Method, Url};

/// HTTP transport for native builds. Requires a tokio runtime.
///
/// Destinations are resolved against `base_url` the way a page resolves a
/// relative `fetch` path against its own origin.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Option<Url>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn resolve(&self, destination: &str) -> Result<Url, TransportError> {
        let resolved = match &self.base_url {
            Some(base) => base.join(destination),
            None => Url::parse(destination),
        };
        resolved.map_err(|e| TransportError::Network(format!("Invalid URL '{destination}': {e}")))
    }
}

#[async_trait]
impl TransportPort for HttpTransport {
    async fn post(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpStatus, TransportError> {
        let url = self.resolve(url)?;
        let method = Method::from_bytes(options.method.as_bytes())
            .map_err(|e| TransportError::Network(format!("Invalid method: {e}")))?;

        let mut builder = self.client.request(method, url).body(options.body.clone());
        for (name, value) in &options.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        match builder.send().await {
            Ok(response) => Ok(HttpStatus(response.status().as_u16())),
            Err(err) if err.is_timeout() => Err(TransportError::Timeout(
                options.timeout.unwrap_or_default(),
            )),
            Err(err) => Err(TransportError::Network(err.to_string())),
        }
    }
}
