use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use yardstick_core::YardstickError;

/// Raw HTTP outcome of one relay attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RelayResponse {
    /// Build a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport abstraction (so we can inject scripted relays in tests).
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Perform a GET against `url` and return status and body.
    ///
    /// Transport-level failures (DNS, TLS, connection reset, body read) are
    /// returned as errors; HTTP error statuses are returned as responses.
    async fn get(&self, url: &str) -> Result<RelayResponse, YardstickError>;
}

/// Production transport backed by `reqwest`.
///
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a default client with a browser-like user agent.
    ///
    /// # Errors
    /// Returns `Io` if the TLS backend cannot be initialized.
    pub fn new_default() -> Result<Self, YardstickError> {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36")
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| YardstickError::Io(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RelayTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RelayResponse, YardstickError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| YardstickError::Io(format!("request failed: {e}")))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| YardstickError::Io(format!("body read failed: {e}")))?;
        Ok(RelayResponse { status, body })
    }
}

impl dyn RelayTransport {
    /// Build a `RelayTransport` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn RelayTransport>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<RelayResponse, YardstickError>,
    {
        struct FnTransport<F>(F);
        #[async_trait]
        impl<F> RelayTransport for FnTransport<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<RelayResponse, YardstickError>,
        {
            async fn get(&self, url: &str) -> Result<RelayResponse, YardstickError> {
                (self.0)(url.to_string())
            }
        }
        Arc::new(FnTransport(f))
    }
}
