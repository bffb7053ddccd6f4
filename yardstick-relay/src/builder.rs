use std::sync::Arc;

use yardstick_core::{RelayConfig, RetryConfig, YardstickError};

use crate::RelayFetcher;
use crate::adapter::{RelayTransport, ReqwestTransport};
use crate::endpoint::DEFAULT_UPSTREAM;

/// Builder for a [`RelayFetcher`].
///
/// Defaults: the stock relay list, two passes with a 500 ms pause between
/// them, a 10 s per-attempt timeout, the Yahoo chart endpoint, and a
/// `reqwest` transport.
pub struct RelayFetcherBuilder {
    relays: Vec<RelayConfig>,
    retry: RetryConfig,
    upstream: String,
    transport: Option<Arc<dyn RelayTransport>>,
}

impl Default for RelayFetcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayFetcherBuilder {
    /// Start from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            relays: RelayConfig::defaults(),
            retry: RetryConfig::default(),
            upstream: DEFAULT_UPSTREAM.to_string(),
            transport: None,
        }
    }

    /// Replace the relay list. Relays are attempted in the given order.
    #[must_use]
    pub fn relays(mut self, relays: Vec<RelayConfig>) -> Self {
        self.relays = relays;
        self
    }

    /// Replace the retry policy.
    #[must_use]
    pub const fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Point at a different upstream chart endpoint.
    #[must_use]
    pub fn upstream(mut self, base: impl Into<String>) -> Self {
        self.upstream = base.into();
        self
    }

    /// Use a custom transport instead of the default `reqwest` client.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn RelayTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the fetcher.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the relay list is empty, `passes` or the attempt
    /// timeout is zero, or the upstream base is not a URL, and
    /// `Io` if the default HTTP client cannot be created.
    pub fn build(self) -> Result<RelayFetcher, YardstickError> {
        if self.relays.is_empty() {
            return Err(YardstickError::InvalidArg(
                "no relays configured; add at least one".to_string(),
            ));
        }
        if self.retry.passes == 0 {
            return Err(YardstickError::InvalidArg(
                "retry passes must be at least 1".to_string(),
            ));
        }
        if self.retry.attempt_timeout_ms == 0 {
            return Err(YardstickError::InvalidArg(
                "attempt timeout must be at least 1 ms".to_string(),
            ));
        }
        url::Url::parse(&self.upstream).map_err(|e| {
            YardstickError::InvalidArg(format!("bad upstream base '{}': {e}", self.upstream))
        })?;
        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new_default()?),
        };
        Ok(RelayFetcher {
            transport,
            relays: self.relays,
            retry: self.retry,
            upstream: self.upstream,
        })
    }
}
