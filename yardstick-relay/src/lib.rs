//! yardstick-relay
//!
//! Chart fetcher that reaches the Yahoo Finance chart endpoint through an
//! ordered list of HTTP relays. Each relay either passes the upstream body
//! through or wraps it in a `{"contents": ...}` envelope.
//!
//! Retry policy
//! - Relays are attempted in list order; any failure (HTTP status, transport
//!   error, timeout, malformed body, missing `chart.result[0]`) moves on to the
//!   next relay.
//! - When a full pass fails, the fetcher pauses for the configured backoff and
//!   runs the list again, up to `RetryConfig::passes` passes.
//! - Exhaustion yields `AllRelaysFailed` with every attempt's error; callers
//!   treat it as "no series available".
#![warn(missing_docs)]

/// Transport abstraction and the production `reqwest` transport.
pub mod adapter;
mod backoff;
mod builder;
/// Chart payload decoding.
pub mod payload;
/// Upstream and relay URL construction.
pub mod endpoint;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use yardstick_core::{
    ChartProvider, ChartRequest, PriceSeries, RelayConfig, RetryConfig, YardstickError,
};

use adapter::RelayTransport;
pub use adapter::{RelayResponse, ReqwestTransport};
pub use builder::RelayFetcherBuilder;

/// Relay-routed chart fetcher. Construct with [`RelayFetcher::builder`].
pub struct RelayFetcher {
    transport: Arc<dyn RelayTransport>,
    relays: Vec<RelayConfig>,
    retry: RetryConfig,
    upstream: String,
}

impl RelayFetcher {
    /// Provider name reported through [`ChartProvider::name`].
    pub const NAME: &'static str = "yardstick-relay";

    /// Start building a fetcher from the defaults.
    #[must_use]
    pub fn builder() -> RelayFetcherBuilder {
        RelayFetcherBuilder::new()
    }

    /// Relays in attempt order.
    #[must_use]
    pub fn relays(&self) -> &[RelayConfig] {
        &self.relays
    }

    /// Active retry policy.
    #[must_use]
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// One attempt through one relay. Every error is tagged with the relay name.
    async fn attempt(
        &self,
        relay: &RelayConfig,
        upstream: &str,
    ) -> Result<PriceSeries, YardstickError> {
        let url = endpoint::relay_url(relay, upstream);
        let resp = tokio::time::timeout(self.retry.attempt_timeout(), self.transport.get(&url))
            .await
            .map_err(|_| YardstickError::provider_timeout(relay.name.clone()))?
            .map_err(|e| tag_err(&relay.name, e))?;
        if !resp.is_success() {
            return Err(YardstickError::relay(
                relay.name.clone(),
                format!("HTTP {}", resp.status),
            ));
        }
        payload::decode(&resp.body, relay.envelope).map_err(|e| tag_err(&relay.name, e))
    }

    /// Fetch a series, walking the relay list up to `passes` times.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the request cannot be turned into an upstream URL,
    /// and `AllRelaysFailed` (holding each attempt's error in order) when every
    /// relay failed on every pass.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "yardstick_relay::fetch",
            skip(self),
            fields(symbol = %req.symbol(), window = ?req.window(), interval = ?req.interval()),
        )
    )]
    pub async fn fetch(&self, req: &ChartRequest) -> Result<PriceSeries, YardstickError> {
        let upstream = endpoint::upstream_url(&self.upstream, req)?;
        let mut errors: Vec<YardstickError> = Vec::new();

        for pass in 0..self.retry.passes {
            if pass > 0 {
                let wait = backoff::jitter_wait(self.retry.backoff_ms, self.retry.jitter_percent);
                #[cfg(feature = "tracing")]
                tracing::debug!(pass, wait_ms = wait, "relay pass exhausted; backing off");
                tokio::time::sleep(Duration::from_millis(wait)).await;
            }
            for relay in &self.relays {
                match self.attempt(relay, &upstream).await {
                    Ok(series) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(relay = %relay.name, points = series.len(), "relay ok");
                        return Ok(series);
                    }
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(relay = %relay.name, error = %e, "relay failed");
                        errors.push(e);
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(attempts = errors.len(), "all relays failed");
        Err(YardstickError::AllRelaysFailed(errors))
    }
}

fn tag_err(relay: &str, e: YardstickError) -> YardstickError {
    match e {
        e @ (YardstickError::Relay { .. }
        | YardstickError::ProviderTimeout { .. }
        | YardstickError::AllRelaysFailed(_)) => e,
        YardstickError::Data(msg) | YardstickError::Io(msg) | YardstickError::InvalidArg(msg) => {
            YardstickError::relay(relay, msg)
        }
        other => YardstickError::relay(relay, other.to_string()),
    }
}

#[async_trait]
impl ChartProvider for RelayFetcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn chart(&self, req: &ChartRequest) -> Result<PriceSeries, YardstickError> {
        self.fetch(req).await
    }
}
