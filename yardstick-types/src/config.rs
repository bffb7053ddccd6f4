//! Configuration types shared across the calculator, the relay fetcher and the CLI.

use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::ticker::Benchmark;

/// One intermediary endpoint used to reach the upstream chart source.
///
/// The request URL is `endpoint` followed by the percent-encoded upstream URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Short name used in errors and logs.
    pub name: String,
    /// Prefix the encoded upstream URL is appended to.
    pub endpoint: String,
    /// The relay wraps the upstream body in `{"contents": "<json>"}`.
    #[serde(default)]
    pub envelope: bool,
}

impl RelayConfig {
    /// Relay that returns the upstream body unchanged.
    pub fn passthrough(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            envelope: false,
        }
    }

    /// Relay that wraps the upstream body in a JSON envelope.
    pub fn enveloped(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            envelope: true,
        }
    }

    /// The stock relay list, in attempt order.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::passthrough("allorigins-raw", "https://api.allorigins.win/raw?url="),
            Self::enveloped("allorigins-get", "https://api.allorigins.win/get?url="),
            Self::passthrough("corsproxy", "https://corsproxy.io/?"),
        ]
    }
}

/// Retry policy applied by the relay fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Number of full passes over the relay list (>= 1).
    pub passes: u32,
    /// Pause between two passes in milliseconds.
    pub backoff_ms: u64,
    /// Random jitter percentage [0, 100] added to the backoff.
    pub jitter_percent: u8,
    /// Timeout applied to each relay attempt in milliseconds.
    pub attempt_timeout_ms: u64,
}

impl RetryConfig {
    /// Pause between two passes.
    #[must_use]
    pub const fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    /// Per-attempt timeout.
    #[must_use]
    pub const fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            passes: 2,
            backoff_ms: 500,
            jitter_percent: 0,
            attempt_timeout_ms: 10_000,
        }
    }
}

/// Global configuration for the `Yardstick` calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YardstickConfig {
    /// Pause inserted between two tickers of a comparison run, in milliseconds.
    pub ticker_pause_ms: u64,
    /// Timezone whose calendar year bounds the year-to-date period.
    pub market_timezone: Tz,
    /// Benchmarks appended after the user tickers.
    pub benchmarks: Vec<Benchmark>,
}

impl YardstickConfig {
    /// Pause between tickers.
    #[must_use]
    pub const fn ticker_pause(&self) -> Duration {
        Duration::from_millis(self.ticker_pause_ms)
    }
}

impl Default for YardstickConfig {
    fn default() -> Self {
        Self {
            ticker_pause_ms: 600,
            market_timezone: chrono_tz::America::New_York,
            benchmarks: Benchmark::defaults(),
        }
    }
}
