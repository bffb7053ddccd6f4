use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the yardstick workspace.
///
/// This wraps relay failures, argument validation errors, malformed upstream
/// payloads, not-found conditions, and an aggregate for exhausted relay lists.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum YardstickError {
    /// Issues with the returned or expected data (missing fields, unordered timestamps, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual relay (or provider) returned an error.
    #[error("{relay} failed: {msg}")]
    Relay {
        /// Relay or provider name that failed.
        relay: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A symbol or resource could not be found upstream.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "chart for XYZ".
        what: String,
    },

    /// Every relay failed on every pass; contains the individual failures in attempt order.
    #[error("all relays failed: {0:?}")]
    AllRelaysFailed(Vec<YardstickError>),

    /// A single relay attempt exceeded the configured timeout.
    #[error("relay timed out: {relay}")]
    ProviderTimeout {
        /// Relay name that timed out.
        relay: String,
    },

    /// A comparison run is already in progress on this instance.
    #[error("a comparison run is already in progress")]
    Busy,

    /// Local I/O failure (export, config loading).
    #[error("io error: {0}")]
    Io(String),
}

impl YardstickError {
    /// Helper: build a `Relay` error with the relay name and message.
    pub fn relay(relay: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Relay {
            relay: relay.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(relay: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            relay: relay.into(),
        }
    }

    /// Returns true if this error only means "no series is available".
    ///
    /// Absence is not a ticker-level failure: the affected periods are left
    /// empty and the comparison carries on.
    #[must_use]
    pub fn is_fetch_absence(&self) -> bool {
        match self {
            Self::Data(_)
            | Self::Relay { .. }
            | Self::NotFound { .. }
            | Self::ProviderTimeout { .. } => true,
            Self::AllRelaysFailed(inner) => inner.iter().all(Self::is_fetch_absence),
            Self::InvalidArg(_) | Self::Busy | Self::Io(_) => false,
        }
    }

    /// Flatten nested `AllRelaysFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllRelaysFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

impl From<std::io::Error> for YardstickError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
