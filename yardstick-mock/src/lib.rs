//! yardstick-mock
//!
//! Chart providers for CI-safe tests and demos:
//! - [`MockChartProvider`] serves deterministic fixture series for a fixed set
//!   of symbols, anchored to [`MOCK_NOW`].
//! - [`DynamicMockProvider`] defers every call to a controller so tests can
//!   script returns, failures and hangs per symbol and request shape.
use std::time::Duration;

use async_trait::async_trait;
use yardstick_core::{ChartProvider, ChartRequest, FixedClock, PriceSeries, YardstickError};

mod dynamic;
mod fixtures;

pub use dynamic::{ChartRoute, DynamicMockController, DynamicMockProvider, MockBehavior};
pub use fixtures::SYMBOLS;

/// The instant fixture series end at: Friday 2025-06-13 20:00 UTC.
pub const MOCK_NOW: i64 = 1_749_844_800;

/// Mock provider for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Symbol `FAIL` always fails with a relay error and `TIMEOUT` fails with a
/// provider timeout after a short delay; other symbols without a fixture
/// return `NotFound`.
#[derive(Debug, Clone, Copy)]
pub struct MockChartProvider {
    now: i64,
}

impl Default for MockChartProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChartProvider {
    /// Provider whose series end at [`MOCK_NOW`].
    #[must_use]
    pub const fn new() -> Self {
        Self { now: MOCK_NOW }
    }

    /// Provider whose series end at `now` (Unix seconds).
    #[must_use]
    pub const fn ending_at(now: i64) -> Self {
        Self { now }
    }

    /// A clock frozen at the instant the fixtures end.
    #[must_use]
    pub fn clock(&self) -> FixedClock {
        FixedClock::at_timestamp(self.now)
    }

    fn maybe_fail_or_timeout(symbol: &str) -> Option<YardstickError> {
        match symbol {
            "FAIL" => Some(YardstickError::relay("yardstick-mock", "forced failure: chart")),
            "TIMEOUT" => Some(YardstickError::provider_timeout("yardstick-mock")),
            _ => None,
        }
    }
}

#[async_trait]
impl ChartProvider for MockChartProvider {
    fn name(&self) -> &'static str {
        "yardstick-mock"
    }

    async fn chart(&self, req: &ChartRequest) -> Result<PriceSeries, YardstickError> {
        let s = req.symbol();
        if let Some(e) = Self::maybe_fail_or_timeout(s) {
            if matches!(e, YardstickError::ProviderTimeout { .. }) {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            return Err(e);
        }
        fixtures::series(req, self.now)
            .ok_or_else(|| YardstickError::not_found(format!("chart for {s}")))
    }
}
