use std::sync::Arc;

use yardstick::{ChartProvider, FixedClock, PriceSeries, Yardstick};
use yardstick_core::{PricePoint, SECONDS_PER_DAY};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Frozen "now" for scripted runs: 2025-06-13T20:00:00Z (a Friday).
pub const NOW: i64 = 1_749_844_800;
pub const DAY: i64 = SECONDS_PER_DAY;

/// Build a series from `(days before NOW, close)` pairs, oldest first.
pub fn series(points: &[(i64, Option<f64>)]) -> PriceSeries {
    let pts = points
        .iter()
        .map(|&(days_ago, close)| PricePoint::new(NOW - days_ago * DAY, close))
        .collect();
    PriceSeries::try_new(pts).unwrap()
}

/// Orchestrator over `provider` with the clock frozen at [`NOW`] and no pause.
pub fn yardstick(provider: Arc<dyn ChartProvider>) -> Yardstick {
    Yardstick::builder()
        .with_provider(provider)
        .clock(Arc::new(FixedClock::at_timestamp(NOW)))
        .ticker_pause(std::time::Duration::ZERO)
        .build()
        .unwrap()
}

/// `(current - anchor) / anchor * 100`, the figure every period should report.
pub fn pct(current: f64, anchor: f64) -> f64 {
    (current - anchor) / anchor * 100.0
}

pub fn assert_pct(got: Option<f64>, want: f64) {
    let got = got.unwrap_or_else(|| panic!("expected {want}, got None"));
    assert!((got - want).abs() < 1e-9, "expected {want}, got {got}");
}
