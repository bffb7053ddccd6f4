use std::sync::Arc;

use yardstick::{ChartProvider, Clock, SystemClock, YardstickError};

/// Provider plus the clock that matches it (mock in CI when `YARDSTICK_USE_MOCK` is set).
///
/// # Errors
/// Returns an error if the live HTTP client cannot be built.
pub fn get_provider() -> Result<(Arc<dyn ChartProvider>, Arc<dyn Clock>), YardstickError> {
    if std::env::var("YARDSTICK_USE_MOCK").is_ok() {
        println!("--- (Using Mock Provider for CI) ---");
        let mock = yardstick_mock::MockChartProvider::new();
        Ok((Arc::new(mock), Arc::new(mock.clock())))
    } else {
        let fetcher = yardstick_relay::RelayFetcher::builder().build()?;
        Ok((Arc::new(fetcher), Arc::new(SystemClock)))
    }
}
