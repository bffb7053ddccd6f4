//! Re-export of the shared data transfer objects from `yardstick-types`.
// Consolidated re-exports so downstream crates can depend on `yardstick-core` only

pub use yardstick_types::{
    Benchmark, ChartRange, ChartRequest, ChartWindow, ComparisonReport, ComparisonRow, Interval,
    Period, PerformanceRecord, RelayConfig, RetryConfig, RowOutcome, TickerRequest, TickerRole,
    YardstickConfig, YardstickError, format_return,
};
