//! Yardstick measures how stock tickers performed against a set of benchmarks.
//!
//! Overview
//! - Fetches close-price series through any [`ChartProvider`] (the relay
//!   fetcher for live data, the mock providers for tests and demos).
//! - Derives percentage returns for seven fixed look-back periods: 1 day,
//!   1 week, 1 month, 3 months, 6 months, 1 year and year-to-date.
//! - Runs user tickers and then benchmarks one at a time with a pause between
//!   them, producing a [`ComparisonReport`].
//!
//! Key behaviors
//! - Periods that cannot be computed (missing series, null or zero anchor)
//!   are `None` in the record and render as `--`; they never become `0.00%`.
//! - A failed fetch only blanks the periods it feeds. A ticker is marked
//!   failed only when the provider rejects its requests outright.
//! - One run at a time per instance; a concurrent call gets `Busy`.
//! - "Now" comes from an injectable [`Clock`], so identical inputs produce
//!   identical records.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use yardstick::{ComparisonRequest, Yardstick};
//! use yardstick_relay::RelayFetcher;
//!
//! let fetcher = Arc::new(RelayFetcher::builder().build()?);
//! let ys = Yardstick::builder().with_provider(fetcher).build()?;
//! let report = ys.compare(&ComparisonRequest::new(["AAPL", "MSFT"])?).await?;
//! println!("loaded {}/{}", report.succeeded(), report.total());
//! ```
//!
//! See `yardstick/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod calculator;
mod compare;
pub(crate) mod core;

pub use compare::ComparisonRequest;
pub use core::{Yardstick, YardstickBuilder};

// Re-export core types for convenience
pub use yardstick_core::{
    Benchmark, ChartProvider, Clock, ComparisonReport, ComparisonRow, FixedClock,
    PerformanceRecord, Period, PriceSeries, RelayConfig, RetryConfig, RowOutcome, SystemClock,
    TickerRequest, TickerRole, YardstickConfig, YardstickError, format_return,
};
