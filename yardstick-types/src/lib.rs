//! Yardstick data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod period;
mod record;
mod reports;
mod request;
mod ticker;

pub use config::{RelayConfig, RetryConfig, YardstickConfig};
pub use error::YardstickError;
pub use period::Period;
pub use record::{PerformanceRecord, format_return};
pub use reports::{ComparisonReport, ComparisonRow, RowOutcome};
pub use request::{ChartRange, ChartRequest, ChartWindow, Interval};
pub use ticker::{Benchmark, TickerRequest, TickerRole};
