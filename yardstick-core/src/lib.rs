//! yardstick-core
//!
//! Core types, traits, and utilities shared across the yardstick workspace.
//!
//! - `types`: re-exported requests, records, configuration and errors.
//! - `series`: the close-price series returned by one chart fetch.
//! - `connector`: the `ChartProvider` trait implemented by data sources.
//! - `timeseries`: the return formula, anchor rules and period windows.
//! - `clock`: injectable "now" so computations stay deterministic.
#![warn(missing_docs)]

/// Injectable time source.
pub mod clock;
/// The `ChartProvider` trait.
pub mod connector;
/// Close-price series.
pub mod series;
/// Return, anchor and window utilities.
pub mod timeseries;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use connector::ChartProvider;
pub use series::{PricePoint, PriceSeries};
pub use timeseries::SECONDS_PER_DAY;
pub use timeseries::anchor::{one_day, one_month, one_week, one_week_anchor};
pub use timeseries::returns::percent_change;
pub use timeseries::window::{period_start, year_start};
pub use types::*;
