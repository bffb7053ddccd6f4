//! Return and anchor utilities shared by the calculator and its tests.
//!
//! Modules include:
//! - `returns`: the guarded percentage-change formula
//! - `anchor`: period-specific anchor selection over a short daily series
//! - `window`: start timestamps of the explicit-range periods
/// Anchor selection for the periods derived from the short daily series.
pub mod anchor;
/// Guarded percentage-change formula.
pub mod returns;
/// Explicit-range window starts (3m, 6m, 1y, ytd).
pub mod window;

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
