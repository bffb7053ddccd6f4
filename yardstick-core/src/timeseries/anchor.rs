//! Anchor rules for the periods computed from the short (one month, daily) series.
//!
//! Each helper returns the finished percentage, or `None` when the series is
//! too short, the anchor is missing or zero, or the latest close is null.
//! The latest close is always the close of the last point in the series.

use crate::series::PriceSeries;
use crate::timeseries::SECONDS_PER_DAY;
use crate::timeseries::returns::percent_change;

fn latest(series: &PriceSeries) -> Option<f64> {
    series.last().and_then(|p| p.usable_close())
}

/// 1-day return: last close against the second-to-last close.
#[must_use]
pub fn one_day(series: &PriceSeries) -> Option<f64> {
    let pts = series.points();
    if pts.len() < 2 {
        return None;
    }
    let anchor = pts[pts.len() - 2].usable_close();
    percent_change(latest(series), anchor)
}

/// The point used as the 1-week anchor.
///
/// Scans backward for the last point at or before `now - 7 days`; when the
/// series does not reach that far back, the earliest point is used.
#[must_use]
pub fn one_week_anchor(series: &PriceSeries, now: i64) -> Option<f64> {
    let cutoff = now - 7 * SECONDS_PER_DAY;
    series
        .at_or_before(cutoff)
        .or_else(|| series.points().first())
        .and_then(|p| p.usable_close())
}

/// 1-week return measured against [`one_week_anchor`].
#[must_use]
pub fn one_week(series: &PriceSeries, now: i64) -> Option<f64> {
    percent_change(latest(series), one_week_anchor(series, now))
}

/// 1-month return: last close against the first non-null close of the rolling month.
#[must_use]
pub fn one_month(series: &PriceSeries) -> Option<f64> {
    percent_change(latest(series), series.first_close())
}
