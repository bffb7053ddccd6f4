use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Tz;
use yardstick_types::Period;

use crate::timeseries::SECONDS_PER_DAY;

/// Midnight of January 1 of `now`'s year, as seen in `tz`, in Unix seconds.
#[must_use]
pub fn year_start(now: DateTime<Utc>, tz: Tz) -> i64 {
    let local = now.with_timezone(&tz);
    tz.with_ymd_and_hms(local.year(), 1, 1, 0, 0, 0)
        .earliest()
        .map_or_else(|| now.timestamp(), |d| d.timestamp())
}

/// Start of the explicit range fetched for `period`.
///
/// Returns `None` for the periods computed from the short daily series.
#[must_use]
pub fn period_start(period: Period, now: DateTime<Utc>, tz: Tz) -> Option<i64> {
    match period {
        Period::Ytd => Some(year_start(now, tz)),
        p => p
            .lookback_days()
            .map(|days| now.timestamp() - days * SECONDS_PER_DAY),
    }
}
