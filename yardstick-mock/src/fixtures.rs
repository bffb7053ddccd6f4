use chrono::{DateTime, Datelike, Weekday};
use yardstick_core::{
    ChartRange, ChartRequest, ChartWindow, Interval, PricePoint, PriceSeries, SECONDS_PER_DAY,
};

/// Deterministic price path: `base * (1 + drift)^days`, where `days` counts
/// back from "now" (so the price at "now" equals `base`).
struct Profile {
    base: f64,
    drift: f64,
    /// First daily bar of every series has a null close.
    leading_gap: bool,
}

fn profile(symbol: &str) -> Option<Profile> {
    let (base, drift, leading_gap) = match symbol {
        "AAPL" => (195.0, 0.000_8, true),
        "MSFT" => (470.0, 0.001_0, false),
        "SPY" => (600.0, 0.000_4, false),
        "QQQ" => (530.0, 0.000_6, false),
        "IWM" => (210.0, -0.000_1, false),
        "EFA" => (88.0, 0.000_5, false),
        "GLD" => (310.0, 0.000_9, false),
        _ => return None,
    };
    Some(Profile {
        base,
        drift,
        leading_gap,
    })
}

/// Symbols with fixture data.
pub const SYMBOLS: &[&str] = &["AAPL", "MSFT", "SPY", "QQQ", "IWM", "EFA", "GLD"];

pub fn series(req: &ChartRequest, now: i64) -> Option<PriceSeries> {
    let p = profile(req.symbol())?;
    let (start, end) = match req.window() {
        ChartWindow::Range(ChartRange::D5) => (now - 7 * SECONDS_PER_DAY, now),
        ChartWindow::Range(_) => (now - 30 * SECONDS_PER_DAY, now),
        ChartWindow::Period { start, end } => (start, end.min(now)),
    };
    let mut stamps = match req.interval() {
        Interval::W1 => weekly(start, end),
        _ => trading_days(start, end),
    };
    if matches!(req.window(), ChartWindow::Range(ChartRange::D5)) && stamps.len() > 5 {
        stamps.drain(..stamps.len() - 5);
    }

    let points = stamps
        .iter()
        .enumerate()
        .map(|(i, &ts)| {
            let days = (ts - now).div_euclid(SECONDS_PER_DAY);
            let close = p.base * (1.0 + p.drift).powi(i32::try_from(days).unwrap_or(i32::MIN));
            let close = (close * 100.0).round() / 100.0;
            let gap = p.leading_gap && i == 0 && req.interval() == Interval::D1;
            PricePoint::new(ts, (!gap).then_some(close))
        })
        .collect();
    PriceSeries::try_new(points).ok()
}

/// Weekday timestamps stepping back one day at a time from `end`.
fn trading_days(start: i64, end: i64) -> Vec<i64> {
    let mut out = Vec::new();
    let mut ts = end;
    while ts >= start {
        let weekend = DateTime::from_timestamp(ts, 0)
            .is_some_and(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun));
        if !weekend {
            out.push(ts);
        }
        ts -= SECONDS_PER_DAY;
    }
    out.reverse();
    out
}

fn weekly(start: i64, end: i64) -> Vec<i64> {
    let mut out = Vec::new();
    let mut ts = end;
    while ts >= start {
        out.push(ts);
        ts -= 7 * SECONDS_PER_DAY;
    }
    out.reverse();
    out
}
