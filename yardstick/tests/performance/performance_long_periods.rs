use yardstick::{Period, TickerRequest};
use yardstick_core::{ChartRange, ChartWindow, Interval};
use yardstick_mock::{ChartRoute, DynamicMockProvider, MockBehavior};

use crate::helpers::{DAY, NOW, assert_pct, pct, series, yardstick};

/// 2025-01-01T00:00:00-05:00
const NY_NEW_YEAR: i64 = 1_735_707_600;

#[tokio::test]
async fn long_periods_use_current_price_and_first_weekly_close() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior(
        "XYZ",
        ChartRoute::Range(ChartRange::M1),
        MockBehavior::Return(series(&[(20, Some(9.0)), (1, Some(11.0)), (0, Some(12.0))])),
    )
    .await;
    ctl.set_behavior(
        "XYZ",
        ChartRoute::Range(ChartRange::D5),
        MockBehavior::Return(series(&[(2, Some(11.5)), (1, Some(11.8)), (0, Some(12.5))])),
    )
    .await;
    ctl.set_behavior(
        "XYZ",
        ChartRoute::Period,
        MockBehavior::Return(series(&[(90, None), (83, Some(8.0)), (7, Some(10.0))])),
    )
    .await;
    let ys = yardstick(mock);

    let rec = ys.performance(&TickerRequest::user("XYZ").unwrap()).await.unwrap();
    // Short periods measure against the short series' own last close.
    assert_pct(rec.get(Period::D1), pct(12.0, 11.0));
    // Long periods measure the 5-day current price against the first non-null weekly close.
    for p in [Period::M3, Period::M6, Period::Y1, Period::Ytd] {
        assert_pct(rec.get(p), pct(12.5, 8.0));
    }
    assert!(rec.is_complete());
}

#[tokio::test]
async fn fetch_sequence_and_windows() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior(
        "XYZ",
        ChartRoute::Any,
        MockBehavior::Return(series(&[(1, Some(1.0)), (0, Some(2.0))])),
    )
    .await;
    let ys = yardstick(mock);
    ys.performance(&TickerRequest::user("XYZ").unwrap()).await.unwrap();

    let reqs = ctl.requests().await;
    assert_eq!(reqs.len(), 6);
    assert_eq!(reqs[0].window(), ChartWindow::Range(ChartRange::M1));
    assert_eq!(reqs[0].interval(), Interval::D1);
    assert_eq!(reqs[1].window(), ChartWindow::Range(ChartRange::D5));
    assert_eq!(reqs[1].interval(), Interval::D1);

    let starts: Vec<i64> = reqs[2..]
        .iter()
        .map(|r| match r.window() {
            ChartWindow::Period { start, end } => {
                assert_eq!(end, NOW);
                assert_eq!(r.interval(), Interval::W1);
                start
            }
            other => panic!("expected explicit window, got {other:?}"),
        })
        .collect();
    assert_eq!(
        starts,
        vec![NOW - 90 * DAY, NOW - 182 * DAY, NOW - 365 * DAY, NY_NEW_YEAR]
    );
}

#[tokio::test]
async fn ytd_follows_configured_market_timezone() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior(
        "XYZ",
        ChartRoute::Any,
        MockBehavior::Return(series(&[(1, Some(1.0)), (0, Some(2.0))])),
    )
    .await;
    let ys = yardstick::Yardstick::builder()
        .with_provider(mock)
        .clock(std::sync::Arc::new(yardstick::FixedClock::at_timestamp(NOW)))
        .market_timezone(chrono_tz::UTC)
        .build()
        .unwrap();
    ys.performance(&TickerRequest::user("XYZ").unwrap()).await.unwrap();

    let last = ctl.requests().await.pop().unwrap();
    // 2025-01-01T00:00:00Z
    assert_eq!(
        last.window(),
        ChartWindow::Period {
            start: 1_735_689_600,
            end: NOW
        }
    );
}
