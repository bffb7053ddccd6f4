use yardstick::{Period, TickerRequest, format_return};
use yardstick_core::ChartRange;
use yardstick_mock::{ChartRoute, DynamicMockProvider, MockBehavior};

use crate::helpers::{assert_pct, pct, series, yardstick};

#[tokio::test]
async fn leading_null_close_is_skipped_not_zeroed() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior(
        "XYZ",
        ChartRoute::Range(ChartRange::M1),
        MockBehavior::Return(series(&[
            (3, None),
            (2, Some(10.0)),
            (1, Some(10.0)),
            (0, Some(11.0)),
        ])),
    )
    .await;
    let ys = yardstick(mock);

    let rec = ys.performance(&TickerRequest::user("xyz").unwrap()).await.unwrap();
    assert_pct(rec.get(Period::D1), pct(11.0, 10.0));
    assert_eq!(format_return(rec.get(Period::D1)), "+10.00%");
    // Rolling month anchors on its first non-null close.
    assert_pct(rec.get(Period::M1), pct(11.0, 10.0));
    // Series does not reach back a week, so the earliest (null) point anchors 1w.
    assert_eq!(rec.get(Period::W1), None);
    // No current-price series was scripted: the long periods stay empty.
    for p in [Period::M3, Period::M6, Period::Y1, Period::Ytd] {
        assert_eq!(rec.get(p), None, "{p}");
    }
}

#[tokio::test]
async fn one_week_anchors_on_last_point_before_cutoff() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior(
        "ABC",
        ChartRoute::Range(ChartRange::M1),
        MockBehavior::Return(series(&[
            (10, Some(50.0)),
            (8, Some(40.0)),
            (5, Some(45.0)),
            (1, Some(48.0)),
            (0, Some(60.0)),
        ])),
    )
    .await;
    let ys = yardstick(mock);

    let rec = ys.performance(&TickerRequest::user("ABC").unwrap()).await.unwrap();
    assert_pct(rec.get(Period::W1), pct(60.0, 40.0));
    assert_pct(rec.get(Period::D1), pct(60.0, 48.0));
    assert_pct(rec.get(Period::M1), pct(60.0, 50.0));
}

#[tokio::test]
async fn zero_and_null_anchors_yield_none() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior(
        "ZERO",
        ChartRoute::Range(ChartRange::M1),
        MockBehavior::Return(series(&[(9, Some(0.0)), (1, Some(0.0)), (0, Some(5.0))])),
    )
    .await;
    ctl.set_behavior(
        "LATE",
        ChartRoute::Range(ChartRange::M1),
        MockBehavior::Return(series(&[(9, Some(4.0)), (1, Some(5.0)), (0, None)])),
    )
    .await;
    let ys = yardstick(mock);

    let rec = ys.performance(&TickerRequest::user("ZERO").unwrap()).await.unwrap();
    assert_eq!(rec.get(Period::D1), None);
    assert_eq!(rec.get(Period::W1), None);
    assert_eq!(rec.get(Period::M1), None);

    // A null latest close blanks every short period.
    let rec = ys.performance(&TickerRequest::user("LATE").unwrap()).await.unwrap();
    assert!(rec.is_empty());
}

#[tokio::test]
async fn single_point_series_has_no_one_day_return() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior(
        "ONE",
        ChartRoute::Range(ChartRange::M1),
        MockBehavior::Return(series(&[(0, Some(7.0))])),
    )
    .await;
    let ys = yardstick(mock);
    let rec = ys.performance(&TickerRequest::user("ONE").unwrap()).await.unwrap();
    assert_eq!(rec.get(Period::D1), None);
    // The only point anchors both 1w and 1m against itself.
    assert_eq!(rec.get(Period::W1), Some(0.0));
    assert_eq!(rec.get(Period::M1), Some(0.0));
}
