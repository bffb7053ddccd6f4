use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use yardstick::{ChartProvider, Period, TickerRequest, YardstickError};
use yardstick_core::{ChartRange, ChartWindow};
use yardstick_mock::{ChartRoute, DynamicMockProvider, MockBehavior};

use crate::helpers::{assert_pct, pct, series, yardstick};

fn exhausted() -> YardstickError {
    YardstickError::AllRelaysFailed(vec![
        YardstickError::relay("allorigins-raw", "HTTP 500"),
        YardstickError::provider_timeout("allorigins-get"),
        YardstickError::relay("corsproxy", "missing chart result (empty)"),
    ])
}

#[tokio::test]
async fn total_fetch_failure_leaves_every_period_empty() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_c = Arc::clone(&calls);
    let provider = <dyn ChartProvider>::from_fn("down", move |_| {
        calls_c.fetch_add(1, Ordering::SeqCst);
        Err(exhausted())
    });
    let ys = yardstick(provider);

    let rec = ys.performance(&TickerRequest::user("XYZ").unwrap()).await.unwrap();
    assert!(rec.is_empty());
    assert_eq!(rec.iter().count(), Period::ALL.len());
    // Without a current price the long-period fetches are never issued.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn missing_current_price_keeps_short_periods() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior(
        "XYZ",
        ChartRoute::Range(ChartRange::M1),
        MockBehavior::Return(series(&[(2, Some(10.0)), (1, Some(10.0)), (0, Some(11.0))])),
    )
    .await;
    ctl.set_behavior(
        "XYZ",
        ChartRoute::Range(ChartRange::D5),
        MockBehavior::Return(series(&[(1, None), (0, None)])),
    )
    .await;
    let ys = yardstick(mock);

    let rec = ys.performance(&TickerRequest::user("XYZ").unwrap()).await.unwrap();
    assert_pct(rec.get(Period::D1), pct(11.0, 10.0));
    assert_eq!(rec.get(Period::Y1), None);
    assert!(
        ctl.requests()
            .await
            .iter()
            .all(|r| !matches!(r.window(), ChartWindow::Period { .. }))
    );
}

#[tokio::test]
async fn one_failed_long_period_does_not_blank_the_others() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior(
        "XYZ",
        ChartRoute::Any,
        MockBehavior::Return(series(&[(1, Some(4.0)), (0, Some(5.0))])),
    )
    .await;
    let ys = yardstick(mock);
    let first = ys.performance(&TickerRequest::user("XYZ").unwrap()).await.unwrap();
    assert!(first.is_complete());

    ctl.set_behavior(
        "XYZ",
        ChartRoute::Period,
        MockBehavior::Fail(YardstickError::not_found("chart for XYZ")),
    )
    .await;
    let rec = ys.performance(&TickerRequest::user("XYZ").unwrap()).await.unwrap();
    assert_eq!(rec.available(), 3);
    assert_eq!(rec.get(Period::M1), first.get(Period::M1));
}

#[tokio::test]
async fn argument_errors_fail_the_ticker() {
    let provider = <dyn ChartProvider>::from_fn("strict", |_| {
        Err(YardstickError::InvalidArg("symbol rejected".into()))
    });
    let ys = yardstick(provider);
    let err = ys
        .performance(&TickerRequest::user("XYZ").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, YardstickError::InvalidArg("symbol rejected".into()));
}

#[tokio::test]
async fn identical_inputs_give_identical_records() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior(
        "XYZ",
        ChartRoute::Any,
        MockBehavior::Return(series(&[(30, Some(3.0)), (6, None), (1, Some(3.3)), (0, Some(3.1))])),
    )
    .await;
    let ys = yardstick(mock);
    let t = TickerRequest::user("XYZ").unwrap();
    let a = ys.performance(&t).await.unwrap();
    let b = ys.performance(&t).await.unwrap();
    assert_eq!(a, b);
}
