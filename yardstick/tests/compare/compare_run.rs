use std::sync::{Arc, Mutex};
use std::time::Duration;

use yardstick::{
    Benchmark, ChartProvider, ComparisonRequest, FixedClock, PriceSeries, RowOutcome, TickerRole,
    Yardstick, YardstickError,
};
use yardstick_mock::{ChartRoute, DynamicMockProvider, MockBehavior};

use crate::helpers::{NOW, series, yardstick};

fn flat() -> PriceSeries {
    series(&[(1, Some(10.0)), (0, Some(10.0))])
}

#[tokio::test]
async fn rows_follow_user_then_benchmark_order() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let seen_c = Arc::clone(&seen);
    let provider = <dyn ChartProvider>::from_fn("flat", move |req| {
        let mut s = seen_c.lock().unwrap();
        if s.last().map(String::as_str) != Some(req.symbol()) {
            s.push(req.symbol().to_string());
        }
        Ok(flat())
    });
    let ys = yardstick(provider);

    let req = ComparisonRequest::new(["msft", "AAPL"]).unwrap();
    let report = ys.compare(&req).await.unwrap();

    let symbols: Vec<_> = report.rows.iter().map(|r| r.ticker.symbol()).collect();
    assert_eq!(symbols, ["MSFT", "AAPL", "SPY", "QQQ", "IWM", "EFA", "GLD"]);
    assert_eq!(*seen.lock().unwrap(), symbols);
    assert_eq!(report.rows[0].ticker.role(), TickerRole::User);
    assert_eq!(report.rows[2].ticker.role(), TickerRole::Benchmark);
    assert_eq!(report.rows[3].ticker.name(), "Nasdaq-100");
    assert_eq!((report.succeeded(), report.total()), (7, 7));
    assert!(report.all_succeeded());
    assert!(!ys.is_busy());
}

#[tokio::test]
async fn failures_stay_in_their_row() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior("GOOD", ChartRoute::Any, MockBehavior::Return(flat()))
        .await;
    ctl.set_behavior(
        "BAD",
        ChartRoute::Any,
        MockBehavior::Fail(YardstickError::InvalidArg("rejected".into())),
    )
    .await;
    // "GONE" has no behavior at all: every fetch is NotFound.
    let ys = yardstick(mock);

    let req = ComparisonRequest::new(["GOOD", "BAD", "GONE"])
        .unwrap()
        .without_benchmarks();
    let report = ys.compare(&req).await.unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.succeeded(), 2);
    assert!(!report.all_succeeded());
    assert!(report.row("GOOD").unwrap().record().unwrap().is_complete());
    assert!(matches!(
        &report.row("BAD").unwrap().outcome,
        RowOutcome::Failed(YardstickError::InvalidArg(_))
    ));
    // Absence is not failure: the row loads with every period empty.
    assert!(report.row("GONE").unwrap().record().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn pause_sits_between_tickers_only() {
    let provider = <dyn ChartProvider>::from_fn("flat", |_| Ok(flat()));
    let ys = Yardstick::builder()
        .with_provider(provider)
        .clock(Arc::new(FixedClock::at_timestamp(NOW)))
        .benchmarks(vec![Benchmark::new("SPY", "S&P 500")])
        .build()
        .unwrap();
    assert_eq!(ys.config().ticker_pause_ms, 600);

    let started = tokio::time::Instant::now();
    let report = ys
        .compare(&ComparisonRequest::new(["AAA", "BBB"]).unwrap())
        .await
        .unwrap();
    assert_eq!(report.total(), 3);
    assert_eq!(started.elapsed(), Duration::from_millis(1_200));
}

#[tokio::test]
async fn concurrent_run_is_rejected_while_busy() {
    let (mock, ctl) = DynamicMockProvider::new_with_controller("scripted");
    ctl.set_behavior("SLOW", ChartRoute::Any, MockBehavior::Hang)
        .await;
    let ys = Arc::new(yardstick(mock));

    let ys_bg = Arc::clone(&ys);
    let first = tokio::spawn(async move {
        let req = ComparisonRequest::new(["SLOW"]).unwrap();
        ys_bg.compare(&req).await
    });
    while !ys.is_busy() {
        tokio::task::yield_now().await;
    }

    let err = ys
        .compare(&ComparisonRequest::new(["OTHER"]).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, YardstickError::Busy);

    first.abort();
    assert!(first.await.unwrap_err().is_cancelled());
    assert!(!ys.is_busy());

    ctl.set_behavior("SLOW", ChartRoute::Any, MockBehavior::Return(flat()))
        .await;
    let report = ys
        .compare(&ComparisonRequest::new(["SLOW"]).unwrap().without_benchmarks())
        .await
        .unwrap();
    assert_eq!(report.succeeded(), 1);
}
