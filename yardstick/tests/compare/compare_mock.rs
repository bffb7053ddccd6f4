use std::sync::Arc;
use std::time::Duration;

use yardstick::{ComparisonRequest, Period, Yardstick, format_return};
use yardstick_mock::MockChartProvider;

#[tokio::test]
async fn fixture_run_fills_every_cell() {
    let mock = MockChartProvider::new();
    let ys = Yardstick::builder()
        .with_provider(Arc::new(mock))
        .clock(Arc::new(mock.clock()))
        .ticker_pause(Duration::ZERO)
        .build()
        .unwrap();

    let report = ys
        .compare(&ComparisonRequest::new(["AAPL", "MSFT"]).unwrap())
        .await
        .unwrap();
    assert_eq!(report.total(), 7);
    assert!(report.all_succeeded());
    for row in &report.rows {
        let rec = row.record().unwrap();
        assert!(rec.is_complete(), "{} incomplete: {rec:?}", row.ticker.symbol());
    }

    // Positive drift fixtures rise over the year; IWM drifts down.
    let aapl = report.row("AAPL").unwrap().record().unwrap();
    assert!(aapl.get(Period::Y1).unwrap() > 0.0);
    let iwm = report.row("IWM").unwrap().record().unwrap();
    assert!(format_return(iwm.get(Period::Y1)).starts_with('-'));
}

#[tokio::test]
async fn fixture_failures_are_absence() {
    let mock = MockChartProvider::new();
    let ys = Yardstick::builder()
        .with_provider(Arc::new(mock))
        .clock(Arc::new(mock.clock()))
        .ticker_pause(Duration::ZERO)
        .build()
        .unwrap();
    let report = ys
        .compare(
            &ComparisonRequest::new(["FAIL", "UNKNOWN"])
                .unwrap()
                .without_benchmarks(),
        )
        .await
        .unwrap();
    assert_eq!(report.succeeded(), 2);
    assert!(report.rows.iter().all(|r| r.record().unwrap().is_empty()));
}
