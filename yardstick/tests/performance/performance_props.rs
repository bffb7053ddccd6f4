use proptest::prelude::*;
use yardstick::{Period, PriceSeries, TickerRequest};
use yardstick_core::{PricePoint, one_day, one_month, percent_change};
use yardstick_mock::{ChartRoute, DynamicMockProvider, MockBehavior};

use crate::helpers::{DAY, NOW, yardstick};

fn arb_close() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None::<f64>),
        1 => Just(Some(0.0)),
        6 => (0.01f64..5_000.0).prop_map(Some),
    ]
}

/// Daily-ish series ending exactly at `NOW`, walking backward in 1-4 day gaps.
fn arb_series() -> impl Strategy<Value = PriceSeries> {
    proptest::collection::vec((1i64..5, arb_close()), 0..30).prop_map(|steps| {
        let mut ts = NOW;
        let mut pts = Vec::with_capacity(steps.len());
        for (gap, close) in steps {
            pts.push(PricePoint::new(ts, close));
            ts -= gap * DAY;
        }
        pts.reverse();
        PriceSeries::try_new(pts).expect("generated series is ordered")
    })
}

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(fut)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn record_matches_series_math_and_is_repeatable(series in arb_series()) {
        let (first, second, expected) = block_on(async {
            let (mock, ctl) = DynamicMockProvider::new_with_controller("generated");
            ctl.set_behavior("GEN", ChartRoute::Any, MockBehavior::Return(series.clone()))
                .await;
            let ys = yardstick(mock);
            let ticker = TickerRequest::user("gen").unwrap();
            let first = ys.performance(&ticker).await.unwrap();
            let second = ys.performance(&ticker).await.unwrap();
            (first, second, series)
        });

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.get(Period::D1), one_day(&expected));
        prop_assert_eq!(first.get(Period::M1), one_month(&expected));

        // Every route serves the same series, so each long period anchors on
        // its first non-null close against the last non-null close.
        let long = percent_change(expected.last_close(), expected.first_close());
        for p in [Period::M3, Period::M6, Period::Y1, Period::Ytd] {
            prop_assert_eq!(first.get(p), long);
        }
        for (_, v) in first.iter() {
            if let Some(v) = v {
                prop_assert!(v.is_finite());
            }
        }
    }
}
