use std::sync::Arc;

use async_trait::async_trait;

use crate::YardstickError;
use crate::series::PriceSeries;
use yardstick_types::ChartRequest;

/// Source of close-price series.
///
/// Implemented by the relay fetcher for live data and by the mock provider for
/// deterministic runs. Implementations own any retry policy; callers treat an
/// error as "no series available" unless it is an argument error.
#[async_trait]
pub trait ChartProvider: Send + Sync {
    /// A stable identifier used in logs and errors (e.g. "yardstick-relay").
    fn name(&self) -> &'static str;

    /// Fetch the close-price series described by `req`.
    async fn chart(&self, req: &ChartRequest) -> Result<PriceSeries, YardstickError>;
}

#[async_trait]
impl<T: ChartProvider + ?Sized> ChartProvider for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn chart(&self, req: &ChartRequest) -> Result<PriceSeries, YardstickError> {
        (**self).chart(req).await
    }
}

impl dyn ChartProvider {
    /// Build a `ChartProvider` from a closure (tests and scripted runs).
    pub fn from_fn<F>(name: &'static str, f: F) -> Arc<dyn ChartProvider>
    where
        F: Send + Sync + 'static + Fn(&ChartRequest) -> Result<PriceSeries, YardstickError>,
    {
        struct FnChart<F> {
            name: &'static str,
            f: F,
        }
        #[async_trait]
        impl<F> ChartProvider for FnChart<F>
        where
            F: Send + Sync + 'static + Fn(&ChartRequest) -> Result<PriceSeries, YardstickError>,
        {
            fn name(&self) -> &'static str {
                self.name
            }

            async fn chart(&self, req: &ChartRequest) -> Result<PriceSeries, YardstickError> {
                (self.f)(req)
            }
        }
        Arc::new(FnChart { name, f })
    }
}
