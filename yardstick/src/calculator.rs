use yardstick_core::{
    ChartRange, ChartRequest, Interval, PerformanceRecord, Period, PriceSeries, TickerRequest,
    YardstickError, one_day, one_month, one_week, percent_change, period_start,
};

use crate::Yardstick;

/// Periods measured against an explicit-range weekly series.
const LONG_PERIODS: [Period; 4] = [Period::M3, Period::M6, Period::Y1, Period::Ytd];

impl Yardstick {
    /// Compute the performance record for one ticker.
    ///
    /// Fetch sequence: the rolling month of daily bars (1d, 1w, 1m), the last
    /// five daily bars (current price), then one weekly series per long period.
    /// Fetches that come back empty-handed leave their periods unset; the
    /// record is still returned.
    ///
    /// # Errors
    /// Returns an error only when the provider rejects a request outright
    /// (e.g. `InvalidArg`); fetch absence never fails the ticker.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "yardstick::performance",
            skip(self),
            fields(symbol = %ticker.symbol()),
        )
    )]
    pub async fn performance(
        &self,
        ticker: &TickerRequest,
    ) -> Result<PerformanceRecord, YardstickError> {
        let symbol = ticker.symbol();
        let now = self.clock.now();
        let now_ts = now.timestamp();
        let mut record = PerformanceRecord::new();

        let short = ChartRequest::range(symbol, ChartRange::M1, Interval::D1);
        if let Some(series) = self.fetch_or_absent(&short).await? {
            record.set(Period::D1, one_day(&series));
            record.set(Period::W1, one_week(&series, now_ts));
            record.set(Period::M1, one_month(&series));
        }

        let recent = ChartRequest::range(symbol, ChartRange::D5, Interval::D1);
        let current = self
            .fetch_or_absent(&recent)
            .await?
            .and_then(|s| s.last_close());
        let Some(current) = current else {
            #[cfg(feature = "tracing")]
            tracing::debug!(symbol, "no current price; skipping long periods");
            return Ok(record);
        };

        for period in LONG_PERIODS {
            let Some(start) = period_start(period, now, self.cfg.market_timezone) else {
                continue;
            };
            if start >= now_ts {
                continue;
            }
            let req = ChartRequest::period(symbol, start, now_ts, Interval::W1)?;
            if let Some(series) = self.fetch_or_absent(&req).await? {
                record.set(period, percent_change(Some(current), series.first_close()));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(symbol, available = record.available(), "performance computed");
        Ok(record)
    }

    /// Fetch a series, mapping "no data" outcomes to `None`.
    async fn fetch_or_absent(
        &self,
        req: &ChartRequest,
    ) -> Result<Option<PriceSeries>, YardstickError> {
        match self.provider.chart(req).await {
            Ok(series) => Ok(Some(series)),
            Err(e) if e.is_fetch_absence() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    symbol = req.symbol(),
                    window = ?req.window(),
                    error = %e,
                    "no series"
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
