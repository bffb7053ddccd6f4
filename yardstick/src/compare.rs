use std::collections::HashSet;

use yardstick_core::{
    Benchmark, ComparisonReport, ComparisonRow, RowOutcome, TickerRequest, YardstickError,
};

use crate::Yardstick;

/// Input of one comparison run: the user's tickers and, optionally, the
/// benchmarks to measure them against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    tickers: Vec<TickerRequest>,
    // None: use the orchestrator's configured benchmarks.
    benchmarks: Option<Vec<Benchmark>>,
}

impl ComparisonRequest {
    /// Normalize and validate the user's tickers.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no symbols are given, a symbol is invalid, or two
    /// symbols normalize to the same ticker.
    pub fn new<I, S>(symbols: I) -> Result<Self, YardstickError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tickers = Vec::new();
        let mut seen = HashSet::new();
        for raw in symbols {
            let t = TickerRequest::user(raw.as_ref())?;
            if !seen.insert(t.symbol().to_string()) {
                return Err(YardstickError::InvalidArg(format!(
                    "duplicate symbol '{}' in ticker list",
                    t.symbol()
                )));
            }
            tickers.push(t);
        }
        if tickers.is_empty() {
            return Err(YardstickError::InvalidArg(
                "please enter a ticker symbol".to_string(),
            ));
        }
        Ok(Self {
            tickers,
            benchmarks: None,
        })
    }

    /// Compare against these benchmarks instead of the configured ones.
    #[must_use]
    pub fn benchmarks(mut self, benchmarks: Vec<Benchmark>) -> Self {
        self.benchmarks = Some(benchmarks);
        self
    }

    /// Skip benchmarks entirely.
    #[must_use]
    pub fn without_benchmarks(self) -> Self {
        self.benchmarks(Vec::new())
    }

    /// User tickers in entry order.
    #[must_use]
    pub fn tickers(&self) -> &[TickerRequest] {
        &self.tickers
    }

    /// Processing order: user tickers, then each benchmark not already
    /// present, first occurrence wins.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a benchmark symbol is invalid.
    pub fn plan(&self, defaults: &[Benchmark]) -> Result<Vec<TickerRequest>, YardstickError> {
        let mut out = self.tickers.clone();
        let mut seen: HashSet<String> = out.iter().map(|t| t.symbol().to_string()).collect();
        for b in self.benchmarks.as_deref().unwrap_or(defaults) {
            let t = TickerRequest::benchmark(b)?;
            if seen.insert(t.symbol().to_string()) {
                out.push(t);
            }
        }
        Ok(out)
    }
}

impl Yardstick {
    /// Run a comparison: every user ticker, then every benchmark, one at a time
    /// with the configured pause between tickers.
    ///
    /// Per-ticker failures become `Failed` rows and never abort the run.
    ///
    /// # Errors
    /// Returns `Busy` if another run is in progress on this instance, and
    /// `InvalidArg` if a benchmark symbol is invalid.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "yardstick::compare",
            skip(self, req),
            fields(tickers = req.tickers().len()),
        )
    )]
    pub async fn compare(&self, req: &ComparisonRequest) -> Result<ComparisonReport, YardstickError> {
        let _guard = self.acquire()?;
        let plan = req.plan(&self.cfg.benchmarks)?;
        let pause = self.cfg.ticker_pause();

        let mut report = ComparisonReport::default();
        for (i, ticker) in plan.into_iter().enumerate() {
            if i > 0 && !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
            #[cfg(feature = "tracing")]
            tracing::info!(symbol = ticker.symbol(), role = ?ticker.role(), "loading");
            let outcome = match self.performance(&ticker).await {
                Ok(record) => RowOutcome::Loaded(record),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(symbol = ticker.symbol(), error = %e, "ticker failed");
                    RowOutcome::Failed(e)
                }
            };
            report.rows.push(ComparisonRow { ticker, outcome });
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            succeeded = report.succeeded(),
            total = report.total(),
            "comparison finished"
        );
        Ok(report)
    }
}
