use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono_tz::Tz;
use yardstick_core::{Benchmark, ChartProvider, Clock, SystemClock, YardstickConfig, YardstickError};

/// Orchestrator that turns tickers into performance records and comparison reports.
pub struct Yardstick {
    pub(crate) provider: Arc<dyn ChartProvider>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) cfg: YardstickConfig,
    busy: AtomicBool,
}

/// Builder for constructing a `Yardstick` with custom configuration.
pub struct YardstickBuilder {
    provider: Option<Arc<dyn ChartProvider>>,
    clock: Arc<dyn Clock>,
    cfg: YardstickConfig,
}

impl Default for YardstickBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl YardstickBuilder {
    /// Create a new builder with the default configuration and the system clock.
    ///
    /// A chart provider must be registered via [`with_provider`](Self::with_provider).
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: None,
            clock: Arc::new(SystemClock),
            cfg: YardstickConfig::default(),
        }
    }

    /// Register the chart provider every fetch goes through.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn ChartProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the source of "now".
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: YardstickConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the pause inserted between consecutive tickers of a run.
    #[must_use]
    pub fn ticker_pause(mut self, pause: Duration) -> Self {
        self.cfg.ticker_pause_ms = u64::try_from(pause.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the timezone whose January 1 starts the YTD window.
    #[must_use]
    pub const fn market_timezone(mut self, tz: Tz) -> Self {
        self.cfg.market_timezone = tz;
        self
    }

    /// Replace the default benchmark list.
    #[must_use]
    pub fn benchmarks(mut self, benchmarks: Vec<Benchmark>) -> Self {
        self.cfg.benchmarks = benchmarks;
        self
    }

    /// Build the `Yardstick` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no provider has been registered.
    pub fn build(self) -> Result<Yardstick, YardstickError> {
        let Some(provider) = self.provider else {
            return Err(YardstickError::InvalidArg(
                "no chart provider registered; add one via with_provider(...)".to_string(),
            ));
        };
        Ok(Yardstick {
            provider,
            clock: self.clock,
            cfg: self.cfg,
            busy: AtomicBool::new(false),
        })
    }
}

/// Held for the duration of a run; clears the busy flag when dropped.
pub(crate) struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Yardstick {
    /// Start building a new `Yardstick` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use yardstick::Yardstick;
    /// use yardstick_relay::RelayFetcher;
    ///
    /// let fetcher = Arc::new(RelayFetcher::builder().build()?);
    /// let ys = Yardstick::builder().with_provider(fetcher).build()?;
    /// ```
    #[must_use]
    pub fn builder() -> YardstickBuilder {
        YardstickBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &YardstickConfig {
        &self.cfg
    }

    /// Name of the registered chart provider.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// True while a comparison run is in progress.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub(crate) fn acquire(&self) -> Result<BusyGuard<'_>, YardstickError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| YardstickError::Busy)?;
        Ok(BusyGuard(&self.busy))
    }
}
