//! Chart requests understood by every chart provider.

use serde::{Deserialize, Serialize};

use crate::error::YardstickError;

/// Named relative range, counted back from the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ChartRange {
    /// Last five trading days.
    D5,
    /// Last month.
    M1,
}

impl ChartRange {
    /// Upstream query value.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::D5 => "5d",
            Self::M1 => "1mo",
        }
    }
}

/// Bar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Interval {
    /// Daily bars.
    D1,
    /// Weekly bars.
    W1,
}

impl Interval {
    /// Upstream query value.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::W1 => "1wk",
        }
    }
}

/// Either a named range or an explicit `[start, end]` window in Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartWindow {
    /// Named relative range.
    Range(ChartRange),
    /// Explicit window in Unix seconds.
    Period {
        /// Inclusive start.
        start: i64,
        /// End (usually "now").
        end: i64,
    },
}

/// A logical request for a close-price series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartRequest {
    symbol: String,
    window: ChartWindow,
    interval: Interval,
}

impl ChartRequest {
    /// Request a named range.
    pub fn range(symbol: impl Into<String>, range: ChartRange, interval: Interval) -> Self {
        Self {
            symbol: symbol.into(),
            window: ChartWindow::Range(range),
            interval,
        }
    }

    /// Request an explicit window.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `start` is not strictly before `end`.
    pub fn period(
        symbol: impl Into<String>,
        start: i64,
        end: i64,
        interval: Interval,
    ) -> Result<Self, YardstickError> {
        if start >= end {
            return Err(YardstickError::InvalidArg(format!(
                "period start {start} must be before end {end}"
            )));
        }
        Ok(Self {
            symbol: symbol.into(),
            window: ChartWindow::Period { start, end },
            interval,
        })
    }

    /// Symbol the series is requested for.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Requested window.
    #[must_use]
    pub const fn window(&self) -> ChartWindow {
        self.window
    }

    /// Requested bar interval.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }
}
