//! Report envelopes produced by a comparison run.

use serde::{Deserialize, Serialize};

use crate::error::YardstickError;
use crate::record::PerformanceRecord;
use crate::ticker::TickerRequest;

/// Outcome of one ticker within a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowOutcome {
    /// The calculator ran; individual periods may still be unavailable.
    Loaded(PerformanceRecord),
    /// The ticker was abandoned; rendered as `Error` in every period.
    Failed(YardstickError),
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Ticker the row was computed for.
    pub ticker: TickerRequest,
    /// Record or ticker-level failure.
    pub outcome: RowOutcome,
}

impl ComparisonRow {
    /// Record, when the ticker did not fail.
    #[must_use]
    pub const fn record(&self) -> Option<&PerformanceRecord> {
        match &self.outcome {
            RowOutcome::Loaded(r) => Some(r),
            RowOutcome::Failed(_) => None,
        }
    }

    /// True when the ticker was abandoned.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, RowOutcome::Failed(_))
    }
}

/// Summary of a comparison run across user and benchmark tickers.
///
/// Rows keep the order in which tickers were processed: user tickers first,
/// then benchmarks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Table rows in processing order.
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    /// Number of tickers that did not fail.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_failed()).count()
    }

    /// Total number of tickers processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// True when every ticker succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.total()
    }

    /// Row for `symbol`, if present.
    #[must_use]
    pub fn row(&self, symbol: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.ticker.symbol() == symbol)
    }
}
