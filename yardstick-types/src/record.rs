//! Per-ticker percentage returns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::period::Period;

/// Percentage returns keyed by [`Period`].
///
/// A missing entry means the return could not be computed (no data, failed
/// fetch, unusable anchor). It is distinct from a zero return. Values are
/// stored unrounded; rounding happens only in [`format_return`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceRecord {
    values: BTreeMap<Period, f64>,
}

impl PerformanceRecord {
    /// Empty record: every period unavailable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return for `period`, if computed.
    #[must_use]
    pub fn get(&self, period: Period) -> Option<f64> {
        self.values.get(&period).copied()
    }

    /// Store or clear the return for `period`.
    ///
    /// Non-finite values are treated as unavailable.
    pub fn set(&mut self, period: Period, value: Option<f64>) {
        match value {
            Some(v) if v.is_finite() => {
                self.values.insert(period, v);
            }
            _ => {
                self.values.remove(&period);
            }
        }
    }

    /// Iterate every period in display order with its optional value.
    pub fn iter(&self) -> impl Iterator<Item = (Period, Option<f64>)> + '_ {
        Period::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// Number of periods with a value.
    #[must_use]
    pub fn available(&self) -> usize {
        self.values.len()
    }

    /// True when no period could be computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every period has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.len() == Period::ALL.len()
    }
}

/// Render a return as `+1.23%`, `-4.56%`, or `--` when unavailable.
#[must_use]
pub fn format_return(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let sign = if v >= 0.0 { "+" } else { "" };
            format!("{sign}{v:.2}%")
        }
        _ => "--".to_string(),
    }
}
