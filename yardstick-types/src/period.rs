//! The seven fixed look-back periods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::YardstickError;

/// A fixed look-back window for which a percentage return is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Period {
    /// Previous trading day.
    #[serde(rename = "1d")]
    D1,
    /// Seven calendar days.
    #[serde(rename = "1w")]
    W1,
    /// Rolling month.
    #[serde(rename = "1m")]
    M1,
    /// 90 calendar days.
    #[serde(rename = "3m")]
    M3,
    /// 182 calendar days.
    #[serde(rename = "6m")]
    M6,
    /// 365 calendar days.
    #[serde(rename = "1y")]
    Y1,
    /// Since January 1 of the current year.
    #[serde(rename = "ytd")]
    Ytd,
}

impl Period {
    /// All periods in display order.
    pub const ALL: [Self; 7] = [
        Self::D1,
        Self::W1,
        Self::M1,
        Self::M3,
        Self::M6,
        Self::Y1,
        Self::Ytd,
    ];

    /// Short key such as `1d` or `ytd`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::W1 => "1w",
            Self::M1 => "1m",
            Self::M3 => "3m",
            Self::M6 => "6m",
            Self::Y1 => "1y",
            Self::Ytd => "ytd",
        }
    }

    /// Column label such as `1 Day` or `YTD`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::D1 => "1 Day",
            Self::W1 => "1 Week",
            Self::M1 => "1 Month",
            Self::M3 => "3 Month",
            Self::M6 => "6 Month",
            Self::Y1 => "1 Year",
            Self::Ytd => "YTD",
        }
    }

    /// Calendar-day lookback for periods anchored by an explicit range fetch.
    ///
    /// Returns `None` for periods derived from the short daily series and for YTD.
    #[must_use]
    pub const fn lookback_days(self) -> Option<i64> {
        match self {
            Self::M3 => Some(90),
            Self::M6 => Some(182),
            Self::Y1 => Some(365),
            Self::D1 | Self::W1 | Self::M1 | Self::Ytd => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Period {
    type Err = YardstickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| YardstickError::InvalidArg(format!("unknown period '{s}'")))
    }
}
