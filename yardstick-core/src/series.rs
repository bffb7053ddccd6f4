//! Close-price series produced by a single chart fetch.

use serde::{Deserialize, Serialize};

use crate::YardstickError;

/// One bar of a close-price series.
///
/// `close` is `None` for holidays, halts and other upstream gaps; it is never
/// coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Bar timestamp in Unix seconds.
    pub ts: i64,
    /// Close price, if the bar has one.
    pub close: Option<f64>,
}

impl PricePoint {
    /// Build a point.
    #[must_use]
    pub const fn new(ts: i64, close: Option<f64>) -> Self {
        Self { ts, close }
    }

    /// Close price when present and finite.
    #[must_use]
    pub fn usable_close(&self) -> Option<f64> {
        self.close.filter(|c| c.is_finite())
    }
}

/// Ordered close-price series with strictly increasing timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Empty series.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Build from points, validating strict timestamp order.
    ///
    /// # Errors
    /// Returns `Data` if two consecutive timestamps are not strictly increasing.
    pub fn try_new(points: Vec<PricePoint>) -> Result<Self, YardstickError> {
        if let Some(w) = points.windows(2).find(|w| w[0].ts >= w[1].ts) {
            return Err(YardstickError::Data(format!(
                "timestamps not strictly increasing: {} then {}",
                w[0].ts, w[1].ts
            )));
        }
        Ok(Self { points })
    }

    /// Build from the parallel timestamp and close lists of a chart payload.
    ///
    /// # Errors
    /// Returns `Data` if the lists differ in length or timestamps are unordered.
    pub fn from_parallel(timestamps: &[i64], closes: &[Option<f64>]) -> Result<Self, YardstickError> {
        if timestamps.len() != closes.len() {
            return Err(YardstickError::Data(format!(
                "{} timestamps but {} closes",
                timestamps.len(),
                closes.len()
            )));
        }
        let points = timestamps
            .iter()
            .zip(closes)
            .map(|(&ts, &close)| PricePoint::new(ts, close))
            .collect();
        Self::try_new(points)
    }

    /// All points, oldest first.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of points including null closes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Latest point, null close or not.
    #[must_use]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Oldest usable close.
    #[must_use]
    pub fn first_close(&self) -> Option<f64> {
        self.points.iter().find_map(PricePoint::usable_close)
    }

    /// Latest usable close.
    #[must_use]
    pub fn last_close(&self) -> Option<f64> {
        self.points.iter().rev().find_map(PricePoint::usable_close)
    }

    /// Latest point with `ts <= cutoff`.
    #[must_use]
    pub fn at_or_before(&self, cutoff: i64) -> Option<&PricePoint> {
        self.points.iter().rev().find(|p| p.ts <= cutoff)
    }
}
