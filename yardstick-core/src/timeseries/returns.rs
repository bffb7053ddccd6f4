/// Percentage return from `anchor` to `current`.
///
/// Computed as `(current - anchor) / anchor * 100` and only when both prices
/// are present and finite and the anchor is non-zero. The result is never
/// rounded, interpolated or annualized.
#[must_use]
pub fn percent_change(current: Option<f64>, anchor: Option<f64>) -> Option<f64> {
    let (current, anchor) = (current?, anchor?);
    if !current.is_finite() || !anchor.is_finite() || anchor == 0.0 {
        return None;
    }
    let pct = (current - anchor) / anchor * 100.0;
    pct.is_finite().then_some(pct)
}
