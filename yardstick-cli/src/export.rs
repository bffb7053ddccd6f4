use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use yardstick::{ComparisonReport, YardstickError};

use crate::render;

/// `benchmark_{FIRST}_{YYYY-MM-DD}.csv`, named after the first user ticker.
pub fn default_file_name(report: &ComparisonReport, now: DateTime<Utc>) -> PathBuf {
    let first = report
        .rows
        .iter()
        .find(|r| r.ticker.is_user())
        .map_or("export", |r| r.ticker.symbol());
    PathBuf::from(format!("benchmark_{first}_{}.csv", now.format("%Y-%m-%d")))
}

/// Write the comparison table as CSV: one header row, then one row per ticker.
///
/// # Errors
/// Returns `Io` if the file cannot be created or written.
pub fn write_csv(report: &ComparisonReport, path: &Path) -> Result<(), YardstickError> {
    let io = |e: csv::Error| YardstickError::Io(format!("export to {} failed: {e}", path.display()));
    let mut wtr = csv::Writer::from_path(path).map_err(io)?;
    wtr.write_record(render::headers()).map_err(io)?;
    for cells in render::rows(report) {
        wtr.write_record(&cells).map_err(io)?;
    }
    wtr.flush()?;
    Ok(())
}
