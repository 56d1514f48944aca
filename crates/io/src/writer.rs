//! CSV writers for single series and time-indexed tables.

use std::path::Path;

use csv::Writer;
use kairos_resample::TimeFrame;
use tracing::info;

use crate::error::IoError;
use crate::reader::DEFAULT_DATE_COLUMN;

/// Timestamp format used when writing tables.
pub const WRITE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_value(v: f64) -> String {
    if v.is_nan() { String::new() } else { v.to_string() }
}

/// Writes one column of values under `header`. NaN is written as an empty
/// field.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created or written.
pub fn write_series(path: &Path, header: &str, values: &[f64]) -> Result<(), IoError> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record([header])?;
    for &v in values {
        wtr.write_record([format_value(v)])?;
    }
    wtr.flush().map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), rows = values.len(), "series written");
    Ok(())
}

/// Writes a table with a leading `Date` column.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created or written.
pub fn write_frame(path: &Path, frame: &TimeFrame) -> Result<(), IoError> {
    let mut wtr = Writer::from_path(path)?;
    let mut header = vec![DEFAULT_DATE_COLUMN.to_string()];
    header.extend(frame.column_names().map(str::to_string));
    wtr.write_record(&header)?;

    let columns: Vec<&[f64]> = frame.columns().map(|(_, c)| c).collect();
    for (row, ts) in frame.index().iter().enumerate() {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(ts.format(WRITE_DATE_FORMAT).to_string());
        record.extend(columns.iter().map(|c| format_value(c[row])));
        wtr.write_record(&record)?;
    }
    wtr.flush().map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })?;
    info!(
        path = %path.display(),
        rows = frame.len(),
        columns = frame.width(),
        "table written"
    );
    Ok(())
}
