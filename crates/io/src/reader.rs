//! CSV readers for single series and time-indexed tables.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use kairos_resample::TimeFrame;
use tracing::{debug, info};

use crate::error::IoError;

/// Default name of the timestamp column.
pub const DEFAULT_DATE_COLUMN: &str = "Date";

/// Timestamp formats tried in order by default.
pub const DEFAULT_DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
];

/// Configuration for reading a time-indexed CSV table.
///
/// The [`Default`] implementation reads every numeric column next to a
/// `Date` timestamp column.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    date_column: String,
    formats: Vec<String>,
    columns: Option<Vec<String>>,
    delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.into(),
            formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            columns: None,
            delimiter: b',',
        }
    }
}

impl ReadOptions {
    /// Set the timestamp column name.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Replace the accepted timestamp formats (`chrono` strftime syntax).
    pub fn with_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Read only these columns, in this order. Each must parse as numbers.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Timestamp column name.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// Accepted timestamp formats.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Parses `text` with the first matching format.
    ///
    /// Date-only formats resolve to midnight.
    pub fn parse_timestamp(&self, text: &str) -> Option<NaiveDateTime> {
        self.formats.iter().find_map(|fmt| {
            NaiveDateTime::parse_from_str(text, fmt)
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(text, fmt)
                        .ok()
                        .map(|d| d.and_time(NaiveTime::MIN))
                })
        })
    }
}

/// Parses a numeric field; an empty field is a missing value (NaN).
fn parse_number(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(f64::NAN);
    }
    text.parse().ok()
}

fn load(path: &Path, delimiter: u8) -> Result<(StringRecord, Vec<StringRecord>), IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_path(path)?;
    let headers = rdr.headers()?.clone();
    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
    Ok((headers, records))
}

fn column_position(headers: &StringRecord, name: &str, path: &Path) -> Result<usize, IoError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

fn parse_column(records: &[StringRecord], idx: usize, name: &str) -> Result<Vec<f64>, IoError> {
    records
        .iter()
        .enumerate()
        .map(|(row, rec)| {
            let field = rec.get(idx).unwrap_or("");
            parse_number(field).ok_or_else(|| IoError::InvalidValue {
                column: name.to_string(),
                row: row + 1,
                value: field.to_string(),
            })
        })
        .collect()
}

/// Reads one numeric column from a CSV file with a header row.
///
/// Empty fields become NaN.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::Csv`] | malformed CSV |
/// | [`IoError::MissingColumn`] | no header named `column` |
/// | [`IoError::InvalidValue`] | a field is not a number |
pub fn read_series(path: &Path, column: &str) -> Result<Vec<f64>, IoError> {
    let (headers, records) = load(path, b',')?;
    let idx = column_position(&headers, column, path)?;
    let values = parse_column(&records, idx, column)?;
    debug!(path = %path.display(), column, rows = values.len(), "series read");
    Ok(values)
}

/// Reads a time-indexed table.
///
/// Without an explicit column list every column whose non-empty fields all
/// parse as numbers is kept; other columns are skipped.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::Csv`] | malformed CSV |
/// | [`IoError::MissingColumn`] | timestamp or requested column absent |
/// | [`IoError::InvalidTime`] | a timestamp matches no format |
/// | [`IoError::InvalidValue`] | a requested column has a non-numeric field |
pub fn read_frame(path: &Path, options: &ReadOptions) -> Result<TimeFrame, IoError> {
    let (headers, records) = load(path, options.delimiter)?;
    let date_idx = column_position(&headers, &options.date_column, path)?;

    let index = records
        .iter()
        .enumerate()
        .map(|(row, rec)| {
            let field = rec.get(date_idx).unwrap_or("");
            options
                .parse_timestamp(field)
                .ok_or_else(|| IoError::InvalidTime {
                    row: row + 1,
                    value: field.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut frame = TimeFrame::new(index);
    match &options.columns {
        Some(columns) => {
            for name in columns {
                let idx = column_position(&headers, name, path)?;
                frame.push_column(name.as_str(), parse_column(&records, idx, name)?)?;
            }
        }
        None => {
            for (idx, name) in headers.iter().enumerate() {
                if idx == date_idx {
                    continue;
                }
                match parse_column(&records, idx, name) {
                    Ok(values) => frame.push_column(name, values)?,
                    Err(_) => debug!(column = name, "skipping non-numeric column"),
                }
            }
        }
    }

    info!(
        path = %path.display(),
        rows = frame.len(),
        columns = frame.width(),
        "table read"
    );
    Ok(frame)
}
