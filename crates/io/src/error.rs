//! Error types for kairos-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the kairos-io crate.
///
/// Covers missing files, CSV syntax problems, absent columns, values and
/// timestamps that cannot be parsed, and frame construction failures.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV reader or writer.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a field cannot be parsed as a number.
    #[error("invalid value {value:?} in column '{column}' at row {row}")]
    InvalidValue {
        /// Column holding the field.
        column: String,
        /// 1-based data row.
        row: usize,
        /// Raw field text.
        value: String,
    },

    /// Returned when a timestamp matches none of the accepted formats.
    #[error("invalid time {value:?} at row {row}")]
    InvalidTime {
        /// 1-based data row.
        row: usize,
        /// Raw field text.
        value: String,
    },

    /// Wraps a table construction error.
    #[error(transparent)]
    Frame(#[from] kairos_resample::ResampleError),
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
