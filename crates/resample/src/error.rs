//! Error types for the kairos-resample crate.

/// Error type for all fallible operations in the kairos-resample crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResampleError {
    /// Returned when the frame has no rows.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when a column length does not match the time index.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched column.
        field: String,
        /// Length of the time index.
        expected: usize,
        /// Length of the column.
        got: usize,
    },

    /// Returned when a required column is absent.
    #[error("missing column: {name}")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },

    /// Returned when a column name is added twice.
    #[error("duplicate column: {name}")]
    DuplicateColumn {
        /// Name of the duplicated column.
        name: String,
    },

    /// Returned when a resample rule cannot be parsed.
    #[error("invalid resample rule {rule:?}: {reason}")]
    InvalidRule {
        /// The rule as given.
        rule: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an aggregation name is not recognised.
    #[error("unknown aggregation: {0}")]
    UnknownAggregation(String),

    /// Returned when a quantile probability lies outside `[0, 1]`.
    #[error("quantile probability {p} outside [0, 1]")]
    InvalidQuantile {
        /// The offending probability.
        p: f64,
    },

    /// Returned when no column aggregations were requested.
    #[error("aggregation spec is empty")]
    EmptySpec,
}
