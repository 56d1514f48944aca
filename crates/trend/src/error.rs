//! Error types for the kairos-trend crate.

/// Error type for all fallible operations in the kairos-trend crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TrendError {
    /// Returned when `x` and `y` (or design and response) differ in length.
    #[error("length mismatch: x has {x} values, y has {y}")]
    LengthMismatch {
        /// Length of the abscissa / design rows.
        x: usize,
        /// Length of the response.
        y: usize,
    },

    /// Returned when there are fewer observations than coefficients.
    #[error("too few points: got {got}, need at least {min}")]
    TooFewPoints {
        /// Number of observations provided.
        got: usize,
        /// Minimum number required.
        min: usize,
    },

    /// Returned when the input contains NaN or infinity.
    #[error("non-finite value in {field}")]
    NonFiniteInput {
        /// Name of the offending input.
        field: &'static str,
    },

    /// Returned when the design matrix is rank deficient
    /// (e.g. all `x` values identical for a line fit).
    #[error("singular design matrix: column {column} is linearly dependent")]
    Singular {
        /// Index of the first dependent column.
        column: usize,
    },
}
