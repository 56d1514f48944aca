//! Error types for the kairos-fourier crate.

/// Error type for all fallible operations in the kairos-fourier crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FourierError {
    /// Returned when the input series is shorter than the minimum required length.
    #[error("series too short: got {len} observations, need at least {min}")]
    SeriesTooShort {
        /// Number of observations provided.
        len: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the transform backend produced the wrong number of bins.
    #[error("transform returned {got} bins for {expected} samples")]
    BinCountMismatch {
        /// Number of input samples.
        expected: usize,
        /// Number of bins returned.
        got: usize,
    },

    /// Detrending failed.
    #[error(transparent)]
    Trend(#[from] kairos_trend::TrendError),
}
