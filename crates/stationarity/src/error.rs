//! Error types for the kairos-stationarity crate.

/// Error type for all fallible operations in the kairos-stationarity crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StationarityError {
    /// Returned when the series is too short for the test regression.
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

    /// Returned when the test statistic is undefined (e.g. constant series).
    #[error("{test} statistic undefined: series has no variation")]
    Degenerate {
        /// Short name of the test.
        test: &'static str,
    },

    /// Returned when the significance level lies outside `(0, 1)`.
    #[error("significance {0} outside (0, 1)")]
    InvalidSignificance(f64),

    /// Regression failure inside the Dickey-Fuller fit.
    #[error(transparent)]
    Regression(#[from] kairos_trend::TrendError),
}
