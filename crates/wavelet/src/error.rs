//! Error types for the kairos-wavelet crate.

/// Error type for all fallible operations in the kairos-wavelet crate.
///
/// Covers validation failures, coefficient-set inconsistencies and plot
/// rendering problems.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WaveletError {
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

    /// Returned when the requested decomposition level exceeds the maximum.
    #[error("level too high: requested {requested}, max for length {len} is {max}")]
    LevelTooHigh {
        /// Level that was requested.
        requested: usize,
        /// Maximum feasible level.
        max: usize,
        /// Length of the input series.
        len: usize,
    },

    /// Returned when an unsupported wavelet name is provided.
    #[error("unsupported wavelet: {0}")]
    UnsupportedWavelet(String),

    /// Returned when approximation and detail arrays cannot be combined.
    #[error("coefficient length mismatch: approximation {approximation}, detail {detail}")]
    CoefficientMismatch {
        /// Length of the approximation array.
        approximation: usize,
        /// Length of the detail array.
        detail: usize,
    },

    /// Returned when the plot cannot be rendered.
    #[error("plot failed: {0}")]
    PlotFailed(String),
}
