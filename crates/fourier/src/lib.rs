//! # kairos-fourier
//!
//! Harmonic reconstruction of load series: detrend, transform, keep the
//! lowest-frequency bins and rebuild the signal as a sum of cosines.
//!
//! ```mermaid
//! graph LR
//!     A["&[f64]"] -->|"LineFit::fit_index"| B["detrended"]
//!     B -->|"ForwardTransform::forward"| C["spectrum"]
//!     C -->|"rank by |f|, skip DC"| D["HarmonicModel"]
//!     D -->|".reconstruct(len, with_trend)"| E["Vec<f64>"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_fourier::fourier_extrapolation;
//!
//! let smooth = fourier_extrapolation(&load, 10)?;
//! assert_eq!(smooth.len(), load.len());
//! ```
//!
//! [`fourier_extrapolation`] returns the trend-free reconstruction over the
//! original indices. [`FourierExtrapolation`] adds forecasting past the end
//! of the series and optional re-addition of the trend.

mod error;
mod harmonic;
mod transform;

pub use error::FourierError;
pub use harmonic::{
    DEFAULT_HARMONICS, FourierExtrapolation, Harmonic, HarmonicModel, fourier_extrapolation,
};
pub use transform::{ForwardTransform, RustFftBackend, fft_frequencies};
