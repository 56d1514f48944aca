//! # kairos-wavelet
//!
//! Discrete wavelet transforms for load-curve inspection and denoising.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["&[f64]"] -->|"wavedec(data, wavelet, level)?"| B["WaveletCoeffs"]
//!     B -->|"waverec(&coeffs)?"| A
//!     A -->|"wavelet_filter(data, wavelet, threshold)?"| C["Vec<f64> (denoised)"]
//!     A -->|"wavelet_coeffs_plot(data, wavelet, options)?"| D["CoeffPlot"]
//!     D -->|".render_svg(path)?"| E["SVG file"]
//! ```
//!
//! ## Supported Wavelets
//!
//! | Wavelet | Length | Family |
//! |---------|--------|--------|
//! | [`Wavelet::Haar`] | 2 | Haar |
//! | [`Wavelet::Db2`] | 4 | Daubechies |
//! | [`Wavelet::Db3`] | 6 | Daubechies |
//! | [`Wavelet::Db4`] | 8 | Daubechies |
//! | [`Wavelet::Sym4`] | 8 | Symlet |
//! | [`Wavelet::Sym5`] | 10 | Symlet |
//!
//! Signals are extended half-sample symmetrically at both ends.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_wavelet::{PlotOptions, Wavelet, wavelet_coeffs_plot, wavelet_filter};
//!
//! let clean = wavelet_filter(&load, Wavelet::Sym4, 0.04)?;
//!
//! let plot = wavelet_coeffs_plot(&load, Wavelet::Sym4, PlotOptions::default())?;
//! plot.render_svg("coeffs.svg".as_ref())?;
//! ```

mod denoise;
mod dwt;
mod error;
mod filter;
mod plot;
mod series;
mod threshold;

pub use denoise::{DEFAULT_THRESHOLD, DenoiseConfig, wavelet_filter};
pub use dwt::{Dwt, WaveletCoeffs, WaveletTransform, dwt, dwt_max_level, idwt, wavedec, waverec};
pub use error::WaveletError;
pub use filter::Wavelet;
pub use plot::{CoeffPlot, PlotOptions, PlotRow, wavelet_coeffs_plot};
pub use series::{MIN_SERIES_LEN, TimeSeries};
pub use threshold::{soft_threshold, soft_threshold_in_place};
