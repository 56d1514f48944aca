//! Wavelet shrinkage denoising.

use tracing::{debug, instrument, warn};

use crate::dwt::{Dwt, WaveletTransform};
use crate::error::WaveletError;
use crate::filter::Wavelet;
use crate::series::TimeSeries;
use crate::threshold::{signed_max, soft_threshold_in_place};

/// Default relative threshold for [`wavelet_filter`].
pub const DEFAULT_THRESHOLD: f64 = 0.04;

/// Configuration for wavelet shrinkage denoising.
///
/// # Example
///
/// ```ignore
/// use kairos_wavelet::{DenoiseConfig, Wavelet};
///
/// let config = DenoiseConfig::new(Wavelet::Db4).with_threshold(0.1);
/// let clean = config.apply(&load)?;
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DenoiseConfig {
    wavelet: Wavelet,
    threshold: f64,
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self::new(Wavelet::default())
    }
}

impl DenoiseConfig {
    /// Creates a configuration with the default threshold.
    pub fn new(wavelet: Wavelet) -> Self {
        Self {
            wavelet,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Sets the relative threshold applied to each detail level.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the wavelet.
    pub fn wavelet(&self) -> Wavelet {
        self.wavelet
    }

    /// Returns the relative threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Denoises `data` with the default [`Dwt`] backend.
    ///
    /// # Errors
    ///
    /// See [`DenoiseConfig::apply_with`].
    pub fn apply(&self, data: &[f64]) -> Result<Vec<f64>, WaveletError> {
        self.apply_with(&Dwt, data)
    }

    /// Denoises `data` with an explicit transform backend.
    ///
    /// Decomposes to the maximum level, soft-thresholds every detail array
    /// with cutoff `threshold * max(array)` and reconstructs. Odd-length
    /// input comes back one sample longer.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::SeriesTooShort`] | fewer than 2 samples |
    /// | [`WaveletError::NonFiniteData`] | NaN or infinity in `data` |
    pub fn apply_with<T: WaveletTransform + ?Sized>(
        &self,
        backend: &T,
        data: &[f64],
    ) -> Result<Vec<f64>, WaveletError> {
        let series = TimeSeries::new(data)?;
        let level = backend.max_level(series.len(), self.wavelet);
        let mut coeffs = backend.forward(series.as_slice(), self.wavelet, level)?;

        for detail in coeffs.details_mut() {
            if let Some(max) = signed_max(detail) {
                let cutoff = self.threshold * max;
                if cutoff < 0.0 {
                    warn!(cutoff, "negative cutoff, detail magnitudes will grow");
                }
                soft_threshold_in_place(detail, cutoff);
            }
        }

        let out = backend.inverse(&coeffs)?;
        debug!(
            len = data.len(),
            out = out.len(),
            level,
            threshold = self.threshold,
            "denoised"
        );
        Ok(out)
    }
}

/// Removes high-frequency noise from `data` by wavelet shrinkage.
///
/// Equivalent to `DenoiseConfig::new(wavelet).with_threshold(threshold).apply(data)`.
///
/// # Errors
///
/// See [`DenoiseConfig::apply_with`].
#[instrument(skip(data), fields(n = data.len(), wavelet = %wavelet))]
pub fn wavelet_filter(
    data: &[f64],
    wavelet: Wavelet,
    threshold: f64,
) -> Result<Vec<f64>, WaveletError> {
    DenoiseConfig::new(wavelet)
        .with_threshold(threshold)
        .apply(data)
}
