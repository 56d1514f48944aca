//! Harmonic selection and cosine-sum reconstruction.

use std::f64::consts::PI;

use kairos_trend::LineFit;
use tracing::{debug, warn};

use crate::error::FourierError;
use crate::transform::{ForwardTransform, RustFftBackend, fft_frequencies};

/// Default number of harmonics kept by [`fourier_extrapolation`].
pub const DEFAULT_HARMONICS: usize = 10;

/// One frequency-domain component of the detrended signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Harmonic {
    /// Frequency in cycles per sample (negative for the mirrored bin).
    pub frequency: f64,
    /// Amplitude `|X_k| / n`.
    pub amplitude: f64,
    /// Phase `arg(X_k)` in radians.
    pub phase: f64,
}

impl Harmonic {
    /// Evaluates `amplitude * cos(2π f t + phase)`.
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * t + self.phase).cos()
    }
}

/// Harmonics extracted from a series together with the removed trend.
#[derive(Clone, Debug)]
pub struct HarmonicModel {
    trend: LineFit,
    harmonics: Vec<Harmonic>,
    n: usize,
}

impl HarmonicModel {
    /// The linear trend removed before the transform.
    pub fn trend(&self) -> LineFit {
        self.trend
    }

    /// Selected harmonics, lowest |frequency| first.
    pub fn harmonics(&self) -> &[Harmonic] {
        &self.harmonics
    }

    /// Length of the series the model was built from.
    pub fn series_len(&self) -> usize {
        self.n
    }

    /// Sum of the harmonics at sample index `t` (trend excluded).
    pub fn evaluate(&self, t: f64) -> f64 {
        self.harmonics.iter().map(|h| h.evaluate(t)).sum()
    }

    /// Reconstructs `len` samples starting at index 0, optionally adding the
    /// trend back.
    pub fn reconstruct(&self, len: usize, with_trend: bool) -> Vec<f64> {
        (0..len)
            .map(|t| {
                let t = t as f64;
                let seasonal = self.evaluate(t);
                if with_trend {
                    seasonal + self.trend.evaluate(t)
                } else {
                    seasonal
                }
            })
            .collect()
    }
}

/// Builder-style configuration for harmonic reconstruction.
///
/// # Example
///
/// ```ignore
/// use kairos_fourier::FourierExtrapolation;
///
/// let forecast = FourierExtrapolation::new()
///     .with_harmonics(5)
///     .with_predict(24)
///     .with_trend(true)
///     .run(&load)?;
/// ```
#[derive(Clone, Debug)]
pub struct FourierExtrapolation {
    n_harm: usize,
    n_predict: usize,
    with_trend: bool,
}

impl Default for FourierExtrapolation {
    fn default() -> Self {
        Self::new()
    }
}

impl FourierExtrapolation {
    /// Defaults: 10 harmonics, no extra samples, trend not added back.
    pub fn new() -> Self {
        Self {
            n_harm: DEFAULT_HARMONICS,
            n_predict: 0,
            with_trend: false,
        }
    }

    /// Sets the number of harmonic pairs to keep.
    pub fn with_harmonics(mut self, n_harm: usize) -> Self {
        self.n_harm = n_harm;
        self
    }

    /// Sets how many samples to evaluate past the end of the input.
    pub fn with_predict(mut self, n_predict: usize) -> Self {
        self.n_predict = n_predict;
        self
    }

    /// Sets whether the fitted linear trend is added to the output.
    pub fn with_trend(mut self, with_trend: bool) -> Self {
        self.with_trend = with_trend;
        self
    }

    /// Returns the number of harmonic pairs.
    pub fn n_harm(&self) -> usize {
        self.n_harm
    }

    /// Returns the number of extrapolated samples.
    pub fn n_predict(&self) -> usize {
        self.n_predict
    }

    /// Returns whether the trend is added back.
    pub fn includes_trend(&self) -> bool {
        self.with_trend
    }

    /// Builds the harmonic model of `x` with the default FFT backend.
    ///
    /// # Errors
    ///
    /// See [`FourierExtrapolation::model_with`].
    pub fn model(&self, x: &[f64]) -> Result<HarmonicModel, FourierError> {
        self.model_with(&RustFftBackend, x)
    }

    /// Builds the harmonic model of `x` with an explicit transform backend.
    ///
    /// Bins are ranked by ascending |frequency| (stable, so the positive bin
    /// precedes its negative partner), the DC bin is skipped and the next
    /// `2 * n_harm` bins are kept. Fewer are kept when the series is too
    /// short to supply them.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`FourierError::SeriesTooShort`] | fewer than 2 samples |
    /// | [`FourierError::NonFiniteData`] | NaN or infinity in `x` |
    /// | [`FourierError::BinCountMismatch`] | backend returned the wrong length |
    pub fn model_with<T: ForwardTransform + ?Sized>(
        &self,
        backend: &T,
        x: &[f64],
    ) -> Result<HarmonicModel, FourierError> {
        let n = x.len();
        if n < 2 {
            return Err(FourierError::SeriesTooShort { len: n, min: 2 });
        }
        if !x.iter().all(|v| v.is_finite()) {
            return Err(FourierError::NonFiniteData);
        }

        let trend = LineFit::fit_index(x)?;
        let detrended = trend.detrend(x);
        let spectrum = backend.forward(&detrended);
        if spectrum.len() != n {
            return Err(FourierError::BinCountMismatch {
                expected: n,
                got: spectrum.len(),
            });
        }
        let freqs = fft_frequencies(n);

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| freqs[a].abs().total_cmp(&freqs[b].abs()));

        let requested = self.n_harm.saturating_mul(2);
        let available = n - 1;
        if requested > available {
            warn!(
                requested,
                available, "fewer frequency bins than requested harmonics; truncating"
            );
        }

        let nf = n as f64;
        let harmonics: Vec<Harmonic> = order
            .iter()
            .skip(1)
            .take(requested)
            .map(|&i| Harmonic {
                frequency: freqs[i],
                amplitude: spectrum[i].norm() / nf,
                phase: spectrum[i].arg(),
            })
            .collect();

        debug!(
            n,
            n_harm = self.n_harm,
            kept = harmonics.len(),
            slope = trend.slope,
            "harmonic model built"
        );

        Ok(HarmonicModel {
            trend,
            harmonics,
            n,
        })
    }

    /// Reconstructs `x.len() + n_predict` samples from the harmonic model.
    ///
    /// # Errors
    ///
    /// See [`FourierExtrapolation::model_with`].
    pub fn run(&self, x: &[f64]) -> Result<Vec<f64>, FourierError> {
        let model = self.model(x)?;
        Ok(model.reconstruct(x.len() + self.n_predict, self.with_trend))
    }
}

/// Reconstructs `x` from its `n_harm` lowest-frequency harmonic pairs.
///
/// The series is detrended with a least-squares line over the sample index,
/// transformed, and rebuilt as a sum of cosines evaluated at every original
/// index. The returned signal does **not** include the removed trend.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`FourierError::SeriesTooShort`] | fewer than 2 samples |
/// | [`FourierError::NonFiniteData`] | NaN or infinity in `x` |
#[tracing::instrument(skip(x), fields(n = x.len()))]
pub fn fourier_extrapolation(x: &[f64], n_harm: usize) -> Result<Vec<f64>, FourierError> {
    FourierExtrapolation::new().with_harmonics(n_harm).run(x)
}
