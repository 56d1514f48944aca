//! Discrete wavelet transform with half-sample symmetric extension.

use tracing::debug;

use crate::error::WaveletError;
use crate::filter::Wavelet;

/// Maximum useful decomposition level for a signal of `data_len` samples and
/// a filter of `filter_len` taps.
///
/// Returns `⌊log2(data_len / (filter_len - 1))⌋`, or 0 when the signal is
/// shorter than `filter_len - 1`.
///
/// # Example
///
/// ```ignore
/// use kairos_wavelet::{Wavelet, dwt_max_level};
///
/// assert_eq!(dwt_max_level(256, Wavelet::Sym4.length()), 5);
/// ```
pub fn dwt_max_level(data_len: usize, filter_len: usize) -> usize {
    if filter_len < 2 || data_len < filter_len - 1 {
        return 0;
    }
    (data_len / (filter_len - 1)).ilog2() as usize
}

/// Sample at signed index `i` of the half-sample symmetric extension of `x`.
///
/// `x[-1] = x[0]`, `x[n] = x[n-1]`; indices further out reflect again.
#[inline]
fn symmetric(x: &[f64], i: isize) -> f64 {
    let n = x.len() as isize;
    let m = i.rem_euclid(2 * n);
    let idx = if m < n { m } else { 2 * n - 1 - m };
    x[idx as usize]
}

/// Single-level forward DWT.
///
/// Returns `(approximation, detail)`, each of length `⌊(N + F - 1) / 2⌋`.
/// An empty input yields two empty arrays.
pub fn dwt(data: &[f64], wavelet: Wavelet) -> (Vec<f64>, Vec<f64>) {
    if data.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let lo = wavelet.dec_lo();
    let hi = wavelet.dec_hi();
    let f = lo.len();
    let out_len = (data.len() + f - 1) / 2;

    let mut approx = Vec::with_capacity(out_len);
    let mut detail = Vec::with_capacity(out_len);
    for k in 0..out_len {
        let centre = (2 * k + 1) as isize;
        let mut a = 0.0;
        let mut d = 0.0;
        for j in 0..f {
            let v = symmetric(data, centre - j as isize);
            a += lo[j] * v;
            d += hi[j] * v;
        }
        approx.push(a);
        detail.push(d);
    }
    (approx, detail)
}

/// Single-level inverse DWT.
///
/// Returns `2N - F + 2` samples for `N` coefficients per band.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::CoefficientMismatch`] | bands differ in length |
/// | [`WaveletError::SeriesTooShort`] | too few coefficients for the filter |
pub fn idwt(
    approximation: &[f64],
    detail: &[f64],
    wavelet: Wavelet,
) -> Result<Vec<f64>, WaveletError> {
    if approximation.len() != detail.len() {
        return Err(WaveletError::CoefficientMismatch {
            approximation: approximation.len(),
            detail: detail.len(),
        });
    }
    let lo = wavelet.rec_lo();
    let hi = wavelet.rec_hi();
    let f = lo.len();
    let n = approximation.len();
    let min = f.div_ceil(2);
    if n < min {
        return Err(WaveletError::SeriesTooShort { len: n, min });
    }

    let out_len = 2 * n + 2 - f;
    let mut out = Vec::with_capacity(out_len);
    for o in 0..out_len {
        let mut acc = 0.0;
        // Only taps landing on even (non-zero) upsampled positions contribute.
        for j in ((o % 2)..f).step_by(2) {
            let pos = o + f - 2 - j;
            let i = pos / 2;
            if i < n {
                acc += lo[j] * approximation[i] + hi[j] * detail[i];
            }
        }
        out.push(acc);
    }
    Ok(out)
}

/// Multi-level DWT coefficients.
///
/// Holds the coarsest approximation and the detail arrays ordered from the
/// coarsest level to the finest.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveletCoeffs {
    approximation: Vec<f64>,
    details: Vec<Vec<f64>>,
    wavelet: Wavelet,
}

impl WaveletCoeffs {
    /// Assembles a coefficient set from its parts.
    pub fn new(approximation: Vec<f64>, details: Vec<Vec<f64>>, wavelet: Wavelet) -> Self {
        Self {
            approximation,
            details,
            wavelet,
        }
    }

    /// Number of decomposition levels.
    pub fn level(&self) -> usize {
        self.details.len()
    }

    /// Coarsest approximation coefficients.
    pub fn approximation(&self) -> &[f64] {
        &self.approximation
    }

    /// Detail coefficients, coarsest level first.
    pub fn details(&self) -> &[Vec<f64>] {
        &self.details
    }

    /// Mutable access to the detail arrays, coarsest level first.
    pub fn details_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.details
    }

    /// Detail coefficients at decomposition level `level` (1 = finest).
    ///
    /// Returns `None` if the level is out of range.
    pub fn detail(&self, level: usize) -> Option<&[f64]> {
        if level == 0 || level > self.details.len() {
            return None;
        }
        self.details
            .get(self.details.len() - level)
            .map(|v| v.as_slice())
    }

    /// Wavelet used for the decomposition.
    pub fn wavelet(&self) -> Wavelet {
        self.wavelet
    }

    /// Flattens into `[cA_n, cD_n, ..., cD_1]`.
    pub fn into_arrays(self) -> Vec<Vec<f64>> {
        let mut out = Vec::with_capacity(self.details.len() + 1);
        out.push(self.approximation);
        out.extend(self.details);
        out
    }
}

/// Multi-level forward DWT to `level` levels.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::SeriesTooShort`] | empty input |
/// | [`WaveletError::LevelTooHigh`] | `level` exceeds [`dwt_max_level`] |
pub fn wavedec(
    data: &[f64],
    wavelet: Wavelet,
    level: usize,
) -> Result<WaveletCoeffs, WaveletError> {
    if data.is_empty() {
        return Err(WaveletError::SeriesTooShort { len: 0, min: 1 });
    }
    let max = dwt_max_level(data.len(), wavelet.length());
    if level > max {
        return Err(WaveletError::LevelTooHigh {
            requested: level,
            max,
            len: data.len(),
        });
    }

    let mut approximation = data.to_vec();
    let mut details = Vec::with_capacity(level);
    for _ in 0..level {
        let (a, d) = dwt(&approximation, wavelet);
        approximation = a;
        details.push(d);
    }
    details.reverse();

    debug!(
        len = data.len(),
        level,
        wavelet = %wavelet,
        approximation = approximation.len(),
        "wavedec"
    );
    Ok(WaveletCoeffs::new(approximation, details, wavelet))
}

/// Multi-level inverse DWT.
///
/// When an intermediate approximation is one sample longer than the next
/// detail array, its last sample is dropped before the inverse step.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::CoefficientMismatch`] | bands cannot be paired |
/// | [`WaveletError::SeriesTooShort`] | a level has too few coefficients |
pub fn waverec(coeffs: &WaveletCoeffs) -> Result<Vec<f64>, WaveletError> {
    let wavelet = coeffs.wavelet();
    let mut approximation = coeffs.approximation().to_vec();
    for detail in coeffs.details() {
        if approximation.len() == detail.len() + 1 {
            approximation.pop();
        }
        approximation = idwt(&approximation, detail, wavelet)?;
    }
    Ok(approximation)
}

/// Capability for a multi-level wavelet transform and its inverse.
///
/// [`Dwt`] is the default implementation; denoising and plotting are
/// written against this trait.
pub trait WaveletTransform {
    /// Decomposes `data` into `level` levels.
    fn forward(
        &self,
        data: &[f64],
        wavelet: Wavelet,
        level: usize,
    ) -> Result<WaveletCoeffs, WaveletError>;

    /// Reconstructs a signal from its coefficients.
    fn inverse(&self, coeffs: &WaveletCoeffs) -> Result<Vec<f64>, WaveletError>;

    /// Deepest level [`WaveletTransform::forward`] accepts for `len` samples.
    fn max_level(&self, len: usize, wavelet: Wavelet) -> usize {
        dwt_max_level(len, wavelet.length())
    }
}

/// Decimated DWT with half-sample symmetric boundary extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dwt;

impl WaveletTransform for Dwt {
    fn forward(
        &self,
        data: &[f64],
        wavelet: Wavelet,
        level: usize,
    ) -> Result<WaveletCoeffs, WaveletError> {
        wavedec(data, wavelet, level)
    }

    fn inverse(&self, coeffs: &WaveletCoeffs) -> Result<Vec<f64>, WaveletError> {
        waverec(coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp_with_wiggle(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                0.05 * t + (t * 0.7).sin() + 0.3 * (t * 2.3).cos()
            })
            .collect()
    }

    #[test]
    fn max_level_sym4_256() {
        assert_eq!(dwt_max_level(256, 8), 5);
    }

    #[test]
    fn max_level_haar_256() {
        assert_eq!(dwt_max_level(256, 2), 8);
    }

    #[test]
    fn max_level_short_series() {
        assert_eq!(dwt_max_level(6, 8), 0);
        assert_eq!(dwt_max_level(7, 8), 0);
        assert_eq!(dwt_max_level(0, 2), 0);
    }

    #[test]
    fn symmetric_extension_indices() {
        let x = [1.0, 2.0, 3.0];
        assert_eq!(symmetric(&x, -1), 1.0);
        assert_eq!(symmetric(&x, -2), 2.0);
        assert_eq!(symmetric(&x, 3), 3.0);
        assert_eq!(symmetric(&x, 4), 2.0);
        assert_eq!(symmetric(&x, 6), 1.0);
    }

    #[test]
    fn dwt_output_lengths() {
        for w in Wavelet::ALL {
            for n in [9, 20, 21, 64] {
                let (a, d) = dwt(&ramp_with_wiggle(n), w);
                let expected = (n + w.length() - 1) / 2;
                assert_eq!(a.len(), expected, "{w} n={n}");
                assert_eq!(d.len(), expected, "{w} n={n}");
            }
        }
    }

    #[test]
    fn dwt_of_empty() {
        let (a, d) = dwt(&[], Wavelet::Sym4);
        assert!(a.is_empty());
        assert!(d.is_empty());
    }

    #[test]
    fn haar_dwt_matches_pairwise_sums() {
        let x = [1.0, 3.0, 5.0, 11.0];
        let (a, d) = dwt(&x, Wavelet::Haar);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(a[0], 4.0 * s, epsilon = 1e-12);
        assert_abs_diff_eq!(a[1], 16.0 * s, epsilon = 1e-12);
        assert_abs_diff_eq!(d[0], -2.0 * s, epsilon = 1e-12);
        assert_abs_diff_eq!(d[1], -6.0 * s, epsilon = 1e-12);
    }

    #[test]
    fn constant_signal_has_zero_detail() {
        let x = vec![3.5; 40];
        for w in Wavelet::ALL {
            let (_, d) = dwt(&x, w);
            for v in d {
                assert_abs_diff_eq!(v, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn single_level_perfect_reconstruction() {
        for w in Wavelet::ALL {
            for n in [20, 64] {
                let x = ramp_with_wiggle(n);
                let (a, d) = dwt(&x, w);
                let y = idwt(&a, &d, w).unwrap();
                assert_eq!(y.len(), n);
                for (p, q) in x.iter().zip(&y) {
                    assert_abs_diff_eq!(p, q, epsilon = 1e-8);
                }
            }
        }
    }

    #[test]
    fn odd_length_reconstructs_with_extra_sample() {
        let x = ramp_with_wiggle(21);
        let (a, d) = dwt(&x, Wavelet::Sym4);
        let y = idwt(&a, &d, Wavelet::Sym4).unwrap();
        assert_eq!(y.len(), 22);
        for (p, q) in x.iter().zip(&y) {
            assert_abs_diff_eq!(p, q, epsilon = 1e-8);
        }
    }

    #[test]
    fn idwt_rejects_mismatched_bands() {
        let err = idwt(&[1.0, 2.0, 3.0], &[1.0, 2.0], Wavelet::Haar).unwrap_err();
        assert!(matches!(
            err,
            WaveletError::CoefficientMismatch {
                approximation: 3,
                detail: 2
            }
        ));
    }

    #[test]
    fn idwt_rejects_too_few_coefficients() {
        let err = idwt(&[1.0, 2.0], &[1.0, 2.0], Wavelet::Sym5).unwrap_err();
        assert!(matches!(err, WaveletError::SeriesTooShort { len: 2, min: 5 }));
    }

    #[test]
    fn wavedec_layout() {
        let x = ramp_with_wiggle(256);
        let coeffs = wavedec(&x, Wavelet::Sym4, 3).unwrap();
        assert_eq!(coeffs.level(), 3);
        // 256 -> 131 -> 69 -> 38
        assert_eq!(coeffs.approximation().len(), 38);
        assert_eq!(coeffs.detail(3).unwrap().len(), 38);
        assert_eq!(coeffs.detail(2).unwrap().len(), 69);
        assert_eq!(coeffs.detail(1).unwrap().len(), 131);
        assert!(coeffs.detail(0).is_none());
        assert!(coeffs.detail(4).is_none());
        let arrays = coeffs.into_arrays();
        let lens: Vec<usize> = arrays.iter().map(Vec::len).collect();
        assert_eq!(lens, vec![38, 38, 69, 131]);
    }

    #[test]
    fn wavedec_rejects_excess_level() {
        let err = wavedec(&ramp_with_wiggle(64), Wavelet::Sym4, 5).unwrap_err();
        assert!(matches!(
            err,
            WaveletError::LevelTooHigh {
                requested: 5,
                max: 3,
                len: 64
            }
        ));
    }

    #[test]
    fn wavedec_level_zero_is_identity() {
        let x = ramp_with_wiggle(5);
        let coeffs = wavedec(&x, Wavelet::Sym4, 0).unwrap();
        assert_eq!(coeffs.level(), 0);
        assert_eq!(coeffs.approximation(), x.as_slice());
        assert_eq!(waverec(&coeffs).unwrap(), x);
    }

    #[test]
    fn multilevel_perfect_reconstruction() {
        for w in Wavelet::ALL {
            for n in [100, 256, 257] {
                let x = ramp_with_wiggle(n);
                let level = dwt_max_level(n, w.length());
                let coeffs = Dwt.forward(&x, w, level).unwrap();
                let y = Dwt.inverse(&coeffs).unwrap();
                assert!(y.len() == n || y.len() == n + 1, "{w} n={n} got {}", y.len());
                for (p, q) in x.iter().zip(&y) {
                    assert_abs_diff_eq!(p, q, epsilon = 1e-7);
                }
            }
        }
    }

    #[test]
    fn trait_max_level_matches_free_function() {
        assert_eq!(Dwt.max_level(1000, Wavelet::Db2), dwt_max_level(1000, 4));
    }
}
