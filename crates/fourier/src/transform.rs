//! Forward DFT backends and frequency grids.

use num_complex::Complex;
use rustfft::FftPlanner;

/// Capability for computing the forward discrete Fourier transform of a
/// real sequence.
///
/// The output has one complex bin per input sample, unnormalised
/// (`X_k = Σ x_t e^{-2πi k t / n}`).
pub trait ForwardTransform {
    /// Computes the forward DFT of `data`.
    fn forward(&self, data: &[f64]) -> Vec<Complex<f64>>;
}

/// Default backend built on `rustfft`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RustFftBackend;

impl ForwardTransform for RustFftBackend {
    fn forward(&self, data: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> = data.iter().map(|&x| Complex::new(x, 0.0)).collect();
        if buffer.is_empty() {
            return buffer;
        }
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);
        buffer
    }
}

/// Sample frequencies (cycles per sample) for an `n`-point DFT.
///
/// Ordered like the transform output: `[0, 1, ..., ceil(n/2)-1,
/// -floor(n/2), ..., -1] / n`.
pub fn fft_frequencies(n: usize) -> Vec<f64> {
    let nf = n as f64;
    let positive = n.div_ceil(2);
    (0..n)
        .map(|i| {
            if i < positive {
                i as f64 / nf
            } else {
                -((n - i) as f64) / nf
            }
        })
        .collect()
}
