//! Coefficient thresholding.

/// Soft-thresholds a single coefficient: `x * max(0, 1 - value / |x|)`.
///
/// Zero coefficients stay zero.
#[inline]
pub fn soft_threshold(x: f64, value: f64) -> f64 {
    let magnitude = x.abs();
    if magnitude == 0.0 {
        return 0.0;
    }
    x * (1.0 - value / magnitude).max(0.0)
}

/// Soft-thresholds every element of `coeffs` in place.
pub fn soft_threshold_in_place(coeffs: &mut [f64], value: f64) {
    for c in coeffs.iter_mut() {
        *c = soft_threshold(*c, value);
    }
}

/// Largest element of `coeffs`, or `None` for an empty slice.
///
/// The signed maximum is used, not the maximum magnitude.
pub(crate) fn signed_max(coeffs: &[f64]) -> Option<f64> {
    coeffs.iter().copied().reduce(f64::max)
}
