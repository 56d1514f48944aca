//! Normalization and descriptive statistics for load series.
//!
//! Min-max scaling is deliberately unchecked: callers pass bounds with
//! `max != min`, otherwise every output is non-finite.

/// Lower quantile used for confidence bands (2.5 %).
pub const LOWER_BAND_P: f64 = 0.025;

/// Upper quantile used for confidence bands (97.5 %).
pub const UPPER_BAND_P: f64 = 0.975;

/// Scales a single value into `[0, 1]` given explicit bounds.
#[inline]
pub fn normalize_value(value: f64, max: f64, min: f64) -> f64 {
    (value - min) / (max - min)
}

/// Inverse of [`normalize_value`].
#[inline]
pub fn denormalize_value(value: f64, max: f64, min: f64) -> f64 {
    value * (max - min) + min
}

/// Min-max scales every element: `(x - min) / (max - min)`.
pub fn normalize(data: &[f64], max: f64, min: f64) -> Vec<f64> {
    data.iter().map(|&x| normalize_value(x, max, min)).collect()
}

/// Undoes [`normalize`]: `x * (max - min) + min`.
pub fn denormalize(data: &[f64], max: f64, min: f64) -> Vec<f64> {
    data.iter().map(|&x| denormalize_value(x, max, min)).collect()
}

/// Observed bounds of a series, for normalize/denormalize round trips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMax {
    /// Largest finite value.
    pub max: f64,
    /// Smallest finite value.
    pub min: f64,
}

impl MinMax {
    /// Computes bounds over the finite values of `data`.
    ///
    /// Returns `None` if `data` has no finite values.
    pub fn from_data(data: &[f64]) -> Option<Self> {
        let mut finite = data.iter().copied().filter(|v| v.is_finite());
        let first = finite.next()?;
        let (min, max) = finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { max, min })
    }

    /// Returns `true` if the bounds can be used for scaling (`max != min`).
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Normalizes `data` with these bounds.
    pub fn normalize(&self, data: &[f64]) -> Vec<f64> {
        normalize(data, self.max, self.min)
    }

    /// Denormalizes `data` with these bounds.
    pub fn denormalize(&self, data: &[f64]) -> Vec<f64> {
        denormalize(data, self.max, self.min)
    }
}

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Linear-interpolation quantile (Hyndman & Fan type 7).
///
/// **Expects pre-sorted input** (caller's responsibility). `p` is clamped
/// to `[0, 1]`, so out-of-range levels return the minimum or maximum.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let p = p.clamp(0.0, 1.0);
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Quantile of unsorted data, ignoring NaN. Returns NaN if nothing remains.
pub fn quantile(data: &[f64], p: f64) -> f64 {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(f64::total_cmp);
    quantile_type7(&sorted, p)
}

/// 2.5 % quantile of unsorted data.
pub fn lower_band(data: &[f64]) -> f64 {
    quantile(data, LOWER_BAND_P)
}

/// 97.5 % quantile of unsorted data.
pub fn upper_band(data: &[f64]) -> f64 {
    quantile(data, UPPER_BAND_P)
}
