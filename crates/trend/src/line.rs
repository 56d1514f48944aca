//! Straight-line trend fitting.

use crate::error::TrendError;
use crate::fit::{LeastSquares, PolynomialFit};

/// A fitted straight line `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineFit {
    /// Slope `m`.
    pub slope: f64,
    /// Intercept `q`.
    pub intercept: f64,
}

impl LineFit {
    /// Fits a line to `(x, y)` with the default least-squares backend.
    ///
    /// # Errors
    ///
    /// See [`fit_line_with`].
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, TrendError> {
        fit_line_with(&LeastSquares, x, y)
    }

    /// Fits a line against the sample index `0..y.len()`.
    ///
    /// # Errors
    ///
    /// See [`fit_line_with`].
    pub fn fit_index(y: &[f64]) -> Result<Self, TrendError> {
        let t: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
        Self::fit(&t, y)
    }

    /// Evaluates the line at `x`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Evaluates the line at every element of `x`.
    pub fn evaluate_all(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| self.evaluate(v)).collect()
    }

    /// Subtracts the line (evaluated at the sample index) from `y`.
    pub fn detrend(&self, y: &[f64]) -> Vec<f64> {
        y.iter()
            .enumerate()
            .map(|(t, &v)| v - self.evaluate(t as f64))
            .collect()
    }
}

/// Fits a line with an explicit polynomial backend.
///
/// # Errors
///
/// Returns [`TrendError::TooFewPoints`] for fewer than two points,
/// [`TrendError::Singular`] when `x` has fewer than two distinct values, and
/// whatever else `backend` reports.
pub fn fit_line_with<P: PolynomialFit + ?Sized>(
    backend: &P,
    x: &[f64],
    y: &[f64],
) -> Result<LineFit, TrendError> {
    let coeffs = backend.polynomial_fit(x, y, 1)?;
    match coeffs.as_slice() {
        [slope, intercept] => Ok(LineFit {
            slope: *slope,
            intercept: *intercept,
        }),
        _ => Err(TrendError::TooFewPoints {
            got: coeffs.len(),
            min: 2,
        }),
    }
}

/// Fits the least-squares line through `(x, y)` and returns the fitted
/// values `m * x + q` evaluated at every `x`.
///
/// # Errors
///
/// Fails when `x` has fewer than two distinct values, the lengths differ, or
/// the input is non-finite.
#[tracing::instrument(skip_all, fields(n = x.len()))]
pub fn linear_fit(x: &[f64], y: &[f64]) -> Result<Vec<f64>, TrendError> {
    let line = LineFit::fit(x, y)?;
    Ok(line.evaluate_all(x))
}
