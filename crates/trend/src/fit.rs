//! Polynomial least-squares fitting behind a swappable backend.

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::error::TrendError;
use crate::ols::ols;

/// Capability for fitting a polynomial to `(x, y)` pairs.
///
/// Implementors return coefficients ordered from the highest degree down to
/// the constant term, so `coeffs.len() == degree + 1`.
pub trait PolynomialFit {
    /// Fits a polynomial of the given degree.
    ///
    /// # Errors
    ///
    /// Backend-specific; the default backend reports
    /// [`TrendError`] for mismatched lengths, too few points, non-finite
    /// input and singular systems.
    fn polynomial_fit(&self, x: &[f64], y: &[f64], degree: usize) -> Result<Vec<f64>, TrendError>;
}

/// Default backend: QR least squares on the Vandermonde matrix.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeastSquares;

impl PolynomialFit for LeastSquares {
    fn polynomial_fit(&self, x: &[f64], y: &[f64], degree: usize) -> Result<Vec<f64>, TrendError> {
        if x.len() != y.len() {
            return Err(TrendError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        let k = degree + 1;
        if x.len() < k {
            return Err(TrendError::TooFewPoints {
                got: x.len(),
                min: k,
            });
        }
        if !x.iter().all(|v| v.is_finite()) {
            return Err(TrendError::NonFiniteInput { field: "x" });
        }

        let design = Array2::from_shape_fn((x.len(), k), |(i, j)| x[i].powi((degree - j) as i32));
        let response = Array1::from(y.to_vec());
        let fit = ols(design.view(), response.view())?;
        debug!(degree, n = x.len(), rss = fit.rss(), "polynomial fit");
        Ok(fit.coefficients().to_vec())
    }
}

/// Evaluates a polynomial (highest degree first) at `x` using Horner's rule.
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn quadratic_recovered() {
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.5 - 3.0).collect();
        let y: Vec<f64> = x.iter().map(|&v| 0.5 * v * v - 2.0 * v + 1.0).collect();
        let c = LeastSquares.polynomial_fit(&x, &y, 2).unwrap();
        assert_eq!(c.len(), 3);
        assert_relative_eq!(c[0], 0.5, epsilon = 1e-9);
        assert_relative_eq!(c[1], -2.0, epsilon = 1e-9);
        assert_relative_eq!(c[2], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn degree_zero_is_mean() {
        let c = LeastSquares
            .polynomial_fit(&[0.0, 1.0, 2.0], &[1.0, 2.0, 6.0], 0)
            .unwrap();
        assert_eq!(c.len(), 1);
        assert_relative_eq!(c[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn too_few_points() {
        let err = LeastSquares
            .polynomial_fit(&[1.0, 2.0], &[1.0, 2.0], 2)
            .unwrap_err();
        assert!(matches!(err, TrendError::TooFewPoints { got: 2, min: 3 }));
    }

    #[test]
    fn non_finite_x_rejected() {
        let err = LeastSquares
            .polynomial_fit(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0], 1)
            .unwrap_err();
        assert!(matches!(err, TrendError::NonFiniteInput { field: "x" }));
    }

    #[test]
    fn non_finite_y_rejected() {
        let err = LeastSquares
            .polynomial_fit(&[1.0, 2.0, 3.0], &[1.0, f64::INFINITY, 3.0], 1)
            .unwrap_err();
        assert!(matches!(err, TrendError::NonFiniteInput { field: "y" }));
    }

    #[test]
    fn polyval_horner() {
        // 2x^2 - 3x + 1 at x = 2 -> 8 - 6 + 1 = 3
        assert_relative_eq!(polyval(&[2.0, -3.0, 1.0], 2.0), 3.0);
        assert_eq!(polyval(&[], 5.0), 0.0);
    }

    #[test]
    fn backend_usable_as_trait_object() {
        let backend: &dyn PolynomialFit = &LeastSquares;
        let c = backend
            .polynomial_fit(&[0.0, 1.0], &[1.0, 3.0], 1)
            .unwrap();
        assert_relative_eq!(c[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(c[1], 1.0, epsilon = 1e-12);
    }
}
