//! Ordinary least squares via Householder QR.
//!
//! Columns are scaled to unit norm before factorisation so that designs
//! mixing large abscissae (sample indices, timestamps) with an intercept
//! column stay well conditioned.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::TrendError;

/// Relative tolerance on `|R_jj|` below which a column counts as dependent.
const RANK_TOL: f64 = 1e-10;

/// Result of an ordinary least-squares regression.
#[derive(Clone, Debug)]
pub struct OlsFit {
    coefficients: Vec<f64>,
    std_errors: Vec<f64>,
    residuals: Vec<f64>,
    rss: f64,
    dof: usize,
}

impl OlsFit {
    /// Estimated coefficients, one per design column.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Standard errors of the coefficients.
    ///
    /// All NaN when the fit has zero residual degrees of freedom.
    pub fn std_errors(&self) -> &[f64] {
        &self.std_errors
    }

    /// t-ratio `coef / se` of coefficient `j`, or `None` if out of range.
    pub fn t_value(&self, j: usize) -> Option<f64> {
        Some(self.coefficients.get(j)? / self.std_errors.get(j)?)
    }

    /// Residuals `y - X b`.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.rss
    }

    /// Residual degrees of freedom (`n - k`).
    pub fn dof(&self) -> usize {
        self.dof
    }

    /// Residual variance estimate `rss / (n - k)`.
    pub fn sigma2(&self) -> f64 {
        if self.dof == 0 {
            f64::NAN
        } else {
            self.rss / self.dof as f64
        }
    }
}

/// Fits `y = X b` by least squares.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`TrendError::LengthMismatch`] | `design.nrows() != y.len()` |
/// | [`TrendError::TooFewPoints`] | fewer rows than columns |
/// | [`TrendError::NonFiniteInput`] | NaN or infinity in design or response |
/// | [`TrendError::Singular`] | rank-deficient design |
pub fn ols(design: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<OlsFit, TrendError> {
    let (n, k) = design.dim();
    if n != y.len() {
        return Err(TrendError::LengthMismatch { x: n, y: y.len() });
    }
    if n < k || k == 0 {
        return Err(TrendError::TooFewPoints {
            got: n,
            min: k.max(1),
        });
    }
    if !design.iter().all(|v| v.is_finite()) {
        return Err(TrendError::NonFiniteInput { field: "design" });
    }
    if !y.iter().all(|v| v.is_finite()) {
        return Err(TrendError::NonFiniteInput { field: "y" });
    }

    let norms: Vec<f64> = design
        .columns()
        .into_iter()
        .map(|c| c.dot(&c).sqrt())
        .collect();
    if let Some(column) = norms.iter().position(|&nm| nm == 0.0) {
        return Err(TrendError::Singular { column });
    }

    let mut a: Array2<f64> = design.to_owned();
    for (j, &nm) in norms.iter().enumerate() {
        a.column_mut(j).mapv_inplace(|v| v / nm);
    }
    let mut qty: Array1<f64> = y.to_owned();

    householder_qr(&mut a, &mut qty);

    let max_diag = (0..k).map(|j| a[[j, j]].abs()).fold(0.0, f64::max);
    if let Some(column) = (0..k).find(|&j| a[[j, j]].abs() <= RANK_TOL * max_diag) {
        return Err(TrendError::Singular { column });
    }

    // Back substitution on the upper triangle.
    let mut scaled = vec![0.0; k];
    for i in (0..k).rev() {
        let mut s = qty[i];
        for (j, &bj) in scaled.iter().enumerate().skip(i + 1) {
            s -= a[[i, j]] * bj;
        }
        scaled[i] = s / a[[i, i]];
    }
    let coefficients: Vec<f64> = scaled.iter().zip(&norms).map(|(b, nm)| b / nm).collect();

    let coef = Array1::from(coefficients.clone());
    let fitted = design.dot(&coef);
    let residuals: Vec<f64> = y.iter().zip(fitted.iter()).map(|(yi, fi)| yi - fi).collect();
    let rss: f64 = residuals.iter().map(|r| r * r).sum();
    let dof = n - k;

    let r_inv = upper_triangular_inverse(&a, k);
    let sigma2 = if dof == 0 { f64::NAN } else { rss / dof as f64 };
    let std_errors = (0..k)
        .map(|j| {
            let diag: f64 = (j..k).map(|m| r_inv[[j, m]] * r_inv[[j, m]]).sum();
            (sigma2 * diag).sqrt() / norms[j]
        })
        .collect();

    Ok(OlsFit {
        coefficients,
        std_errors,
        residuals,
        rss,
        dof,
    })
}

/// In-place Householder QR: `a` becomes R in its upper triangle and
/// `rhs` becomes `Q^T rhs`.
fn householder_qr(a: &mut Array2<f64>, rhs: &mut Array1<f64>) {
    let (n, k) = a.dim();
    for j in 0..k {
        let norm_x: f64 = (j..n).map(|i| a[[i, j]] * a[[i, j]]).sum::<f64>().sqrt();
        if norm_x == 0.0 {
            continue;
        }
        let alpha = if a[[j, j]] > 0.0 { -norm_x } else { norm_x };

        let mut v: Vec<f64> = (j..n).map(|i| a[[i, j]]).collect();
        v[0] -= alpha;
        let v_norm2: f64 = v.iter().map(|x| x * x).sum();
        if v_norm2 == 0.0 {
            continue;
        }

        for c in j..k {
            let dot: f64 = v.iter().enumerate().map(|(o, vi)| vi * a[[j + o, c]]).sum();
            let s = 2.0 * dot / v_norm2;
            for (o, vi) in v.iter().enumerate() {
                a[[j + o, c]] -= s * vi;
            }
        }
        let dot: f64 = v.iter().enumerate().map(|(o, vi)| vi * rhs[j + o]).sum();
        let s = 2.0 * dot / v_norm2;
        for (o, vi) in v.iter().enumerate() {
            rhs[j + o] -= s * vi;
        }
    }
}

/// Inverse of the leading `k x k` upper triangle of `r`.
fn upper_triangular_inverse(r: &Array2<f64>, k: usize) -> Array2<f64> {
    let mut inv = Array2::<f64>::zeros((k, k));
    for col in 0..k {
        for i in (0..=col).rev() {
            let mut s = if i == col { 1.0 } else { 0.0 };
            for m in (i + 1)..=col {
                s -= r[[i, m]] * inv[[m, col]];
            }
            inv[[i, col]] = s / r[[i, i]];
        }
    }
    inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn exact_line_has_zero_residuals() {
        let x = array![[0.0, 1.0], [1.0, 1.0], [2.0, 1.0], [3.0, 1.0]];
        let y = array![3.0, 5.0, 7.0, 9.0];
        let fit = ols(x.view(), y.view()).unwrap();
        assert_relative_eq!(fit.coefficients()[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(fit.coefficients()[1], 3.0, epsilon = 1e-10);
        assert!(fit.rss() < 1e-20);
        assert_eq!(fit.dof(), 2);
    }

    #[test]
    fn standard_errors_match_closed_form() {
        // Simple regression: se(slope) = sqrt(sigma2 / Sxx)
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [1.1, 1.9, 3.2, 3.8, 5.1];
        let design = Array2::from_shape_fn((5, 2), |(i, j)| if j == 0 { xs[i] } else { 1.0 });
        let y = Array1::from(ys.to_vec());
        let fit = ols(design.view(), y.view()).unwrap();

        let x_mean = 3.0;
        let y_mean = ys.iter().sum::<f64>() / 5.0;
        let sxx: f64 = xs.iter().map(|x| (x - x_mean) * (x - x_mean)).sum();
        let sxy: f64 = xs
            .iter()
            .zip(&ys)
            .map(|(x, y)| (x - x_mean) * (y - y_mean))
            .sum();
        let slope = sxy / sxx;
        assert_relative_eq!(fit.coefficients()[0], slope, epsilon = 1e-10);
        assert_relative_eq!(
            fit.std_errors()[0],
            (fit.sigma2() / sxx).sqrt(),
            epsilon = 1e-10
        );
        assert_relative_eq!(
            fit.t_value(0).unwrap(),
            slope / (fit.sigma2() / sxx).sqrt(),
            epsilon = 1e-8
        );
        assert!(fit.t_value(2).is_none());
    }

    #[test]
    fn large_abscissa_is_not_flagged_singular() {
        let n = 100_000;
        let design = Array2::from_shape_fn((n, 2), |(i, j)| if j == 0 { i as f64 } else { 1.0 });
        let y = Array1::from_shape_fn(n, |i| 0.5 * i as f64 - 7.0);
        let fit = ols(design.view(), y.view()).unwrap();
        assert_relative_eq!(fit.coefficients()[0], 0.5, epsilon = 1e-9);
        assert_relative_eq!(fit.coefficients()[1], -7.0, epsilon = 1e-6);
    }

    #[test]
    fn duplicated_column_is_singular() {
        let x = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
        let y = array![1.0, 2.0, 3.0];
        let err = ols(x.view(), y.view()).unwrap_err();
        assert!(matches!(err, TrendError::Singular { column: 1 }));
    }

    #[test]
    fn zero_column_is_singular() {
        let x = array![[0.0, 1.0], [0.0, 1.0], [0.0, 1.0]];
        let y = array![1.0, 2.0, 3.0];
        let err = ols(x.view(), y.view()).unwrap_err();
        assert!(matches!(err, TrendError::Singular { column: 0 }));
    }

    #[test]
    fn row_count_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];
        let err = ols(x.view(), y.view()).unwrap_err();
        assert!(matches!(err, TrendError::LengthMismatch { x: 2, y: 3 }));
    }

    #[test]
    fn exactly_determined_has_nan_errors() {
        let x = array![[1.0, 1.0], [2.0, 1.0]];
        let y = array![1.0, 3.0];
        let fit = ols(x.view(), y.view()).unwrap();
        assert_eq!(fit.dof(), 0);
        assert!(fit.sigma2().is_nan());
        assert!(fit.std_errors().iter().all(|s| s.is_nan()));
    }

    #[test]
    fn triangular_inverse() {
        let r = array![[2.0, 1.0], [0.0, 4.0]];
        let inv = upper_triangular_inverse(&r, 2);
        assert_relative_eq!(inv[[0, 0]], 0.5);
        assert_relative_eq!(inv[[0, 1]], -0.125);
        assert_relative_eq!(inv[[1, 1]], 0.25);
        assert_relative_eq!(inv[[1, 0]], 0.0);
    }
}
