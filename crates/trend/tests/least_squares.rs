use approx::{assert_abs_diff_eq, assert_relative_eq};
use kairos_trend::{LeastSquares, LineFit, PolynomialFit, TrendError, linear_fit, ols, polyval};
use ndarray::Array2;

#[test]
fn line_through_epoch_seconds_is_well_conditioned() {
    let x: Vec<f64> = (0..96).map(|i| 1.7e9 + 900.0 * i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&t| 2e-6 * (t - 1.7e9) + 40.0).collect();
    let fitted = linear_fit(&x, &y).unwrap();
    for (f, v) in fitted.iter().zip(&y) {
        assert_relative_eq!(*f, *v, max_relative = 1e-6);
    }
}

#[test]
fn residuals_are_orthogonal_to_the_regressors() {
    let x: Vec<f64> = (0..40).map(|i| i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&v| 0.5 * v + if (v as usize) % 3 == 0 { 1.0 } else { -0.5 })
        .collect();
    let line = LineFit::fit(&x, &y).unwrap();
    let resid: Vec<f64> = y.iter().zip(&x).map(|(yi, &xi)| yi - line.evaluate(xi)).collect();
    assert_abs_diff_eq!(resid.iter().sum::<f64>(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        resid.iter().zip(&x).map(|(r, xi)| r * xi).sum::<f64>(),
        0.0,
        epsilon = 1e-8
    );
}

#[test]
fn detrend_removes_index_line() {
    let y: Vec<f64> = (0..30).map(|i| 3.0 * i as f64 - 7.0).collect();
    let line = LineFit::fit_index(&y).unwrap();
    assert_relative_eq!(line.slope, 3.0, epsilon = 1e-10);
    assert_relative_eq!(line.intercept, -7.0, epsilon = 1e-10);
    assert!(line.detrend(&y).iter().all(|r| r.abs() < 1e-9));
}

#[test]
fn cubic_backend_round_trip() {
    let x: Vec<f64> = (0..25).map(|i| -2.0 + 0.2 * i as f64).collect();
    let coeffs = [0.25, -1.0, 0.0, 3.0];
    let y: Vec<f64> = x.iter().map(|&v| polyval(&coeffs, v)).collect();
    let fit = LeastSquares.polynomial_fit(&x, &y, 3).unwrap();
    for (got, want) in fit.iter().zip(coeffs) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
    }
}

#[test]
fn ols_standard_errors_for_exact_fit_are_zero() {
    let design = Array2::from_shape_fn((10, 2), |(i, j)| if j == 0 { i as f64 } else { 1.0 });
    let y = ndarray::Array1::from_iter((0..10).map(|i| 2.0 * i as f64 + 1.0));
    let fit = ols(design.view(), y.view()).unwrap();
    assert_eq!(fit.dof(), 8);
    assert_abs_diff_eq!(fit.coefficients()[0], 2.0, epsilon = 1e-10);
    assert!(fit.std_errors().iter().all(|se| se.abs() < 1e-6));
    assert!(fit.t_value(2).is_none());
}

#[test]
fn constant_abscissa_is_singular() {
    let err = linear_fit(&[2.0; 5], &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
    assert!(matches!(err, TrendError::Singular { .. }));
}
