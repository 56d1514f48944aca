//! Augmented Dickey-Fuller test with a constant and a fixed lag.

use ndarray::{Array1, Array2};
use tracing::{debug, instrument};

use crate::error::StationarityError;
use crate::hypothesis::{HypothesisTest, validate_series, validate_significance};
use crate::mackinnon::{mackinnon_crit, mackinnon_p};
use crate::result::{CriticalValue, StationarityResult, TestKind};

/// Lagged differences included in the regression.
pub const ADF_LAGS: usize = 1;

/// Shortest series accepted: the regression has three coefficients and needs
/// at least one residual degree of freedom.
pub const ADF_MIN_LEN: usize = ADF_LAGS + 5;

/// Augmented Dickey-Fuller test, null hypothesis of a unit root.
///
/// Fits `Δy_t = α + β y_{t-1} + γ Δy_{t-1} + e_t` by least squares and takes
/// the t-ratio of `β` as the statistic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdfTest {
    significance: f64,
}

impl Default for AdfTest {
    fn default() -> Self {
        Self { significance: 0.05 }
    }
}

impl AdfTest {
    /// # Errors
    ///
    /// Returns [`StationarityError::InvalidSignificance`] outside `(0, 1)`.
    pub fn new(significance: f64) -> Result<Self, StationarityError> {
        validate_significance(significance)?;
        Ok(Self { significance })
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }
}

impl HypothesisTest for AdfTest {
    fn kind(&self) -> TestKind {
        TestKind::Adf
    }

    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`StationarityError::SeriesTooShort`] | fewer than [`ADF_MIN_LEN`] values |
    /// | [`StationarityError::NonFiniteData`] | NaN or infinity in `series` |
    /// | [`StationarityError::Degenerate`] | constant series or exact fit |
    /// | [`StationarityError::Regression`] | rank-deficient regression |
    #[instrument(skip(self, series), fields(n = series.len()))]
    fn test(&self, series: &[f64]) -> Result<StationarityResult, StationarityError> {
        validate_series(series, ADF_MIN_LEN)?;
        if series.iter().all(|&v| v == series[0]) {
            return Err(StationarityError::Degenerate { test: "ADF" });
        }

        let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
        let nobs = diff.len() - ADF_LAGS;

        let mut design = Array2::<f64>::zeros((nobs, 2 + ADF_LAGS));
        let mut response = Array1::<f64>::zeros(nobs);
        for r in 0..nobs {
            let t = r + ADF_LAGS;
            response[r] = diff[t];
            design[[r, 0]] = series[t];
            for lag in 1..=ADF_LAGS {
                design[[r, lag]] = diff[t - lag];
            }
            design[[r, 1 + ADF_LAGS]] = 1.0;
        }

        let fit = kairos_trend::ols(design.view(), response.view())?;
        let statistic = fit
            .t_value(0)
            .filter(|t| t.is_finite())
            .ok_or(StationarityError::Degenerate { test: "ADF" })?;
        let p_value = mackinnon_p(statistic);
        let critical_values = mackinnon_crit(nobs)
            .into_iter()
            .map(|(level, value)| CriticalValue {
                level: level.to_string(),
                value,
            })
            .collect();
        debug!(statistic, p_value, nobs, "ADF regression fitted");

        Ok(StationarityResult::new(
            TestKind::Adf,
            statistic,
            p_value,
            ADF_LAGS,
            nobs,
            critical_values,
            self.significance,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Deterministic AR(1) with coefficient 0.3 driven by a bounded chaotic sequence.
    fn mean_reverting(n: usize) -> Vec<f64> {
        let mut x = vec![0.0; n];
        let mut u = 0.37_f64;
        for t in 1..n {
            u = 3.99 * u * (1.0 - u);
            x[t] = 0.3 * x[t - 1] + (u - 0.5);
        }
        x
    }

    #[test]
    fn observation_count_drops_lag_and_difference() {
        let r = AdfTest::default().test(&mean_reverting(100)).unwrap();
        assert_eq!(r.nobs(), 98);
        assert_eq!(r.lags(), 1);
        assert_eq!(r.critical_values().len(), 3);
        assert_abs_diff_eq!(r.critical_value("1%").unwrap(), -3.4989, epsilon = 1e-3);
    }

    #[test]
    fn mean_reverting_series_rejects_unit_root() {
        let r = AdfTest::default().test(&mean_reverting(200)).unwrap();
        assert!(r.statistic() < -4.0, "statistic {}", r.statistic());
        assert!(r.p_value() < 0.01);
        assert!(r.is_stationary());
    }

    #[test]
    fn statistic_is_t_ratio_of_level_coefficient() {
        let x = mean_reverting(60);
        let r = AdfTest::default().test(&x).unwrap();

        let mut design = Array2::<f64>::zeros((58, 3));
        let mut y = Array1::<f64>::zeros(58);
        for row in 0..58 {
            y[row] = x[row + 2] - x[row + 1];
            design[[row, 0]] = x[row + 1];
            design[[row, 1]] = x[row + 1] - x[row];
            design[[row, 2]] = 1.0;
        }
        let fit = kairos_trend::ols(design.view(), y.view()).unwrap();
        assert_abs_diff_eq!(r.statistic(), fit.t_value(0).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn constant_series_is_degenerate() {
        let err = AdfTest::default().test(&[4.0; 20]).unwrap_err();
        assert!(matches!(err, StationarityError::Degenerate { test: "ADF" }));
    }

    #[test]
    fn short_and_non_finite_rejected() {
        assert!(matches!(
            AdfTest::default().test(&[1.0, 2.0, 0.5]).unwrap_err(),
            StationarityError::SeriesTooShort { len: 3, min: 6 }
        ));
        let mut x = mean_reverting(20);
        x[7] = f64::NAN;
        assert!(matches!(
            AdfTest::default().test(&x).unwrap_err(),
            StationarityError::NonFiniteData
        ));
    }

    #[test]
    fn invalid_significance() {
        assert!(AdfTest::new(0.0).is_err());
        assert!(AdfTest::new(1.0).is_err());
        assert_eq!(AdfTest::new(0.1).unwrap().significance(), 0.1);
    }
}
