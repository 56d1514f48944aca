//! KPSS level-stationarity test with a fixed Bartlett lag.

use tracing::{debug, instrument, warn};

use crate::error::StationarityError;
use crate::hypothesis::{HypothesisTest, validate_series, validate_significance};
use crate::result::{CriticalValue, StationarityResult, TestKind};

/// Bartlett window lag for the long-run variance.
pub const KPSS_LAGS: usize = 1;

/// Shortest series accepted.
pub const KPSS_MIN_LEN: usize = KPSS_LAGS + 2;

/// Level-stationarity critical values (Kwiatkowski et al. 1992, table 1).
const KPSS_CRIT: [(&str, f64, f64); 4] = [
    ("10%", 0.347, 0.10),
    ("5%", 0.463, 0.05),
    ("2.5%", 0.574, 0.025),
    ("1%", 0.739, 0.01),
];

/// KPSS test, null hypothesis of level stationarity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KpssTest {
    significance: f64,
}

impl Default for KpssTest {
    fn default() -> Self {
        Self { significance: 0.05 }
    }
}

impl KpssTest {
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

/// Newey-West long-run variance of `resid` with Bartlett weights.
fn long_run_variance(resid: &[f64], lags: usize) -> f64 {
    let n = resid.len();
    let mut s: f64 = resid.iter().map(|r| r * r).sum();
    for i in 1..=lags.min(n.saturating_sub(1)) {
        let cross: f64 = resid[i..].iter().zip(&resid[..n - i]).map(|(a, b)| a * b).sum();
        s += 2.0 * cross * (1.0 - i as f64 / (lags as f64 + 1.0));
    }
    s / n as f64
}

/// Linear interpolation of the p-value over the critical table, clamped to
/// its end points.
fn interpolate_p(stat: f64) -> f64 {
    let (first, last) = (KPSS_CRIT[0], KPSS_CRIT[KPSS_CRIT.len() - 1]);
    if stat <= first.1 {
        return first.2;
    }
    if stat >= last.1 {
        return last.2;
    }
    KPSS_CRIT
        .windows(2)
        .find(|w| stat <= w[1].1)
        .map(|w| {
            let frac = (stat - w[0].1) / (w[1].1 - w[0].1);
            w[0].2 + frac * (w[1].2 - w[0].2)
        })
        .unwrap_or(last.2)
}

impl HypothesisTest for KpssTest {
    fn kind(&self) -> TestKind {
        TestKind::Kpss
    }

    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`StationarityError::SeriesTooShort`] | fewer than [`KPSS_MIN_LEN`] values |
    /// | [`StationarityError::NonFiniteData`] | NaN or infinity in `series` |
    /// | [`StationarityError::Degenerate`] | zero long-run variance |
    #[instrument(skip(self, series), fields(n = series.len()))]
    fn test(&self, series: &[f64]) -> Result<StationarityResult, StationarityError> {
        validate_series(series, KPSS_MIN_LEN)?;
        let n = series.len();
        let mean = kairos_stats::mean(series);
        let resid: Vec<f64> = series.iter().map(|v| v - mean).collect();

        let mut partial = 0.0;
        let eta = resid
            .iter()
            .map(|r| {
                partial += r;
                partial * partial
            })
            .sum::<f64>()
            / (n * n) as f64;
        let s_hat = long_run_variance(&resid, KPSS_LAGS);
        if s_hat.is_nan() || s_hat <= 0.0 {
            return Err(StationarityError::Degenerate { test: "KPSS" });
        }
        let statistic = eta / s_hat;
        let p_value = interpolate_p(statistic);
        if p_value == KPSS_CRIT[0].2 || p_value == KPSS_CRIT[KPSS_CRIT.len() - 1].2 {
            warn!(statistic, p_value, "KPSS statistic outside the table range, p-value clamped");
        }
        debug!(statistic, p_value, "KPSS statistic computed");

        let critical_values = KPSS_CRIT
            .iter()
            .map(|&(level, value, _)| CriticalValue {
                level: level.to_string(),
                value,
            })
            .collect();
        Ok(StationarityResult::new(
            TestKind::Kpss,
            statistic,
            p_value,
            KPSS_LAGS,
            n,
            critical_values,
            self.significance,
        ))
    }
}
