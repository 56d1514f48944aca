//! Runner pairing both tests at a shared significance level.

use tracing::instrument;

use crate::adf::AdfTest;
use crate::error::StationarityError;
use crate::hypothesis::{HypothesisTest, validate_significance};
use crate::kpss::KpssTest;
use crate::result::StationarityResult;

/// Default significance level for the stationarity verdicts.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Runs ADF and KPSS at one significance level.
///
/// Holds no per-call state: every run returns its own
/// [`StationarityResult`], so one instance can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use kairos_stationarity::StationarityTests;
///
/// let tests = StationarityTests::new().with_significance(0.01)?;
/// let adf = tests.adf_test(&load)?;
/// println!("{}", adf.report());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationarityTests {
    significance: f64,
}

impl Default for StationarityTests {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
        }
    }
}

impl StationarityTests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the significance level.
    ///
    /// # Errors
    ///
    /// Returns [`StationarityError::InvalidSignificance`] outside `(0, 1)`.
    pub fn with_significance(mut self, significance: f64) -> Result<Self, StationarityError> {
        validate_significance(significance)?;
        self.significance = significance;
        Ok(self)
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Augmented Dickey-Fuller test; stationary iff `p < significance`.
    pub fn adf_test(&self, series: &[f64]) -> Result<StationarityResult, StationarityError> {
        AdfTest::new(self.significance)?.test(series)
    }

    /// KPSS test; stationary iff `p > significance`.
    pub fn kpss_test(&self, series: &[f64]) -> Result<StationarityResult, StationarityError> {
        KpssTest::new(self.significance)?.test(series)
    }

    /// Runs an arbitrary [`HypothesisTest`] backend.
    pub fn run<T: HypothesisTest + ?Sized>(
        &self,
        test: &T,
        series: &[f64],
    ) -> Result<StationarityResult, StationarityError> {
        test.test(series)
    }

    /// Runs ADF then KPSS.
    #[instrument(skip(self, series), fields(n = series.len(), significance = self.significance))]
    pub fn run_all(&self, series: &[f64]) -> Result<Vec<StationarityResult>, StationarityError> {
        Ok(vec![self.adf_test(series)?, self.kpss_test(series)?])
    }
}
