//! Capability trait for stationarity tests.

use crate::error::StationarityError;
use crate::result::{StationarityResult, TestKind};

/// A stationarity hypothesis test over a univariate series.
///
/// [`AdfTest`](crate::AdfTest) and [`KpssTest`](crate::KpssTest) are the
/// built-in implementations. Alternate statistical backends implement this
/// trait and are run through [`StationarityTests::run`](crate::StationarityTests::run).
pub trait HypothesisTest {
    /// Which test this is.
    fn kind(&self) -> TestKind;

    /// Runs the test and returns its result at the test's significance level.
    fn test(&self, series: &[f64]) -> Result<StationarityResult, StationarityError>;
}

pub(crate) fn validate_significance(significance: f64) -> Result<(), StationarityError> {
    if significance > 0.0 && significance < 1.0 {
        Ok(())
    } else {
        Err(StationarityError::InvalidSignificance(significance))
    }
}

pub(crate) fn validate_series(series: &[f64], min: usize) -> Result<(), StationarityError> {
    if series.len() < min {
        return Err(StationarityError::SeriesTooShort {
            len: series.len(),
            min,
        });
    }
    if !series.iter().all(|v| v.is_finite()) {
        return Err(StationarityError::NonFiniteData);
    }
    Ok(())
}
