//! Per-column bucket aggregations.

use std::fmt;
use std::str::FromStr;

use crate::error::ResampleError;

/// Reduction applied to the values falling into one bucket.
///
/// NaN values are skipped. An empty bucket yields `0` for [`Agg::Sum`] and
/// [`Agg::Count`] and NaN for everything else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Agg {
    /// Arithmetic mean.
    Mean,
    /// Sum.
    Sum,
    /// Minimum.
    Min,
    /// Maximum.
    Max,
    /// First value in time order.
    First,
    /// Last value in time order.
    Last,
    /// Number of non-NaN values.
    Count,
    /// Type-7 quantile with probability `p`.
    Quantile(f64),
}

impl Agg {
    /// Checks parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::InvalidQuantile`] if a quantile probability
    /// lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ResampleError> {
        match *self {
            Agg::Quantile(p) if !(0.0..=1.0).contains(&p) => {
                Err(ResampleError::InvalidQuantile { p })
            }
            _ => Ok(()),
        }
    }

    /// Reduces `values` (time-ordered) to a single number.
    pub fn apply(&self, values: &[f64]) -> f64 {
        let mut present = values.iter().copied().filter(|v| !v.is_nan());
        match *self {
            Agg::Sum => present.sum(),
            Agg::Count => present.count() as f64,
            Agg::Mean => {
                let (sum, n) = present.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
                if n == 0 { f64::NAN } else { sum / n as f64 }
            }
            Agg::Min => present.reduce(f64::min).unwrap_or(f64::NAN),
            Agg::Max => present.reduce(f64::max).unwrap_or(f64::NAN),
            Agg::First => present.next().unwrap_or(f64::NAN),
            Agg::Last => present.last().unwrap_or(f64::NAN),
            Agg::Quantile(p) => kairos_stats::quantile(values, p),
        }
    }
}

impl FromStr for Agg {
    type Err = ResampleError;

    /// Parses `mean`, `sum`, `min`, `max`, `first`, `last`, `count`,
    /// `median` or `q<p>` (for example `q0.9`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let agg = match lower.as_str() {
            "mean" => Agg::Mean,
            "sum" => Agg::Sum,
            "min" => Agg::Min,
            "max" => Agg::Max,
            "first" => Agg::First,
            "last" => Agg::Last,
            "count" => Agg::Count,
            "median" => Agg::Quantile(0.5),
            other => match other.strip_prefix('q').map(str::parse::<f64>) {
                Some(Ok(p)) => Agg::Quantile(p),
                _ => return Err(ResampleError::UnknownAggregation(s.to_string())),
            },
        };
        agg.validate()?;
        Ok(agg)
    }
}

impl fmt::Display for Agg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agg::Mean => f.write_str("mean"),
            Agg::Sum => f.write_str("sum"),
            Agg::Min => f.write_str("min"),
            Agg::Max => f.write_str("max"),
            Agg::First => f.write_str("first"),
            Agg::Last => f.write_str("last"),
            Agg::Count => f.write_str("count"),
            Agg::Quantile(p) => write!(f, "q{p}"),
        }
    }
}

/// Ordered mapping from output column to aggregation.
///
/// # Example
///
/// ```ignore
/// use kairos_resample::{Agg, AggSpec};
///
/// let spec = AggSpec::new()
///     .with("Hour", Agg::Mean)
///     .with("Load", Agg::Sum);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggSpec {
    entries: Vec<(String, Agg)>,
}

impl AggSpec {
    /// Creates an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the aggregation for `column`.
    pub fn with(mut self, column: impl Into<String>, agg: Agg) -> Self {
        let column = column.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = agg,
            None => self.entries.push((column, agg)),
        }
        self
    }

    /// `(column, aggregation)` pairs in insertion order.
    pub fn entries(&self) -> &[(String, Agg)] {
        &self.entries
    }

    /// Number of aggregated columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no columns are aggregated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const V: [f64; 5] = [4.0, f64::NAN, 1.0, 3.0, 2.0];

    #[test]
    fn reductions_skip_nan() {
        assert_abs_diff_eq!(Agg::Sum.apply(&V), 10.0);
        assert_abs_diff_eq!(Agg::Mean.apply(&V), 2.5);
        assert_abs_diff_eq!(Agg::Min.apply(&V), 1.0);
        assert_abs_diff_eq!(Agg::Max.apply(&V), 4.0);
        assert_abs_diff_eq!(Agg::First.apply(&V), 4.0);
        assert_abs_diff_eq!(Agg::Last.apply(&V), 2.0);
        assert_abs_diff_eq!(Agg::Count.apply(&V), 4.0);
        assert_abs_diff_eq!(Agg::Quantile(0.5).apply(&V), 2.5);
    }

    #[test]
    fn empty_bucket_values() {
        assert_eq!(Agg::Sum.apply(&[]), 0.0);
        assert_eq!(Agg::Count.apply(&[]), 0.0);
        for agg in [Agg::Mean, Agg::Min, Agg::Max, Agg::First, Agg::Last, Agg::Quantile(0.1)] {
            assert!(agg.apply(&[]).is_nan(), "{agg}");
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("Mean".parse::<Agg>().unwrap(), Agg::Mean);
        assert_eq!("sum".parse::<Agg>().unwrap(), Agg::Sum);
        assert_eq!("median".parse::<Agg>().unwrap(), Agg::Quantile(0.5));
        assert_eq!("q0.9".parse::<Agg>().unwrap(), Agg::Quantile(0.9));
        assert!(matches!(
            "mode".parse::<Agg>().unwrap_err(),
            ResampleError::UnknownAggregation(_)
        ));
        assert!(matches!(
            "q1.5".parse::<Agg>().unwrap_err(),
            ResampleError::InvalidQuantile { .. }
        ));
    }

    #[test]
    fn display_round_trips() {
        for agg in [Agg::Mean, Agg::Count, Agg::Quantile(0.25)] {
            assert_eq!(agg.to_string().parse::<Agg>().unwrap(), agg);
        }
    }

    #[test]
    fn spec_replaces_duplicates() {
        let spec = AggSpec::new()
            .with("Load", Agg::Mean)
            .with("Hour", Agg::Mean)
            .with("Load", Agg::Sum);
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.entries()[0], ("Load".to_string(), Agg::Sum));
        assert!(!spec.is_empty());
        assert!(AggSpec::new().is_empty());
    }
}
