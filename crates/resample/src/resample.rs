//! Bucket resampling of time-indexed frames.

use tracing::{debug, instrument};

use crate::agg::{Agg, AggSpec};
use crate::error::ResampleError;
use crate::frame::TimeFrame;
use crate::rule::ResampleRule;

/// Hour-of-day column averaged by [`resampling_data`].
pub const HOUR_COLUMN: &str = "Hour";

/// Minute-of-hour column averaged by [`resampling_data`].
pub const MINUTES_COLUMN: &str = "Minutes";

/// Aggregates `frame` into fixed-width buckets.
///
/// Buckets are anchored at midnight of the earliest timestamp's day. The
/// output index holds every bucket start from the first occupied bucket to
/// the last, including empty ones; its columns follow the order of `spec`.
/// Row order in the input does not matter; within a bucket values are
/// reduced in timestamp order.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ResampleError::EmptyData`] | `frame` has no rows |
/// | [`ResampleError::EmptySpec`] | `spec` names no columns |
/// | [`ResampleError::MissingColumn`] | a spec column is absent from `frame` |
/// | [`ResampleError::InvalidQuantile`] | a quantile probability outside `[0, 1]` |
#[instrument(skip(frame, spec), fields(rows = frame.len(), rule = %rule))]
pub fn resample(
    frame: &TimeFrame,
    rule: &ResampleRule,
    spec: &AggSpec,
) -> Result<TimeFrame, ResampleError> {
    if frame.is_empty() {
        return Err(ResampleError::EmptyData);
    }
    if spec.is_empty() {
        return Err(ResampleError::EmptySpec);
    }
    let inputs: Vec<(&str, &[f64], Agg)> = spec
        .entries()
        .iter()
        .map(|(name, agg)| {
            agg.validate()?;
            Ok((name.as_str(), frame.require(name)?, *agg))
        })
        .collect::<Result<_, ResampleError>>()?;

    let index = frame.index();
    let Some(&first) = index.iter().min() else {
        return Err(ResampleError::EmptyData);
    };
    let origin = ResampleRule::origin(first);

    let buckets: Vec<i64> = index.iter().map(|&ts| rule.bucket(ts, origin)).collect();
    let (lo, hi) = buckets
        .iter()
        .fold((i64::MAX, i64::MIN), |(lo, hi), &b| (lo.min(b), hi.max(b)));
    let n_buckets = (hi - lo + 1) as usize;

    // Rows sorted by time, then grouped by bucket.
    let mut order: Vec<usize> = (0..index.len()).collect();
    order.sort_by_key(|&i| index[i]);
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); n_buckets];
    for i in order {
        members[(buckets[i] - lo) as usize].push(i);
    }

    let out_index = (lo..=hi).map(|k| rule.bucket_start(k, origin)).collect();
    let mut out = TimeFrame::new(out_index);
    let mut scratch = Vec::new();
    for (name, values, agg) in inputs {
        let column = members
            .iter()
            .map(|rows| {
                scratch.clear();
                scratch.extend(rows.iter().map(|&i| values[i]));
                agg.apply(&scratch)
            })
            .collect();
        out.push_column(name, column)?;
    }

    let empty = members.iter().filter(|m| m.is_empty()).count();
    debug!(buckets = n_buckets, empty, columns = spec.len(), "resampled");
    Ok(out)
}

/// Resamples a load table: `Hour` and `Minutes` averaged, every feature summed.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ResampleError::InvalidRule`] | `rule` cannot be parsed |
/// | [`ResampleError::MissingColumn`] | `Hour`, `Minutes` or a feature is absent |
/// | [`ResampleError::EmptyData`] | `frame` has no rows |
pub fn resampling_data<S: AsRef<str>>(
    frame: &TimeFrame,
    features: &[S],
    rule: &str,
) -> Result<TimeFrame, ResampleError> {
    let rule = ResampleRule::parse(rule)?;
    let spec = features.iter().fold(
        AggSpec::new()
            .with(HOUR_COLUMN, Agg::Mean)
            .with(MINUTES_COLUMN, Agg::Mean),
        |spec, f| spec.with(f.as_ref(), Agg::Sum),
    );
    resample(frame, &rule, &spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    fn minute_index(start_h: u32, start_m: u32, n: usize) -> Vec<NaiveDateTime> {
        let start = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(start_h, start_m, 0)
            .unwrap();
        (0..n).map(|i| start + TimeDelta::minutes(i as i64)).collect()
    }

    fn load_frame(index: Vec<NaiveDateTime>, load: Vec<f64>) -> TimeFrame {
        use chrono::Timelike;
        let hours = index.iter().map(|t| f64::from(t.hour())).collect();
        let minutes = index.iter().map(|t| f64::from(t.minute())).collect();
        TimeFrame::new(index)
            .with_column("Load", load)
            .unwrap()
            .with_column(HOUR_COLUMN, hours)
            .unwrap()
            .with_column(MINUTES_COLUMN, minutes)
            .unwrap()
    }

    #[test]
    fn one_hour_of_unit_load_sums_to_sixty() {
        let frame = load_frame(minute_index(0, 0, 60), vec![1.0; 60]);
        let out = resampling_data(&frame, &["Load"], "h").unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.column("Load").unwrap(), &[60.0]);
        assert_abs_diff_eq!(out.column(HOUR_COLUMN).unwrap()[0], 0.0);
        assert_abs_diff_eq!(out.column(MINUTES_COLUMN).unwrap()[0], 29.5);
        let names: Vec<&str> = out.column_names().collect();
        assert_eq!(names, [HOUR_COLUMN, MINUTES_COLUMN, "Load"]);
    }

    #[test]
    fn buckets_start_at_midnight_of_first_day() {
        // 07:50..08:10 splits into the 07:00 and 08:00 buckets.
        let frame = load_frame(minute_index(7, 50, 20), vec![2.0; 20]);
        let out = resampling_data(&frame, &["Load"], "h").unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(
            out.index(),
            &[
                day.and_hms_opt(7, 0, 0).unwrap(),
                day.and_hms_opt(8, 0, 0).unwrap()
            ]
        );
        assert_eq!(out.column("Load").unwrap(), &[20.0, 20.0]);
        assert_abs_diff_eq!(out.column(HOUR_COLUMN).unwrap()[1], 8.0);
    }

    #[test]
    fn gaps_produce_empty_buckets() {
        let mut index = minute_index(0, 0, 2);
        index.push(index[0] + TimeDelta::hours(3));
        let frame = load_frame(index, vec![1.0, 2.0, 5.0]);
        let out = resampling_data(&frame, &["Load"], "h").unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out.column("Load").unwrap(), &[3.0, 0.0, 0.0, 5.0]);
        let hours = out.column(HOUR_COLUMN).unwrap();
        assert!(hours[1].is_nan() && hours[2].is_nan());
    }

    #[test]
    fn unsorted_rows_use_time_order() {
        let idx = minute_index(0, 0, 3);
        let shuffled = vec![idx[2], idx[0], idx[1]];
        let frame = TimeFrame::new(shuffled)
            .with_column("x", vec![30.0, 10.0, 20.0])
            .unwrap();
        let spec = AggSpec::new()
            .with("first", Agg::First)
            .with("x", Agg::Last);
        // "first" is not a column
        assert!(matches!(
            resample(&frame, &ResampleRule::hourly(), &spec).unwrap_err(),
            ResampleError::MissingColumn { .. }
        ));
        let spec = AggSpec::new().with("x", Agg::First);
        let out = resample(&frame, &ResampleRule::hourly(), &spec).unwrap();
        assert_eq!(out.column("x").unwrap(), &[10.0]);
        let spec = AggSpec::new().with("x", Agg::Last);
        let out = resample(&frame, &ResampleRule::hourly(), &spec).unwrap();
        assert_eq!(out.column("x").unwrap(), &[30.0]);
    }

    #[test]
    fn fifteen_minute_buckets() {
        let frame = load_frame(minute_index(0, 0, 60), (0..60).map(f64::from).collect());
        let out = resampling_data(&frame, &["Load"], "15min").unwrap();
        assert_eq!(out.len(), 4);
        // 0+..+14 = 105, each next block adds 15*15
        assert_eq!(out.column("Load").unwrap(), &[105.0, 330.0, 555.0, 780.0]);
    }

    #[test]
    fn missing_columns_fail() {
        let frame = TimeFrame::new(minute_index(0, 0, 3))
            .with_column("Load", vec![1.0; 3])
            .unwrap();
        let err = resampling_data(&frame, &["Load"], "h").unwrap_err();
        assert!(matches!(err, ResampleError::MissingColumn { ref name } if name == "Hour"));

        let frame = load_frame(minute_index(0, 0, 3), vec![1.0; 3]);
        let err = resampling_data(&frame, &["Temperature"], "h").unwrap_err();
        assert!(matches!(err, ResampleError::MissingColumn { ref name } if name == "Temperature"));
    }

    #[test]
    fn bad_rule_and_empty_inputs() {
        let frame = load_frame(minute_index(0, 0, 3), vec![1.0; 3]);
        assert!(matches!(
            resampling_data(&frame, &["Load"], "fortnight").unwrap_err(),
            ResampleError::InvalidRule { .. }
        ));
        let empty = load_frame(Vec::new(), Vec::new());
        assert!(matches!(
            resampling_data(&empty, &["Load"], "h").unwrap_err(),
            ResampleError::EmptyData
        ));
        assert!(matches!(
            resample(&frame, &ResampleRule::hourly(), &AggSpec::new()).unwrap_err(),
            ResampleError::EmptySpec
        ));
    }
}
