//! Normalize and trend commands.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use kairos_stats::{MinMax, normalize};
use kairos_trend::LineFit;

use crate::cli::{NormalizeArgs, TrendArgs};
use crate::convert;

/// Min-max scale the column with explicit or observed bounds.
pub fn normalize_column(args: NormalizeArgs) -> Result<()> {
    let _cmd = info_span!("normalize").entered();
    let series = convert::read_series(&args.series)?;

    let observed = MinMax::from_data(&series);
    let max = args.max.or(observed.map(|b| b.max));
    let min = args.min.or(observed.map(|b| b.min));
    let (Some(max), Some(min)) = (max, min) else {
        bail!("column '{}' has no finite values", args.series.column);
    };
    if max == min {
        bail!("degenerate bounds: max and min are both {max}");
    }
    info!(max, min, "normalizing");

    let scaled = normalize(&series, max, min);
    let out = convert::output_path(args.output, &args.series.input, "normalized", "csv");
    convert::write_series(&out, &args.series.column, &scaled)
}

/// Fit a line over the sample index and write the fitted values.
pub fn trend(args: TrendArgs) -> Result<()> {
    let _cmd = info_span!("trend").entered();
    let series = convert::read_series(&args.series)?;

    let line = LineFit::fit_index(&series).context("linear fit failed")?;
    info!(slope = line.slope, intercept = line.intercept, "line fitted");
    println!("slope = {}\nintercept = {}", line.slope, line.intercept);

    let x: Vec<f64> = (0..series.len()).map(|i| i as f64).collect();
    let fitted = line.evaluate_all(&x);
    let out = convert::output_path(args.output, &args.series.input, "trend", "csv");
    convert::write_series(&out, &args.series.column, &fitted)
}
