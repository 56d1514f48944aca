//! Resample command: bucket a load table and aggregate its features.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use kairos_io::{ReadOptions, read_frame, write_frame};
use kairos_resample::{HOUR_COLUMN, MINUTES_COLUMN, resampling_data};

use crate::cli::ResampleArgs;
use crate::config::KairosConfig;
use crate::convert;

/// Resample the table and write the aggregated frame to CSV.
pub fn run(args: ResampleArgs, config: &KairosConfig) -> Result<()> {
    let _cmd = info_span!("resample").entered();
    let features = args
        .features
        .unwrap_or_else(|| config.resample.features.clone());
    if features.is_empty() {
        bail!("no feature columns: set [resample].features in config or use --features");
    }
    let rule = args.rule.as_deref().unwrap_or(&config.resample.rule);

    let options = ReadOptions::default()
        .with_date_column(config.resample.date_column.as_str())
        .with_columns(read_columns(&features));

    info!(path = %args.input.display(), "reading table");
    let frame = read_frame(&args.input, &options)
        .with_context(|| format!("failed to read CSV table: {}", args.input.display()))?;
    info!(rows = frame.len(), columns = frame.width(), "table loaded");

    let resampled = resampling_data(&frame, &features, rule)
        .with_context(|| format!("failed to resample with rule '{rule}'"))?;
    info!(rule, buckets = resampled.len(), "resampled");

    let out = convert::output_path(args.output, &args.input, "resampled", "csv");
    write_frame(&out, &resampled)
        .with_context(|| format!("failed to write CSV: {}", out.display()))?;
    info!(path = %out.display(), "output written");
    Ok(())
}

/// Columns to load: the calendar columns, then each feature once, in order.
fn read_columns(features: &[String]) -> Vec<String> {
    let mut columns = vec![HOUR_COLUMN.to_string(), MINUTES_COLUMN.to_string()];
    for feature in features {
        if !columns.contains(feature) {
            columns.push(feature.clone());
        }
    }
    columns
}
