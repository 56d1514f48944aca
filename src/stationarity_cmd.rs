//! Stationarity command: ADF and KPSS reports for one column.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kairos_stationarity::{StationarityResult, StationarityTests};

use crate::cli::StationarityArgs;
use crate::config::KairosConfig;
use crate::convert;

/// Run both tests, print their reports and optionally dump them as JSON.
pub fn run(args: StationarityArgs, config: &KairosConfig) -> Result<()> {
    let _cmd = info_span!("stationarity").entered();
    let significance = args
        .significance
        .unwrap_or(config.stationarity.significance);
    let tests = StationarityTests::new()
        .with_significance(significance)
        .context("invalid significance level")?;
    let series = convert::read_series(&args.series)?;

    let results = tests
        .run_all(&series)
        .context("stationarity tests failed")?;
    for result in &results {
        info!(
            test = %result.kind(),
            statistic = result.statistic(),
            p_value = result.p_value(),
            stationary = result.is_stationary(),
            "test complete"
        );
        println!("{}", result.report());
    }

    if let Some(path) = args.json {
        write_json(&path, &results)?;
        info!(path = %path.display(), "results written");
    }
    Ok(())
}

fn write_json(path: &Path, results: &[StationarityResult]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create JSON output: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results).context("failed to serialize results")?;
    writer.flush().context("failed to flush JSON output")?;
    Ok(())
}
