//! Fourier command: harmonic reconstruction of one column.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kairos_fourier::FourierExtrapolation;

use crate::cli::FourierArgs;
use crate::config::KairosConfig;
use crate::convert;

/// Reconstruct the column and write it to CSV.
pub fn run(args: FourierArgs, config: &KairosConfig) -> Result<()> {
    let _cmd = info_span!("fourier").entered();
    let series = convert::read_series(&args.series)?;

    let harmonics = args.harmonics.unwrap_or(config.fourier.harmonics);
    let extrapolation = FourierExtrapolation::new()
        .with_harmonics(harmonics)
        .with_predict(args.predict)
        .with_trend(args.with_trend);
    info!(harmonics, predict = args.predict, with_trend = args.with_trend, "reconstructing");

    let reconstructed = extrapolation
        .run(&series)
        .context("Fourier reconstruction failed")?;

    let out = convert::output_path(args.output, &args.series.input, "fourier", "csv");
    convert::write_series(&out, &args.series.column, &reconstructed)
}
