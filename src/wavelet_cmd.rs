//! Wavelet commands: soft-threshold denoising and coefficient plots.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use kairos_wavelet::{DenoiseConfig, PlotOptions, wavelet_coeffs_plot};

use crate::cli::{DenoiseArgs, WaveletPlotArgs};
use crate::config::KairosConfig;
use crate::convert;

/// Denoise the column and write it to CSV.
pub fn denoise(args: DenoiseArgs, config: &KairosConfig) -> Result<()> {
    let _cmd = info_span!("denoise").entered();
    let wavelet = convert::wavelet(args.wavelet.as_deref(), &config.wavelet.name)?;
    let threshold = args.threshold.unwrap_or(config.wavelet.threshold);
    let series = convert::read_series(&args.series)?;

    info!(%wavelet, threshold, "denoising");
    let clean = DenoiseConfig::new(wavelet)
        .with_threshold(threshold)
        .apply(&series)
        .context("wavelet denoising failed")?;
    if clean.len() != series.len() {
        warn!(
            input = series.len(),
            output = clean.len(),
            "reconstruction length differs from input"
        );
    }

    let out = convert::output_path(args.output, &args.series.input, "denoised", "csv");
    convert::write_series(&out, &args.series.column, &clean)
}

/// Lay out the coefficient grid and render it to SVG.
pub fn plot(args: WaveletPlotArgs, config: &KairosConfig) -> Result<()> {
    let _cmd = info_span!("wavelet_plot").entered();
    let wavelet = convert::wavelet(args.wavelet.as_deref(), &config.wavelet.name)?;
    let series = convert::read_series(&args.series)?;

    let [width, height] = config.wavelet.figsize;
    let options = PlotOptions {
        figsize: (width, height),
        ..PlotOptions::default()
    };
    let plot = wavelet_coeffs_plot(&series, wavelet, options)
        .context("wavelet decomposition failed")?;
    info!(%wavelet, levels = plot.levels(), "coefficient grid laid out");

    plot.render_svg(&args.output)
        .with_context(|| format!("failed to render SVG: {}", args.output.display()))?;
    info!(path = %args.output.display(), "plot written");
    Ok(())
}
