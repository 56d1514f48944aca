use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kairos time-series preprocessing toolkit.
#[derive(Parser)]
#[command(
    name = "kairos",
    version,
    about = "Load and signal time-series preprocessing toolkit"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./kairos.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Reconstruct a column from its lowest-frequency harmonics.
    Fourier(FourierArgs),
    /// Denoise a column by wavelet soft thresholding.
    Denoise(DenoiseArgs),
    /// Draw single-level wavelet coefficients to an SVG file.
    WaveletPlot(WaveletPlotArgs),
    /// Aggregate a time-indexed table to coarser buckets.
    Resample(ResampleArgs),
    /// Run ADF and KPSS stationarity tests on a column.
    Stationarity(StationarityArgs),
    /// Min-max scale a column to [0, 1].
    Normalize(NormalizeArgs),
    /// Fit a least-squares line to a column.
    Trend(TrendArgs),
}

/// Input CSV and column shared by the single-series commands.
#[derive(clap::Args)]
pub struct SeriesArgs {
    /// Path to input CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Column to analyse.
    #[arg(long)]
    pub column: String,
}

/// Arguments for the `fourier` subcommand.
#[derive(clap::Args)]
pub struct FourierArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Number of harmonic pairs to keep (overrides `[fourier].harmonics`).
    #[arg(long)]
    pub harmonics: Option<usize>,

    /// Samples to extrapolate past the end of the series.
    #[arg(long, default_value_t = 0)]
    pub predict: usize,

    /// Add the fitted linear trend back to the reconstruction.
    #[arg(long)]
    pub with_trend: bool,

    /// Output CSV path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `denoise` subcommand.
#[derive(clap::Args)]
pub struct DenoiseArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Wavelet name (overrides `[wavelet].name`).
    #[arg(short, long)]
    pub wavelet: Option<String>,

    /// Relative soft threshold (overrides `[wavelet].threshold`).
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Output CSV path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `wavelet-plot` subcommand.
#[derive(clap::Args)]
pub struct WaveletPlotArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Wavelet name (overrides `[wavelet].name`).
    #[arg(short, long)]
    pub wavelet: Option<String>,

    /// Output SVG path.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `resample` subcommand.
#[derive(clap::Args)]
pub struct ResampleArgs {
    /// Path to input CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Feature columns to sum (overrides `[resample].features`).
    #[arg(long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// Bucket rule such as `h`, `15min` or `D` (overrides `[resample].rule`).
    #[arg(long)]
    pub rule: Option<String>,

    /// Output CSV path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `stationarity` subcommand.
#[derive(clap::Args)]
pub struct StationarityArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Significance level (overrides `[stationarity].significance`).
    #[arg(short, long)]
    pub significance: Option<f64>,

    /// Write both results as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `normalize` subcommand.
#[derive(clap::Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Upper bound (defaults to the column maximum).
    #[arg(long)]
    pub max: Option<f64>,

    /// Lower bound (defaults to the column minimum).
    #[arg(long)]
    pub min: Option<f64>,

    /// Output CSV path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `trend` subcommand.
#[derive(clap::Args)]
pub struct TrendArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Output CSV path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
