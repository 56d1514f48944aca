mod cli;
mod config;
mod convert;
mod fourier_cmd;
mod logging;
mod resample_cmd;
mod scale_cmd;
mod stationarity_cmd;
mod wavelet_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::KairosConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = KairosConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Fourier(args) => fourier_cmd::run(args, &config),
        Command::Denoise(args) => wavelet_cmd::denoise(args, &config),
        Command::WaveletPlot(args) => wavelet_cmd::plot(args, &config),
        Command::Resample(args) => resample_cmd::run(args, &config),
        Command::Stationarity(args) => stationarity_cmd::run(args, &config),
        Command::Normalize(args) => scale_cmd::normalize_column(args),
        Command::Trend(args) => scale_cmd::trend(args),
    }
}
