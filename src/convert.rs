//! Helpers shared by the command modules: argument conversion and output paths.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use kairos_wavelet::Wavelet;

use crate::cli::SeriesArgs;

/// Reads the series named by `args`.
pub fn read_series(args: &SeriesArgs) -> Result<Vec<f64>> {
    info!(path = %args.input.display(), column = %args.column, "reading series");
    kairos_io::read_series(&args.input, &args.column).with_context(|| {
        format!(
            "failed to read column '{}' from {}",
            args.column,
            args.input.display()
        )
    })
}

/// `explicit`, or `<stem>_<suffix>.<ext>` next to `input`.
pub fn output_path(explicit: Option<PathBuf>, input: &Path, suffix: &str, ext: &str) -> PathBuf {
    explicit.unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "series".to_string());
        input.with_file_name(format!("{stem}_{suffix}.{ext}"))
    })
}

/// Writes one column of values to CSV.
pub fn write_series(path: &Path, header: &str, values: &[f64]) -> Result<()> {
    kairos_io::write_series(path, header, values)
        .with_context(|| format!("failed to write CSV: {}", path.display()))?;
    info!(path = %path.display(), rows = values.len(), "output written");
    Ok(())
}

/// Resolves a wavelet from the CLI flag, falling back to the config name.
pub fn wavelet(flag: Option<&str>, config_name: &str) -> Result<Wavelet> {
    let name = flag.unwrap_or(config_name);
    Wavelet::from_name(name).with_context(|| format!("invalid wavelet '{name}'"))
}
