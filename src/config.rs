use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "kairos.toml";

/// Top-level Kairos configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KairosConfig {
    /// Fourier reconstruction settings.
    #[serde(default)]
    pub fourier: FourierToml,

    /// Wavelet denoising and plot settings.
    #[serde(default)]
    pub wavelet: WaveletToml,

    /// Resample settings.
    #[serde(default)]
    pub resample: ResampleToml,

    /// Stationarity test settings.
    #[serde(default)]
    pub stationarity: StationarityToml,
}

impl KairosConfig {
    /// Loads the config at `path`, or `kairos.toml` if it exists, or defaults.
    ///
    /// An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !fallback.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: KairosConfig = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FourierToml {
    #[serde(default = "default_harmonics")]
    pub harmonics: usize,
}

impl Default for FourierToml {
    fn default() -> Self {
        Self {
            harmonics: default_harmonics(),
        }
    }
}

fn default_harmonics() -> usize {
    kairos_fourier::DEFAULT_HARMONICS
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveletToml {
    #[serde(default = "default_wavelet_name")]
    pub name: String,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_figsize")]
    pub figsize: [f64; 2],
}

impl Default for WaveletToml {
    fn default() -> Self {
        Self {
            name: default_wavelet_name(),
            threshold: default_threshold(),
            figsize: default_figsize(),
        }
    }
}

fn default_wavelet_name() -> String {
    "sym4".to_string()
}
fn default_threshold() -> f64 {
    kairos_wavelet::DEFAULT_THRESHOLD
}
fn default_figsize() -> [f64; 2] {
    [10.0, 10.0]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResampleToml {
    #[serde(default = "default_rule")]
    pub rule: String,
    #[serde(default = "default_features")]
    pub features: Vec<String>,
    #[serde(default = "default_date_column")]
    pub date_column: String,
}

impl Default for ResampleToml {
    fn default() -> Self {
        Self {
            rule: default_rule(),
            features: default_features(),
            date_column: default_date_column(),
        }
    }
}

fn default_rule() -> String {
    "h".to_string()
}
fn default_features() -> Vec<String> {
    vec!["Load".to_string()]
}
fn default_date_column() -> String {
    kairos_io::DEFAULT_DATE_COLUMN.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationarityToml {
    #[serde(default = "default_significance")]
    pub significance: f64,
}

impl Default for StationarityToml {
    fn default() -> Self {
        Self {
            significance: default_significance(),
        }
    }
}

fn default_significance() -> f64 {
    kairos_stationarity::DEFAULT_SIGNIFICANCE
}
