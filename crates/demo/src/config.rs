//! Demo configuration.
//!
//! Loaded from an optional JSON file. Every field falls back to the
//! defaults of the stock demo run, so `{}` is a valid config.

use std::path::{Path, PathBuf};

use techind_indicators::{DEFAULT_BOLLINGER_PERIOD, DEFAULT_BOLLINGER_STD_DEV, DEFAULT_RSI_PERIOD};
use thiserror::Error;

/// Environment variable naming the config file when no CLI argument is given.
pub const CONFIG_ENV_VAR: &str = "TECHIND_DEMO_CONFIG";

const MAX_DECIMALS: usize = 10;

/// Errors raised while loading or validating the demo config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`DemoConfig`]
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but holds unusable values
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Output format of the demo report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One line per series, rounded
    #[default]
    Text,
    /// Single JSON document, unrounded
    Json,
}

/// Indicator parameters used by the demo.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndicatorConfig {
    /// SMA window
    #[serde(default = "default_ma_period")]
    pub sma_period: usize,
    /// EMA span
    #[serde(default = "default_ma_period")]
    pub ema_period: usize,
    /// RSI window
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,
    /// Bollinger window
    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,
    /// Bollinger standard deviation multiplier
    #[serde(default = "default_bollinger_std_dev")]
    pub bollinger_std_dev: f64,
}

fn default_ma_period() -> usize {
    10
}

fn default_rsi_period() -> usize {
    DEFAULT_RSI_PERIOD
}

fn default_bollinger_period() -> usize {
    DEFAULT_BOLLINGER_PERIOD
}

fn default_bollinger_std_dev() -> f64 {
    DEFAULT_BOLLINGER_STD_DEV
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_period: default_ma_period(),
            ema_period: default_ma_period(),
            rsi_period: default_rsi_period(),
            bollinger_period: default_bollinger_period(),
            bollinger_std_dev: default_bollinger_std_dev(),
        }
    }
}

/// Top-level demo configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DemoConfig {
    /// Number of synthetic prices
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Center of the synthetic prices
    #[serde(default = "default_base_price")]
    pub base_price: f64,
    /// Prices are drawn uniformly from `base_price ± jitter`
    #[serde(default = "default_jitter")]
    pub jitter: f64,
    /// RNG seed; a time-derived seed is used when absent
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Decimal places in text output
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Report format
    #[serde(default)]
    pub output: OutputFormat,
    /// Indicator parameters
    #[serde(default)]
    pub indicators: IndicatorConfig,
}

fn default_samples() -> usize {
    50
}

fn default_base_price() -> f64 {
    100.0
}

fn default_jitter() -> f64 {
    1.0
}

fn default_decimals() -> usize {
    2
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            base_price: default_base_price(),
            jitter: default_jitter(),
            rng_seed: None,
            decimals: default_decimals(),
            output: OutputFormat::default(),
            indicators: IndicatorConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Parses and validates a config from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the errors of [`DemoConfig::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks the demo-level fields.
    ///
    /// Indicator periods are left to the indicators themselves, which
    /// reject what they cannot compute.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] describing the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::Invalid("samples must be > 0".to_string()));
        }
        if !self.base_price.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "base_price must be finite, got {}",
                self.base_price
            )));
        }
        // the sampled range `-jitter..jitter` must have a finite width
        if !(2.0 * self.jitter).is_finite() || self.jitter < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "jitter must be >= 0 and at most {:e}, got {}",
                f64::MAX / 2.0,
                self.jitter
            )));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "decimals must be <= {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}

/// Resolves the config path.
///
/// The first CLI argument wins; otherwise `TECHIND_DEMO_CONFIG` is used
/// if set. `None` means the built-in defaults apply.
pub fn resolve_config_path(cli_arg: Option<String>) -> Option<PathBuf> {
    cli_arg
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

/// Loads the config from the resolved path, or the defaults.
///
/// # Errors
/// See [`DemoConfig::from_file`].
pub fn load_config(path: Option<&Path>) -> Result<DemoConfig, ConfigError> {
    match path {
        Some(path) => DemoConfig::from_file(path),
        None => Ok(DemoConfig::default()),
    }
}
