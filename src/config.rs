use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub backtrace: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            backtrace: false,
        }
    }
}

/// Blend weights for the engagement estimator.
///
/// Empirically tuned free parameters. The post-type ratio dominates the
/// blend; video posts draw far more engagements than photos and albums.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_weekday_weight")]
    pub weekday: f64,
    #[serde(default = "default_hour_weight")]
    pub hour: f64,
    #[serde(default = "default_month_weight")]
    pub month: f64,
    #[serde(default = "default_kind_weight")]
    pub kind: f64,
    #[serde(default = "default_keyword_weight")]
    pub keyword: f64,
}

fn default_weekday_weight() -> f64 {
    0.0001
}

fn default_hour_weight() -> f64 {
    0.0005
}

fn default_month_weight() -> f64 {
    0.0009
}

fn default_kind_weight() -> f64 {
    4.712
}

fn default_keyword_weight() -> f64 {
    0.476
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            weekday: default_weekday_weight(),
            hour: default_hour_weight(),
            month: default_month_weight(),
            kind: default_kind_weight(),
            keyword: default_keyword_weight(),
        }
    }
}

/// Default locations of the input and output data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_training_path")]
    pub training_path: PathBuf,
    #[serde(default = "default_holdout_path")]
    pub holdout_path: PathBuf,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_training_path() -> PathBuf {
    PathBuf::from("training_set.csv")
}

fn default_holdout_path() -> PathBuf {
    PathBuf::from("holdout_set.csv")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("holdout_predictions.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            training_path: default_training_path(),
            holdout_path: default_holdout_path(),
            output_path: default_output_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default config file paths.
    ///
    /// Tries `config.toml` first, then `config.example.toml`, then falls
    /// back to built-in defaults when neither exists.
    pub fn load() -> crate::Result<Self> {
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            Self::from_file("config.example.toml")
        } else {
            Ok(Self::default())
        }
    }
}
