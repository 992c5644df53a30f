//! Configuration management.

mod file_config;

pub use file_config::{save_config, ConfigFileError};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "bookworms.toml";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input settings
    #[serde(default)]
    pub input: InputConfig,

    /// Recommendation settings
    #[serde(default)]
    pub recommendations: RecommendationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Bookworms JSON file used when `--file` is not given
    #[serde(default = "default_bookworms_file")]
    pub bookworms_file: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            bookworms_file: default_bookworms_file(),
        }
    }
}

fn default_bookworms_file() -> PathBuf {
    PathBuf::from("testdata/bookworms.json")
}

/// Recommendation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Number of recommendations asked for
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Keep only the best `max_results` recommendations
    #[serde(default)]
    pub truncate: bool,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            truncate: false,
        }
    }
}

fn default_max_results() -> usize {
    10
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when neither `RUST_LOG` nor `-v` is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Load configuration with `BOOKWORMS_*` environment overrides on top of an optional file
///
/// Nested keys use a double underscore, e.g. `BOOKWORMS_RECOMMENDATIONS__MAX_RESULTS=5`.
/// Without a file the overrides apply on top of the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, config::ConfigError> {
    build_config(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("BOOKWORMS")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build_config(
    path: Option<&Path>,
    env: config::Environment,
) -> Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    builder.add_source(env).build()?.try_deserialize()
}

/// Look for a configuration file in the working directory, then in the user config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("bookworms").join("config.toml"))
        .filter(|path| path.is_file())
}
