//! Writing configuration files for bookworms.
//!
//! # Configuration File Format
//!
//! ```toml
//! [input]
//! bookworms_file = "testdata/bookworms.json"
//!
//! [recommendations]
//! max_results = 10
//! truncate = false
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! Files are read back with [`load_config`](super::load_config).

use std::path::Path;

use super::Config;

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &Path) -> Result<(), ConfigFileError> {
    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigFileError::Serialize(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigFileError::Io(e.to_string()))
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}
