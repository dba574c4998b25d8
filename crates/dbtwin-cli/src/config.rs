use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional settings file. Explicit CLI flags always win over file values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub records_per_table: Option<u32>,
    pub seed: Option<u64>,
    pub sample_rows: Option<u32>,
    pub include_samples: Option<bool>,
}

pub fn load_optional(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        }
        None => Ok(Settings::default()),
    }
}
