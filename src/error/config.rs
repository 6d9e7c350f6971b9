//! Configuration loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a [`SwipeConfig`](crate::config::SwipeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "E_CONFIG_READ",
            ConfigError::Parse { .. } => "E_CONFIG_PARSE",
            ConfigError::InvalidValue { .. } => "E_CONFIG_VALUE",
        }
    }
}
