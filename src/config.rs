//! Swipe thresholds and their JSON config file.
//!
//! Defaults reproduce the feed row behavior: a 70 unit commit threshold,
//! rows flung off-screen to ±300, and a 300 unit predicted-end fling.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Drag distance past which a release dismisses the row.
pub const DEFAULT_COMMIT_THRESHOLD: f64 = 70.0;

/// Offset a dismissed row settles at.
pub const DEFAULT_DISMISS_OFFSET: f64 = 300.0;

/// Predicted end translation that dismisses regardless of distance.
pub const DEFAULT_FLING_THRESHOLD: f64 = 300.0;

/// Settle animation length assumed when the host does not report completion.
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 350;

const CONFIG_DIR_NAME: &str = "swipe-dismiss";
const CONFIG_FILE_NAME: &str = "config.json";

/// Tunable swipe thresholds.
///
/// # Example
///
/// ```
/// use swipe_dismiss::config::SwipeConfig;
///
/// let config: SwipeConfig = serde_json::from_str(r#"{"commit_threshold": 90}"#).unwrap();
/// assert_eq!(config.commit_threshold, 90.0);
/// assert_eq!(config.dismiss_offset, 300.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub commit_threshold: f64,
    pub dismiss_offset: f64,
    pub fling_threshold: f64,
    pub settle_duration_ms: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            dismiss_offset: DEFAULT_DISMISS_OFFSET,
            fling_threshold: DEFAULT_FLING_THRESHOLD,
            settle_duration_ms: DEFAULT_SETTLE_DURATION_MS,
        }
    }
}

impl SwipeConfig {
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    /// Default config file location (`<config dir>/swipe-dismiss/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SwipeConfig =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::debug!(?path, ?config, "Loaded swipe config");
        Ok(config)
    }

    /// Load from the default location, falling back to defaults when the file
    /// does not exist. A file that exists but is broken is still an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Check that every distance is finite and positive and the settle
    /// duration is non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let distances = [
            ("commit_threshold", self.commit_threshold),
            ("dismiss_offset", self.dismiss_offset),
            ("fling_threshold", self.fling_threshold),
        ];
        for (field, value) in distances {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be a positive finite number, got {}", value),
                });
            }
        }
        if self.settle_duration_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "settle_duration_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
