//! Application configuration persisted as TOML under the `.spamguard` root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default base path of the classification service API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Application settings loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base path of the classification service, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub training: TrainingSettings,
}

/// Pacing of the training workflow's presentation-only delays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainingSettings {
    /// How long the "Load Dataset" step stays visible before advancing.
    #[serde(default = "default_dataset_phase_ms")]
    pub dataset_phase_ms: u64,
    /// Pause between reaching "Complete" and unlocking the composer.
    #[serde(default = "default_completion_delay_ms")]
    pub completion_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            training: TrainingSettings::default(),
        }
    }
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            dataset_phase_ms: default_dataset_phase_ms(),
            completion_delay_ms: default_completion_delay_ms(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_dataset_phase_ms() -> u64 {
    1_000
}

fn default_completion_delay_ms() -> u64 {
    1_500
}

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config directory could not be resolved or created.
    #[error("Failed to resolve config location: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file did not parse as TOML.
    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The config could not be serialized to TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Load the configuration, falling back to defaults when no file exists yet.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = app_dirs::config_file_path()?;
    if path.exists() {
        load_from_path(&path)
    } else {
        Ok(AppConfig::default())
    }
}

/// Load configuration from a specific TOML file.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
