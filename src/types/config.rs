//! Configuration for Trajeto.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::TrajetoResult;

/// Main configuration for Trajeto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Route history settings.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Route history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of routes kept in the recency cache.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Maximum number of entries returned in each view.
    #[serde(default = "default_max_shown")]
    pub max_shown: usize,

    /// Prefix for per-user storage keys.
    #[serde(default = "default_namespace_prefix")]
    pub namespace_prefix: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_shown: default_max_shown(),
            namespace_prefix: default_namespace_prefix(),
        }
    }
}

fn default_capacity() -> usize {
    10
}

fn default_max_shown() -> usize {
    6
}

fn default_namespace_prefix() -> String {
    "metro:".to_string()
}

/// Storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite database path.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from(".trajeto/trajeto.db")
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> TrajetoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> TrajetoResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            history: HistoryConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    /// Tries to load configuration from current directory or uses default.
    pub fn load_or_default() -> Self {
        Self::load("trajeto.toml").unwrap_or_else(|_| Self::default_config())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
