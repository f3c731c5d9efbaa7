//! CLI configuration and settings management

use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = "western.toml";

/// CLI configuration loaded from a config file, or defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Showdown settings
    pub showdown: ShowdownConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when no command-line flag picks one
    pub level: LogLevel,

    /// Log output format
    pub format: LogFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowdownConfig {
    /// Log the surviving age once the showdown is over
    pub announce: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl CliConfig {
    /// Load configuration from file, falling back to defaults
    ///
    /// An explicit path must exist and parse. Otherwise `western.toml` in the
    /// working directory wins over `<config dir>/western/config.toml`.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from_file(local);
        }

        if let Some(system) = Self::default_config_path() {
            if system.is_file() {
                return Self::load_from_file(&system);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            span: e.span(),
            message: e.message().to_string(),
            src: content.clone(),
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default config file path for the current user
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("western").join("config.toml"))
    }
}
