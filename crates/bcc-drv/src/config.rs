//! Configuration for the bcc driver.
//!
//! This module handles loading the `bcc.toml` settings file.
//! Command-line flags are applied on top of whatever is loaded here.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::{config_dir, home_dir};
use serde::Deserialize;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "bcc.toml";

/// Source file lexed when none is given.
pub const DEFAULT_SOURCE: &str = "main.bc";

/// Driver configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Source file to lex.
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// How tokens are written out.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Also print the end-of-file sentinel.
    #[serde(default)]
    pub include_eof: bool,
}

/// Token output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Display` line per token: code, then the text in backticks.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            verbose: false,
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory (`~/.config/bcc/`)
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DriverError::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("bcc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("bcc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
