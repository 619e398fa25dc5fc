//! Configuration loader for Conversion-Kit
//!
//! Handles loading configuration from TOML files and merging with defaults.

use super::defaults::default_config;
use crate::core::types::{ConversionResult, LengthUnit};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File read by [`load_config`] when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "conversion-kit.toml";

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_codec")]
    pub codec: CodecConfig,

    #[serde(default = "default_units")]
    pub units: UnitsConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

/// Text codec configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Code page name or numeric identifier
    #[serde(default = "default_code_page")]
    pub code_page: String,
    #[serde(default = "default_substitution")]
    pub substitution: String,
}

/// Unit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsConfig {
    /// Unit assumed for values given without one
    #[serde(default = "default_unit")]
    pub default_unit: String,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl UnitsConfig {
    pub fn default_length_unit(&self) -> ConversionResult<LengthUnit> {
        self.default_unit.parse()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration, or returns defaults if the file doesn't exist
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(&self) -> Result<Config, ConfigError> {
        match self.load() {
            Err(ConfigError::FileNotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads configuration from the default location
pub fn load_config() -> Result<Config, ConfigError> {
    ConfigLoader::new(DEFAULT_CONFIG_FILE).load_or_default()
}

// Default functions for serde
fn default_codec() -> CodecConfig {
    let defaults = default_config();
    CodecConfig {
        code_page: defaults.codec.code_page,
        substitution: defaults.codec.substitution,
    }
}

fn default_units() -> UnitsConfig {
    let defaults = default_config();
    UnitsConfig {
        default_unit: defaults.units.default_unit,
        precision: defaults.units.precision,
    }
}

fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_config().logging.level,
    }
}

// Individual field defaults
fn default_code_page() -> String {
    default_config().codec.code_page
}

fn default_substitution() -> String {
    default_config().codec.substitution
}

fn default_unit() -> String {
    default_config().units.default_unit
}

fn default_precision() -> usize {
    default_config().units.precision
}

fn default_log_level() -> String {
    default_config().logging.level
}

impl Default for Config {
    fn default() -> Self {
        Config {
            codec: default_codec(),
            units: default_units(),
            logging: default_logging(),
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        default_codec()
    }
}
