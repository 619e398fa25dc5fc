//! Configuration module for Conversion-Kit
//!
//! Provides configuration loading, validation, and default settings
//! for the text codec, the unit converter and logging.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, ConfigDefaults};
pub use loader::{load_config, ConfigLoader, DEFAULT_CONFIG_FILE};
pub use validator::{validate_config, ConfigValidator, MAX_PRECISION};

// Re-export the configuration structures
pub use loader::{CodecConfig, Config, LoggingConfig, UnitsConfig};

// Configuration-related error type
pub use loader::ConfigError;

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
