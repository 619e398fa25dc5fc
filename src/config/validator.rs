//! Configuration validator for Conversion-Kit
//!
//! Validates configuration values to ensure they can build a codec and a
//! measurement formatter.

use super::loader::{CodecConfig, Config, ConfigError, LoggingConfig, UnitsConfig};
use crate::text::codec::parse_substitution;
use crate::text::CodePage;

/// Largest number of decimals shown for a measurement
pub const MAX_PRECISION: usize = 15;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_codec(&config.codec)?;
        Self::validate_units(&config.units)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    fn validate_codec(codec: &CodecConfig) -> Result<(), ConfigError> {
        codec
            .code_page
            .parse::<CodePage>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        parse_substitution(&codec.substitution).map_err(|_| {
            ConfigError::Invalid(format!(
                "Substitution must be a single ASCII character, got {:?}",
                codec.substitution
            ))
        })?;

        Ok(())
    }

    fn validate_units(units: &UnitsConfig) -> Result<(), ConfigError> {
        units
            .default_length_unit()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if units.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "Precision cannot exceed {}",
                MAX_PRECISION
            )));
        }

        Ok(())
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_numeric_code_page() {
        let mut config = Config::default();
        config.codec.code_page = "28591".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_code_page() {
        let mut config = Config::default();
        config.codec.code_page = "big5".to_string();
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("code page"));
    }

    #[test]
    fn test_invalid_substitution() {
        let mut config = Config::default();
        config.codec.substitution = "".to_string();
        assert!(validate_config(&config).is_err());

        config.codec.substitution = "??".to_string();
        assert!(validate_config(&config).is_err());

        config.codec.substitution = "¤".to_string();
        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("Substitution"));
    }

    #[test]
    fn test_invalid_units() {
        let mut config = Config::default();
        config.units.default_unit = "ft".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.units.precision = MAX_PRECISION + 1;
        assert!(validate_config(&config).is_err());

        config.units.precision = MAX_PRECISION;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("log level"));

        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
