//! Default configuration values for Conversion-Kit

use serde::{Deserialize, Serialize};

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub codec: CodecDefaults,
    pub units: UnitsDefaults,
    pub logging: LoggingDefaults,
}

/// Default text codec configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecDefaults {
    pub code_page: String,
    pub substitution: String,
}

/// Default unit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsDefaults {
    pub default_unit: String,
    pub precision: usize,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
}

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        codec: CodecDefaults {
            code_page: "windows-1252".to_string(),
            substitution: "?".to_string(),
        },
        units: UnitsDefaults {
            default_unit: "in".to_string(),
            precision: 3,
        },
        logging: LoggingDefaults {
            level: "info".to_string(),
        },
    }
}
