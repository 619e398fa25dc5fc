//! Custom error types for Conversion-Kit

use thiserror::Error;

/// Main error type for the fallible edges of the crate
///
/// The conversions themselves never fail; these errors come from parsing
/// names, measurements and hex input.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Unknown code page: {0}")]
    UnknownCodePage(String),

    #[error("Unknown length unit: {0}")]
    UnknownUnit(String),

    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    #[error("Invalid substitution character: {0}")]
    InvalidSubstitution(String),

    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

impl ConversionError {
    /// Creates an unknown code page error
    pub fn unknown_code_page(name: impl Into<String>) -> Self {
        ConversionError::UnknownCodePage(name.into())
    }

    /// Creates an unknown unit error
    pub fn unknown_unit(name: impl Into<String>) -> Self {
        ConversionError::UnknownUnit(name.into())
    }

    /// Creates an invalid measurement error
    pub fn invalid_measurement(input: impl Into<String>) -> Self {
        ConversionError::InvalidMeasurement(input.into())
    }
}
