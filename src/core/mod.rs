//! Core module containing fundamental types for Conversion-Kit
//!
//! This module provides the building blocks shared by the unit converter
//! and the text codec, including the measurement and text buffer types
//! and the error type.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    ConversionError,
    ConversionResult,
    EncodedText,
    LengthUnit,
    Measurement,
    WideText,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
