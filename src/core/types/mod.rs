//! Core type definitions for Conversion-Kit
//!
//! This module contains the value types that flow through the converters:
//! measurements, owned wide and encoded text buffers, and the error type.

mod error;
mod measurement;
mod text;

// Re-export all public types
pub use error::{ConversionError, ConversionResult};
pub use measurement::{LengthUnit, Measurement};
pub use text::{EncodedText, WideText};

// Common type aliases
pub type CodePageId = u16;
