//! Conversion-Kit: inch/millimeter scaling and single-byte code page text marshaling
//!
//! The two halves are independent. [`units`] converts lengths between the
//! imperial and metric systems; [`text`] converts UTF-16 wide text to a
//! single-byte code page and back, substituting what the code page cannot
//! represent.

pub mod config;
pub mod core;
pub mod text;
pub mod units;

// Re-export main types from core module
pub use crate::core::types::{
    CodePageId, ConversionError, ConversionResult, EncodedText, LengthUnit, Measurement, WideText,
};

pub use crate::text::{bytes_to_wide, wide_to_bytes, CodePage, TextCodec};
pub use crate::units::{convert_to_inches, convert_to_metric, MILLIMETERS_PER_INCH};
