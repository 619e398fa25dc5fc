//! Inch/millimeter scaling
//!
//! All functions are plain arithmetic: NaN and infinities pass through
//! the multiplication or division untouched.

use crate::core::types::LengthUnit;

/// Millimeters in one inch
pub const MILLIMETERS_PER_INCH: f64 = 25.4;

/// Converts a length to millimeters
///
/// Returns `value` unchanged when `is_metric` is set, otherwise treats it as
/// inches and scales it by [`MILLIMETERS_PER_INCH`].
pub fn convert_to_metric(value: f64, is_metric: bool) -> f64 {
    if is_metric {
        value
    } else {
        value * MILLIMETERS_PER_INCH
    }
}

/// Converts a length in millimeters to inches
pub fn convert_to_inches(value: f64) -> f64 {
    value / MILLIMETERS_PER_INCH
}

/// Converts a length between two units
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    match (from, to) {
        (LengthUnit::Inch, LengthUnit::Millimeter) => convert_to_metric(value, false),
        (LengthUnit::Millimeter, LengthUnit::Inch) => convert_to_inches(value),
        _ => value,
    }
}
