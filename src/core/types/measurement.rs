//! Length measurement carried together with its unit system

use super::error::{ConversionError, ConversionResult};
use crate::units;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length units handled by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Inch,
    Millimeter,
}

impl LengthUnit {
    /// Short symbol used when displaying values
    pub const fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Inch => "in",
            LengthUnit::Millimeter => "mm",
        }
    }

    /// Whether the unit belongs to the metric system
    pub const fn is_metric(&self) -> bool {
        matches!(self, LengthUnit::Millimeter)
    }

    pub const fn from_metric_flag(is_metric: bool) -> Self {
        if is_metric {
            LengthUnit::Millimeter
        } else {
            LengthUnit::Inch
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" | "\"" | "imperial" => Ok(LengthUnit::Inch),
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" | "metric" => {
                Ok(LengthUnit::Millimeter)
            }
            _ => Err(ConversionError::unknown_unit(s.trim())),
        }
    }
}

/// A length magnitude plus whether it is already expressed in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub is_metric: bool,
}

impl Measurement {
    pub const fn new(value: f64, is_metric: bool) -> Self {
        Measurement { value, is_metric }
    }

    pub const fn inches(value: f64) -> Self {
        Measurement::new(value, false)
    }

    pub const fn millimeters(value: f64) -> Self {
        Measurement::new(value, true)
    }

    pub const fn with_unit(value: f64, unit: LengthUnit) -> Self {
        Measurement::new(value, unit.is_metric())
    }

    pub const fn unit(&self) -> LengthUnit {
        LengthUnit::from_metric_flag(self.is_metric)
    }

    /// Returns the same length expressed in millimeters
    pub fn to_metric(&self) -> Self {
        Measurement::millimeters(units::convert_to_metric(self.value, self.is_metric))
    }

    /// Returns the same length expressed in inches
    pub fn to_inches(&self) -> Self {
        if self.is_metric {
            Measurement::inches(units::convert_to_inches(self.value))
        } else {
            *self
        }
    }

    pub fn to_unit(&self, unit: LengthUnit) -> Self {
        match unit {
            LengthUnit::Inch => self.to_inches(),
            LengthUnit::Millimeter => self.to_metric(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, self.unit()),
            None => write!(f, "{} {}", self.value, self.unit()),
        }
    }
}

impl FromStr for Measurement {
    type Err = ConversionError;

    /// Parses `"<number> <unit>"`; the space is optional (`"12in"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split_whitespace().collect();

        let (number, unit) = match parts.as_slice() {
            [number, unit] => (*number, *unit),
            [single] => {
                // Letters are peeled off as the unit, so "inf" or "NaN" only
                // parse as numbers when the unit is a separate word.
                let split = single.trim_end_matches(|c: char| c.is_alphabetic() || c == '"').len();
                single.split_at(split)
            }
            _ => return Err(ConversionError::invalid_measurement(trimmed)),
        };

        if unit.is_empty() {
            return Err(ConversionError::invalid_measurement(trimmed));
        }

        let value = number
            .parse::<f64>()
            .map_err(|_| ConversionError::invalid_measurement(trimmed))?;
        let unit = unit.parse::<LengthUnit>()?;

        Ok(Measurement::with_unit(value, unit))
    }
}
