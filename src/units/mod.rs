//! Length conversion between inches and millimeters

pub mod converter;

pub use converter::{convert, convert_to_inches, convert_to_metric, MILLIMETERS_PER_INCH};
