//! Body-mass-index computation from raw weight and height entries.
//!
//! The computation is pure and order-independent: it can be run on any pair
//! of raw entry strings, and unparseable input degrades to "no metric"
//! rather than an error.

use std::fmt;

/// A computed body-mass index, rounded to one decimal place for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMassIndex(f64);

impl BodyMassIndex {
    /// Get the rounded value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for BodyMassIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Compute the body-mass index from raw weight and height entries.
///
/// Both entries are normalized before parsing: a decimal comma becomes a
/// decimal point, then everything that is not a digit or a point is
/// stripped. A height above 3 is implausible in meters and is read as
/// centimeters. Returns `None` when either entry does not parse to a
/// positive number.
pub fn body_mass_index(weight_raw: &str, height_raw: &str) -> Option<BodyMassIndex> {
    let weight = parse_decimal(weight_raw)?;
    let height = parse_decimal(height_raw)?;

    let height_m = if height > 3.0 { height / 100.0 } else { height };
    let bmi = weight / (height_m * height_m);

    Some(BodyMassIndex((bmi * 10.0).round() / 10.0))
}

/// Parse a user-entered decimal, tolerating a comma separator and unit
/// noise like `"70 kg"`. Non-positive results count as unparseable.
fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value = cleaned.parse::<f64>().ok()?;
    (value > 0.0).then_some(value)
}
