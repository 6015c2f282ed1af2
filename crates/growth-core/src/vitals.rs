//! Parsing of free-text vital signs.
//!
//! Measurements arrive as form text: `"12.5"`, `"12,5 kg"`, `"98 cm"`.
//! Parsing is lenient; the leading number is taken and trailing text ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VitalsError;

/// Leading decimal number of `text`, accepting a comma as decimal separator.
///
/// `None` for blank text or text that does not start with a number.
pub fn parse_measurement(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_separator = false;
    for (index, ch) in trimmed.char_indices() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' | ',' if !seen_separator => seen_separator = true,
            '+' | '-' if index == 0 => {}
            _ => break,
        }
        end = index + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    let number = trimmed[..end].replace(',', ".");
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Like [`parse_measurement`] but requires a positive value.
pub fn parse_positive(field: &'static str, text: &str) -> Result<f64, VitalsError> {
    parse_measurement(text)
        .filter(|value| *value > 0.0)
        .ok_or_else(|| VitalsError::InvalidMeasurement {
            field,
            value: text.to_string(),
        })
}

/// A systolic/diastolic pair in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureReading {
    pub systolic: f64,
    pub diastolic: f64,
}

impl BloodPressureReading {
    pub const fn new(systolic: f64, diastolic: f64) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }
}

impl FromStr for BloodPressureReading {
    type Err = VitalsError;

    /// Parses `"120/80"`, tolerating spaces and a trailing unit
    /// (`"120 / 80 mmHg"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VitalsError::InvalidBloodPressure(s.to_string());
        let (systolic, diastolic) = s.split_once('/').ok_or_else(invalid)?;
        let systolic = parse_measurement(systolic).filter(|v| *v > 0.0);
        let diastolic = parse_measurement(diastolic).filter(|v| *v > 0.0);
        match (systolic, diastolic) {
            (Some(systolic), Some(diastolic)) => Ok(Self::new(systolic, diastolic)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for BloodPressureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// Body-mass index in kg/m². `None` unless both inputs are positive.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !(weight_kg > 0.0 && height_cm > 0.0) {
        return None;
    }
    let meters = height_cm / 100.0;
    Some(weight_kg / (meters * meters))
}
