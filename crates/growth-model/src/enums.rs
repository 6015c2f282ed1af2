//! Type-safe enumerations for growth-standard lookups.
//!
//! These enums replace the free-form strings that patient records carry
//! (`"male"`, `"wfa"`, ...) with closed sets the reference tables can be
//! keyed on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Biological sex as recorded on the patient chart.
///
/// Reference curves exist only for `Male` and `Female`. `Unspecified`
/// subjects are never analysed: every classifier declines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Unspecified,
}

impl Sex {
    /// Sexes that have reference tables.
    pub const SUPPORTED: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unspecified => "unspecified",
        }
    }

    /// Returns true if growth curves exist for this sex.
    pub fn is_supported(&self) -> bool {
        matches!(self, Sex::Male | Sex::Female)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ModelError;

    /// Accepts full names, single letters, and the numeric codes used in
    /// reference datasets (1 = male, 2 = female). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "male" | "m" | "1" | "boy" | "boys" => Ok(Sex::Male),
            "female" | "f" | "2" | "girl" | "girls" => Ok(Sex::Female),
            "unspecified" | "other" | "u" | "unknown" => Ok(Sex::Unspecified),
            _ => Err(ModelError::UnknownSex(s.to_string())),
        }
    }
}

/// What a reference curve measures, and against what.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    /// Weight (kg) against age in months.
    WeightForAge,
    /// Height or recumbent length (cm) against age in months.
    HeightForAge,
    /// Head circumference (cm) against age in months.
    HeadCircumferenceForAge,
    /// Weight (kg) against length/height in cm.
    WeightForHeight,
}

impl MeasurementType {
    pub const ALL: [MeasurementType; 4] = [
        MeasurementType::WeightForAge,
        MeasurementType::HeightForAge,
        MeasurementType::WeightForHeight,
        MeasurementType::HeadCircumferenceForAge,
    ];

    /// Short code used in reference CSV files.
    pub fn as_code(&self) -> &'static str {
        match self {
            MeasurementType::WeightForAge => "wfa",
            MeasurementType::HeightForAge => "hfa",
            MeasurementType::HeadCircumferenceForAge => "hca",
            MeasurementType::WeightForHeight => "wfh",
        }
    }

    /// Human-readable indicator name.
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementType::WeightForAge => "Weight-for-Age",
            MeasurementType::HeightForAge => "Height-for-Age",
            MeasurementType::HeadCircumferenceForAge => "Head Circumference-for-Age",
            MeasurementType::WeightForHeight => "Weight-for-Height",
        }
    }

    /// The independent variable the table is indexed by.
    pub fn key_kind(&self) -> KeyKind {
        match self {
            MeasurementType::WeightForHeight => KeyKind::LengthCm,
            _ => KeyKind::AgeMonths,
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MeasurementType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "wfa" | "weightforage" | "weightage" => Ok(MeasurementType::WeightForAge),
            "hfa" | "lfa" | "heightforage" | "lengthforage" | "heightage" => {
                Ok(MeasurementType::HeightForAge)
            }
            "hca" | "hcfa" | "headcircumferenceforage" | "hcage" => {
                Ok(MeasurementType::HeadCircumferenceForAge)
            }
            "wfh" | "wfl" | "weightforheight" | "weightforlength" | "weightheight" => {
                Ok(MeasurementType::WeightForHeight)
            }
            _ => Err(ModelError::UnknownMeasurementType(s.to_string())),
        }
    }
}

/// Unit of a reference table's key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    AgeMonths,
    LengthCm,
}

impl KeyKind {
    pub fn unit(&self) -> &'static str {
        match self {
            KeyKind::AgeMonths => "months",
            KeyKind::LengthCm => "cm",
        }
    }
}

/// Clinical severity tier, ordered from least to most severe.
///
/// The tier depends only on the z-score, never on the indicator, so callers
/// can colour-code any result consistently.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Tier for a standard score: |z| >= 3 severe, |z| >= 2 moderate,
    /// |z| > 1 mild. Non-finite scores are treated as normal.
    pub fn from_z_score(z: f64) -> Self {
        let magnitude = z.abs();
        if !magnitude.is_finite() {
            return Severity::Normal;
        }
        if magnitude >= 3.0 {
            Severity::Severe
        } else if magnitude >= 2.0 {
            Severity::Moderate
        } else if magnitude > 1.0 {
            Severity::Mild
        } else {
            Severity::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Blood-pressure channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BpChannel {
    Systolic,
    Diastolic,
}

impl BpChannel {
    pub const ALL: [BpChannel; 2] = [BpChannel::Systolic, BpChannel::Diastolic];

    pub fn as_str(&self) -> &'static str {
        match self {
            BpChannel::Systolic => "systolic",
            BpChannel::Diastolic => "diastolic",
        }
    }
}

impl fmt::Display for BpChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" f ".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("2".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("other".parse::<Sex>().unwrap(), Sex::Unspecified);
        assert!("x".parse::<Sex>().is_err());
    }

    #[test]
    fn test_measurement_type_from_str() {
        assert_eq!(
            "wfa".parse::<MeasurementType>().unwrap(),
            MeasurementType::WeightForAge
        );
        assert_eq!(
            "Weight-for-Length".parse::<MeasurementType>().unwrap(),
            MeasurementType::WeightForHeight
        );
        assert_eq!(
            "head_circumference_for_age".parse::<MeasurementType>().unwrap(),
            MeasurementType::HeadCircumferenceForAge
        );
        assert!("bmi".parse::<MeasurementType>().is_err());
    }

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::from_z_score(-3.0), Severity::Severe);
        assert_eq!(Severity::from_z_score(-2.999), Severity::Moderate);
        assert_eq!(Severity::from_z_score(-2.0), Severity::Moderate);
        assert_eq!(Severity::from_z_score(-1.5), Severity::Mild);
        assert_eq!(Severity::from_z_score(-1.0), Severity::Normal);
        assert_eq!(Severity::from_z_score(0.0), Severity::Normal);
        assert_eq!(Severity::from_z_score(2.5), Severity::Moderate);
        assert_eq!(Severity::from_z_score(3.2), Severity::Severe);
        assert_eq!(Severity::from_z_score(f64::NAN), Severity::Normal);
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Normal < Severity::Mild);
        assert!(Severity::Moderate < Severity::Severe);
    }

    #[test]
    fn test_key_kind() {
        assert_eq!(MeasurementType::WeightForHeight.key_kind(), KeyKind::LengthCm);
        assert_eq!(MeasurementType::HeightForAge.key_kind(), KeyKind::AgeMonths);
    }
}
