//! Anthropometric inputs and indicator results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{MeasurementType, Severity};

/// Clinical category assigned to an indicator's z-score.
///
/// Each indicator uses its own vocabulary; see the classifier in
/// `growth-core` for the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStatus {
    /// Inside the reference band (weight-for-age, height-for-age).
    Normal,

    // Weight-for-age
    SevereUnderweight,
    Underweight,
    ElevatedWeight,

    // Height-for-age
    SevereStunting,
    Stunting,
    TallStature,

    // Weight-for-height
    SevereAcuteMalnutrition,
    AcuteMalnutrition,
    AtRiskOfMalnutrition,
    Adequate,
    AtRiskOfOverweight,
    Overweight,
    Obesity,

    // Head circumference-for-age
    SevereMicrocephaly,
    Microcephaly,
    Normocephalic,
    Macrocephaly,
    SevereMacrocephaly,
}

impl GrowthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStatus::Normal => "Normal",
            GrowthStatus::SevereUnderweight => "Severe underweight",
            GrowthStatus::Underweight => "Underweight",
            GrowthStatus::ElevatedWeight => "Elevated weight",
            GrowthStatus::SevereStunting => "Severe stunting",
            GrowthStatus::Stunting => "Stunting",
            GrowthStatus::TallStature => "Tall stature",
            GrowthStatus::SevereAcuteMalnutrition => "Severe acute malnutrition",
            GrowthStatus::AcuteMalnutrition => "Acute malnutrition",
            GrowthStatus::AtRiskOfMalnutrition => "At risk of malnutrition",
            GrowthStatus::Adequate => "Adequate (eutrophic)",
            GrowthStatus::AtRiskOfOverweight => "At risk of overweight",
            GrowthStatus::Overweight => "Overweight",
            GrowthStatus::Obesity => "Obesity",
            GrowthStatus::SevereMicrocephaly => "Severe microcephaly",
            GrowthStatus::Microcephaly => "Microcephaly",
            GrowthStatus::Normocephalic => "Normocephalic",
            GrowthStatus::Macrocephaly => "Macrocephaly",
            GrowthStatus::SevereMacrocephaly => "Severe macrocephaly",
        }
    }

    /// Returns true for the in-range category of any indicator.
    pub fn is_reference_range(&self) -> bool {
        matches!(
            self,
            GrowthStatus::Normal | GrowthStatus::Adequate | GrowthStatus::Normocephalic
        )
    }
}

impl fmt::Display for GrowthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of scoring one measurement against one reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub indicator: MeasurementType,
    /// Human-readable indicator name, e.g. "Weight-for-Age".
    pub label: String,
    pub z_score: f64,
    /// Standard-normal percentile of `z_score`, 0-100.
    pub percentile: f64,
    pub status: GrowthStatus,
    /// Tier from `|z_score|` alone, independent of `status`. A height-for-age
    /// z of 2.5 is status `Normal` with severity `Moderate`.
    pub severity: Severity,
}

/// The four anthropometric indicators for one measurement snapshot.
///
/// A `None` field means the indicator does not apply to this subject or
/// measurement; it is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthAssessment {
    pub weight_for_age: Option<IndicatorResult>,
    pub height_for_age: Option<IndicatorResult>,
    pub weight_for_height: Option<IndicatorResult>,
    pub head_circumference_for_age: Option<IndicatorResult>,
}

impl GrowthAssessment {
    /// Returns the result for one indicator.
    pub fn get(&self, indicator: MeasurementType) -> Option<&IndicatorResult> {
        match indicator {
            MeasurementType::WeightForAge => self.weight_for_age.as_ref(),
            MeasurementType::HeightForAge => self.height_for_age.as_ref(),
            MeasurementType::WeightForHeight => self.weight_for_height.as_ref(),
            MeasurementType::HeadCircumferenceForAge => self.head_circumference_for_age.as_ref(),
        }
    }

    /// Iterates over the indicators that were computed.
    pub fn iter(&self) -> impl Iterator<Item = &IndicatorResult> {
        [
            self.weight_for_age.as_ref(),
            self.height_for_age.as_ref(),
            self.weight_for_height.as_ref(),
            self.head_circumference_for_age.as_ref(),
        ]
        .into_iter()
        .flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The most severe tier across computed indicators.
    pub fn worst_severity(&self) -> Severity {
        self.iter()
            .map(|result| result.severity)
            .max()
            .unwrap_or_default()
    }
}

/// Caller-supplied measurement snapshot.
///
/// Every field is optional. Absent and non-positive values disable only the
/// indicators that depend on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub age_months: f64,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub head_circumference_cm: Option<f64>,
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
}

impl Measurement {
    #[must_use]
    pub fn at_age(age_months: f64) -> Self {
        Self {
            age_months,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_weight(mut self, kg: f64) -> Self {
        self.weight_kg = Some(kg);
        self
    }

    #[must_use]
    pub fn with_height(mut self, cm: f64) -> Self {
        self.height_cm = Some(cm);
        self
    }

    #[must_use]
    pub fn with_head_circumference(mut self, cm: f64) -> Self {
        self.head_circumference_cm = Some(cm);
        self
    }

    #[must_use]
    pub fn with_blood_pressure(mut self, systolic: f64, diastolic: f64) -> Self {
        self.systolic = Some(systolic);
        self.diastolic = Some(diastolic);
        self
    }
}

/// Collapses an optional reading to the convention the classifiers use:
/// absent, non-finite, and non-positive values all become `0.0`.
pub fn value_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}
