use growth_model::{
    BloodPressureResult, Classification, GrowthAssessment, Measurement, MeasurementType, Sex,
    value_or_zero,
};
use growth_standards::GrowthStandards;

use crate::{blood_pressure, growth, lms};

/// Growth and blood-pressure classifier bound to one set of reference tables.
///
/// Cheap to copy and safe to share across threads; the registry is never
/// mutated.
#[derive(Debug, Clone, Copy)]
pub struct GrowthClassifier<'a> {
    standards: &'a GrowthStandards,
}

impl<'a> GrowthClassifier<'a> {
    pub fn new(standards: &'a GrowthStandards) -> Self {
        Self { standards }
    }

    pub fn standards(&self) -> &'a GrowthStandards {
        self.standards
    }

    /// See [`lms::z_score`].
    pub fn z_score(&self, kind: MeasurementType, sex: Sex, key: f64, value: f64) -> f64 {
        lms::z_score(self.standards, kind, sex, key, value)
    }

    /// See [`growth::classify_growth`].
    pub fn classify_growth(
        &self,
        sex: Sex,
        age_months: f64,
        weight_kg: f64,
        height_cm: f64,
        head_circumference_cm: f64,
    ) -> GrowthAssessment {
        growth::classify_growth(
            self.standards,
            sex,
            age_months,
            weight_kg,
            height_cm,
            head_circumference_cm,
        )
    }

    /// See [`blood_pressure::classify_blood_pressure`].
    pub fn classify_blood_pressure(
        &self,
        sex: Sex,
        age_months: f64,
        height_cm: f64,
        systolic: f64,
        diastolic: f64,
    ) -> Option<BloodPressureResult> {
        blood_pressure::classify_blood_pressure(
            self.standards,
            sex,
            age_months,
            height_cm,
            systolic,
            diastolic,
        )
    }

    /// Growth indicators and blood pressure for one snapshot.
    pub fn classify(&self, sex: Sex, measurement: &Measurement) -> Classification {
        let weight = value_or_zero(measurement.weight_kg);
        let height = value_or_zero(measurement.height_cm);
        Classification {
            sex,
            age_months: measurement.age_months,
            growth: self.classify_growth(
                sex,
                measurement.age_months,
                weight,
                height,
                value_or_zero(measurement.head_circumference_cm),
            ),
            blood_pressure: self.classify_blood_pressure(
                sex,
                measurement.age_months,
                height,
                value_or_zero(measurement.systolic),
                value_or_zero(measurement.diastolic),
            ),
        }
    }
}

impl Default for GrowthClassifier<'static> {
    /// Classifier over the built-in tables.
    fn default() -> Self {
        Self::new(GrowthStandards::builtin())
    }
}
