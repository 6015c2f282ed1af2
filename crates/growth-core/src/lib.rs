//! Pediatric growth-standards engine.
//!
//! Scores anthropometric measurements against LMS reference tables, maps the
//! z-scores to clinical categories, and stages blood pressure with the
//! height-adjusted pediatric model or adult cutoffs.
//!
//! The free functions below use the built-in tables. Use a
//! [`GrowthClassifier`] to classify against tables loaded from CSV.
//!
//! ```
//! use growth_core::{classify_growth, GrowthStatus, Sex};
//!
//! let assessment = classify_growth(Sex::Female, 6.0, 0.0, 0.0, 42.06);
//! let head = assessment.head_circumference_for_age.unwrap();
//! assert!(head.z_score.abs() < 1e-9);
//! assert_eq!(head.status, GrowthStatus::Normocephalic);
//! ```

#![deny(unsafe_code)]

pub mod age;
pub mod blood_pressure;
pub mod classifier;
pub mod error;
pub mod growth;
pub mod history;
pub mod lms;
pub mod percentile;
pub mod vitals;

pub use age::{age_in_months, age_in_months_at, age_label, age_label_at, parse_birth_date};
pub use classifier::GrowthClassifier;
pub use error::VitalsError;
pub use history::{GrowthHistory, Visit, VisitAnalysis};
pub use percentile::percentile_from_z;
pub use vitals::{BloodPressureReading, body_mass_index, parse_measurement};

pub use growth_model::{
    BloodPressureBand, BloodPressureResult, BloodPressureStatus, Classification,
    GrowthAssessment, GrowthStatus, IndicatorResult, Measurement, MeasurementType, Severity, Sex,
};
pub use growth_standards::GrowthStandards;

/// Classifies growth against the built-in tables.
/// See [`growth::classify_growth`].
pub fn classify_growth(
    sex: Sex,
    age_months: f64,
    weight_kg: f64,
    height_cm: f64,
    head_circumference_cm: f64,
) -> GrowthAssessment {
    GrowthClassifier::default().classify_growth(
        sex,
        age_months,
        weight_kg,
        height_cm,
        head_circumference_cm,
    )
}

/// Stages blood pressure against the built-in tables.
/// See [`blood_pressure::classify_blood_pressure`].
pub fn classify_blood_pressure(
    sex: Sex,
    age_months: f64,
    height_cm: f64,
    systolic: f64,
    diastolic: f64,
) -> Option<BloodPressureResult> {
    GrowthClassifier::default().classify_blood_pressure(
        sex, age_months, height_cm, systolic, diastolic,
    )
}

/// Z-score against the built-in tables. `0.0` for an unspecified sex.
pub fn z_score(kind: MeasurementType, sex: Sex, key: f64, value: f64) -> f64 {
    GrowthClassifier::default().z_score(kind, sex, key, value)
}
