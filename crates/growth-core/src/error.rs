use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VitalsError {
    #[error("invalid blood pressure '{0}': expected SYSTOLIC/DIASTOLIC")]
    InvalidBloodPressure(String),
    #[error("invalid {field} '{value}': expected a positive number")]
    InvalidMeasurement { field: &'static str, value: String },
}
