pub mod assessment;
pub mod blood_pressure;
pub mod enums;
pub mod error;
pub mod growth;
pub mod lms;

pub use assessment::Classification;
pub use blood_pressure::{
    BloodPressureBand, BloodPressureResult, BloodPressureStatus, BloodPressureThresholds,
    ChannelThresholds,
};
pub use enums::{BpChannel, KeyKind, MeasurementType, Severity, Sex};
pub use error::{ModelError, Result};
pub use growth::{GrowthAssessment, GrowthStatus, IndicatorResult, Measurement, value_or_zero};
pub use lms::{Lms, ReferencePoint};
