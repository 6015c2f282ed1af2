use serde::{Deserialize, Serialize};

use crate::blood_pressure::BloodPressureResult;
use crate::enums::{Severity, Sex};
use crate::growth::GrowthAssessment;

/// Everything the classifiers report for one measurement snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub sex: Sex,
    pub age_months: f64,
    pub growth: GrowthAssessment,
    pub blood_pressure: Option<BloodPressureResult>,
}

impl Classification {
    /// Most severe tier across growth indicators and blood pressure.
    pub fn worst_severity(&self) -> Severity {
        let bp = self
            .blood_pressure
            .as_ref()
            .map(|result| result.severity)
            .unwrap_or_default();
        self.growth.worst_severity().max(bp)
    }
}
