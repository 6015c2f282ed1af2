//! Blood-pressure classification results.
//!
//! Children aged 1-13 years are classified against percentiles of an
//! expected-mean regression (AAP 2017). From 13 years fixed adult cutoffs
//! apply instead.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Severity;

/// Hypertension stage, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureStatus {
    Normal,
    Elevated,
    Stage1Hypertension,
    Stage2Hypertension,
}

impl BloodPressureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodPressureStatus::Normal => "Normal",
            BloodPressureStatus::Elevated => "Elevated",
            BloodPressureStatus::Stage1Hypertension => "Stage 1 Hypertension",
            BloodPressureStatus::Stage2Hypertension => "Stage 2 Hypertension",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            BloodPressureStatus::Normal => Severity::Normal,
            BloodPressureStatus::Elevated => Severity::Mild,
            BloodPressureStatus::Stage1Hypertension => Severity::Moderate,
            BloodPressureStatus::Stage2Hypertension => Severity::Severe,
        }
    }
}

impl fmt::Display for BloodPressureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The band a reading fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureBand {
    // Pediatric percentile bands (1-13 years)
    BelowP90,
    P90ToP95,
    P95ToP99,
    AboveP95Plus12,

    // Adult cutoffs (13 years and older)
    AdultNormal,
    AdultElevated,
    AdultStage1,
    AdultStage2,
}

impl BloodPressureBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodPressureBand::BelowP90 => "<90th percentile",
            BloodPressureBand::P90ToP95 => "90th–95th percentile",
            BloodPressureBand::P95ToP99 => "95th–99th percentile",
            BloodPressureBand::AboveP95Plus12 => "≥95th percentile + 12 mmHg",
            BloodPressureBand::AdultNormal => "<120/80",
            BloodPressureBand::AdultElevated => "120–129/<80",
            BloodPressureBand::AdultStage1 => "130–139/80–89",
            BloodPressureBand::AdultStage2 => "≥140/90",
        }
    }

    /// Pediatric band matching a percentile-model stage.
    pub fn pediatric(status: BloodPressureStatus) -> Self {
        match status {
            BloodPressureStatus::Normal => BloodPressureBand::BelowP90,
            BloodPressureStatus::Elevated => BloodPressureBand::P90ToP95,
            BloodPressureStatus::Stage1Hypertension => BloodPressureBand::P95ToP99,
            BloodPressureStatus::Stage2Hypertension => BloodPressureBand::AboveP95Plus12,
        }
    }

    /// Adult band matching a fixed-cutoff stage.
    pub fn adult(status: BloodPressureStatus) -> Self {
        match status {
            BloodPressureStatus::Normal => BloodPressureBand::AdultNormal,
            BloodPressureStatus::Elevated => BloodPressureBand::AdultElevated,
            BloodPressureStatus::Stage1Hypertension => BloodPressureBand::AdultStage1,
            BloodPressureStatus::Stage2Hypertension => BloodPressureBand::AdultStage2,
        }
    }

    pub fn is_adult(&self) -> bool {
        matches!(
            self,
            BloodPressureBand::AdultNormal
                | BloodPressureBand::AdultElevated
                | BloodPressureBand::AdultStage1
                | BloodPressureBand::AdultStage2
        )
    }
}

impl fmt::Display for BloodPressureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Percentile cutoffs for one channel, in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelThresholds {
    pub expected_mean: f64,
    pub p90: f64,
    pub p95: f64,
    pub p95_plus_12: f64,
}

/// Cutoffs the pediatric model derived for this subject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureThresholds {
    /// Height-for-age z-score after clamping to [-3, 3].
    pub height_z: f64,
    pub systolic: ChannelThresholds,
    pub diastolic: ChannelThresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureResult {
    pub status: BloodPressureStatus,
    pub severity: Severity,
    pub band: BloodPressureBand,
    /// Present only for the pediatric percentile model.
    pub thresholds: Option<BloodPressureThresholds>,
}

impl BloodPressureResult {
    pub fn adult(status: BloodPressureStatus) -> Self {
        Self {
            status,
            severity: status.severity(),
            band: BloodPressureBand::adult(status),
            thresholds: None,
        }
    }

    pub fn pediatric(status: BloodPressureStatus, thresholds: BloodPressureThresholds) -> Self {
        Self {
            status,
            severity: status.severity(),
            band: BloodPressureBand::pediatric(status),
            thresholds: Some(thresholds),
        }
    }
}
