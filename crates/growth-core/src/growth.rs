//! Anthropometric indicator classification.

use growth_model::{GrowthAssessment, GrowthStatus, IndicatorResult, MeasurementType, Severity, Sex};
use growth_standards::GrowthStandards;
use tracing::{debug, trace};

use crate::lms::z_score;
use crate::percentile::percentile_from_z;

/// Weight-for-height is only defined for lengths in this range, in cm.
pub const WEIGHT_FOR_HEIGHT_RANGE: (f64, f64) = (45.0, 120.0);

/// Head circumference is not scored past this age, in months.
pub const HEAD_CIRCUMFERENCE_MAX_AGE_MONTHS: f64 = 60.0;

pub fn weight_for_age_status(z: f64) -> GrowthStatus {
    if z < -3.0 {
        GrowthStatus::SevereUnderweight
    } else if z < -2.0 {
        GrowthStatus::Underweight
    } else if z > 2.0 {
        GrowthStatus::ElevatedWeight
    } else {
        GrowthStatus::Normal
    }
}

pub fn height_for_age_status(z: f64) -> GrowthStatus {
    if z < -3.0 {
        GrowthStatus::SevereStunting
    } else if z < -2.0 {
        GrowthStatus::Stunting
    } else if z > 3.0 {
        GrowthStatus::TallStature
    } else {
        GrowthStatus::Normal
    }
}

/// Weight-for-height categories, most severe first on each side.
pub fn weight_for_height_status(z: f64) -> GrowthStatus {
    if z < -3.0 {
        GrowthStatus::SevereAcuteMalnutrition
    } else if z < -2.0 {
        GrowthStatus::AcuteMalnutrition
    } else if z < -1.0 {
        GrowthStatus::AtRiskOfMalnutrition
    } else if z > 3.0 {
        GrowthStatus::Obesity
    } else if z > 2.0 {
        GrowthStatus::Overweight
    } else if z > 1.0 {
        GrowthStatus::AtRiskOfOverweight
    } else {
        GrowthStatus::Adequate
    }
}

pub fn head_circumference_status(z: f64) -> GrowthStatus {
    if z < -3.0 {
        GrowthStatus::SevereMicrocephaly
    } else if z < -2.0 {
        GrowthStatus::Microcephaly
    } else if z > 3.0 {
        GrowthStatus::SevereMacrocephaly
    } else if z > 2.0 {
        GrowthStatus::Macrocephaly
    } else {
        GrowthStatus::Normocephalic
    }
}

/// Category for a z-score on the given indicator.
pub fn status_for(kind: MeasurementType, z: f64) -> GrowthStatus {
    match kind {
        MeasurementType::WeightForAge => weight_for_age_status(z),
        MeasurementType::HeightForAge => height_for_age_status(z),
        MeasurementType::WeightForHeight => weight_for_height_status(z),
        MeasurementType::HeadCircumferenceForAge => head_circumference_status(z),
    }
}

/// Scores one indicator and attaches percentile, status and severity.
pub fn indicator_result(
    standards: &GrowthStandards,
    kind: MeasurementType,
    sex: Sex,
    key: f64,
    value: f64,
) -> IndicatorResult {
    let z = z_score(standards, kind, sex, key, value);
    IndicatorResult {
        indicator: kind,
        label: kind.label().to_string(),
        z_score: z,
        percentile: percentile_from_z(z),
        status: status_for(kind, z),
        severity: Severity::from_z_score(z),
    }
}

/// Runs every applicable indicator.
///
/// Missing measurements are passed as `0.0`. An indicator is withheld
/// (left `None`) when:
/// - the sex is [`Sex::Unspecified`] (all indicators)
/// - its measurement is not positive
/// - weight-for-height: height outside 45-120 cm
/// - head circumference: age above 60 months
pub fn classify_growth(
    standards: &GrowthStandards,
    sex: Sex,
    age_months: f64,
    weight_kg: f64,
    height_cm: f64,
    head_circumference_cm: f64,
) -> GrowthAssessment {
    if !sex.is_supported() {
        debug!("sex not specified, growth indicators withheld");
        return GrowthAssessment::default();
    }
    trace!(
        sex = sex.as_str(),
        age_months, weight_kg, height_cm, head_circumference_cm, "classifying growth"
    );

    let mut assessment = GrowthAssessment::default();
    if weight_kg > 0.0 {
        assessment.weight_for_age = Some(indicator_result(
            standards,
            MeasurementType::WeightForAge,
            sex,
            age_months,
            weight_kg,
        ));
    }
    if height_cm > 0.0 {
        assessment.height_for_age = Some(indicator_result(
            standards,
            MeasurementType::HeightForAge,
            sex,
            age_months,
            height_cm,
        ));
    }
    let (min_height, max_height) = WEIGHT_FOR_HEIGHT_RANGE;
    if weight_kg > 0.0 && (min_height..=max_height).contains(&height_cm) {
        assessment.weight_for_height = Some(indicator_result(
            standards,
            MeasurementType::WeightForHeight,
            sex,
            height_cm,
            weight_kg,
        ));
    } else if weight_kg > 0.0 && height_cm > 0.0 {
        debug!(indicator = "wfh", "height outside weight-for-height range");
    }
    if head_circumference_cm > 0.0 && age_months <= HEAD_CIRCUMFERENCE_MAX_AGE_MONTHS {
        assessment.head_circumference_for_age = Some(indicator_result(
            standards,
            MeasurementType::HeadCircumferenceForAge,
            sex,
            age_months,
            head_circumference_cm,
        ));
    } else if head_circumference_cm > 0.0 {
        debug!(indicator = "hca", "head circumference not scored past 60 months");
    }
    assessment
}
