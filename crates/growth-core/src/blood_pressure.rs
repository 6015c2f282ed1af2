//! Blood-pressure staging.
//!
//! From 13 years the fixed adult cutoffs apply. Between 1 and 13 years each
//! channel is compared against percentiles of an expected mean that depends
//! on age and height-for-age z-score; the worse channel wins.

use growth_model::{
    BloodPressureResult, BloodPressureStatus, BloodPressureThresholds, BpChannel,
    ChannelThresholds, MeasurementType, Sex,
};
use growth_standards::{BpCoefficients, GrowthStandards};
use tracing::{debug, trace};

use crate::lms::z_score;

/// Population standard deviation of the expected mean, in mmHg.
pub const BP_STANDARD_DEVIATION: f64 = 10.5;
/// Age in years from which adult cutoffs apply.
pub const ADULT_AGE_YEARS: f64 = 13.0;
/// Youngest age in years the pediatric model covers.
pub const MIN_AGE_YEARS: f64 = 1.0;

const Z_90TH: f64 = 1.28;
const Z_95TH: f64 = 1.645;
const SEVERE_MARGIN_MMHG: f64 = 12.0;
const HEIGHT_Z_LIMIT: f64 = 3.0;
const AGE_CENTER_YEARS: f64 = 10.0;

/// Absolute stage-2 cutoffs that apply at every age.
const SYSTOLIC_STAGE2_MMHG: f64 = 140.0;
const DIASTOLIC_STAGE2_MMHG: f64 = 90.0;

/// Expected mean pressure for a channel at `age_years` and a (clamped)
/// height-for-age z-score.
pub fn expected_mean(coefficients: &BpCoefficients, age_years: f64, height_z: f64) -> f64 {
    let age = age_years - AGE_CENTER_YEARS;
    let height = height_z.clamp(-HEIGHT_Z_LIMIT, HEIGHT_Z_LIMIT);
    let mut mean = coefficients.alpha;
    for (power, (beta, gamma)) in (1..).zip(coefficients.beta.iter().zip(&coefficients.gamma)) {
        mean += beta * age.powi(power) + gamma * height.powi(power);
    }
    mean
}

pub fn channel_thresholds(
    coefficients: &BpCoefficients,
    age_years: f64,
    height_z: f64,
) -> ChannelThresholds {
    let expected_mean = expected_mean(coefficients, age_years, height_z);
    let p95 = expected_mean + Z_95TH * BP_STANDARD_DEVIATION;
    ChannelThresholds {
        expected_mean,
        p90: expected_mean + Z_90TH * BP_STANDARD_DEVIATION,
        p95,
        p95_plus_12: p95 + SEVERE_MARGIN_MMHG,
    }
}

fn channel_status(
    value: f64,
    thresholds: &ChannelThresholds,
    stage2_floor: f64,
) -> BloodPressureStatus {
    if value >= thresholds.p95_plus_12 || value >= stage2_floor {
        BloodPressureStatus::Stage2Hypertension
    } else if value >= thresholds.p95 {
        BloodPressureStatus::Stage1Hypertension
    } else if value >= thresholds.p90 {
        BloodPressureStatus::Elevated
    } else {
        BloodPressureStatus::Normal
    }
}

/// Fixed cutoffs for adolescents 13 and older, checked most severe first.
pub fn adult_status(systolic: f64, diastolic: f64) -> BloodPressureStatus {
    if systolic >= SYSTOLIC_STAGE2_MMHG || diastolic >= DIASTOLIC_STAGE2_MMHG {
        BloodPressureStatus::Stage2Hypertension
    } else if systolic >= 130.0 || diastolic >= 80.0 {
        BloodPressureStatus::Stage1Hypertension
    } else if systolic >= 120.0 {
        BloodPressureStatus::Elevated
    } else {
        BloodPressureStatus::Normal
    }
}

/// Stages a reading.
///
/// `None` when sex is unspecified, when height, systolic or diastolic is
/// missing (`0.0` or negative), or when the subject is under one year old.
pub fn classify_blood_pressure(
    standards: &GrowthStandards,
    sex: Sex,
    age_months: f64,
    height_cm: f64,
    systolic: f64,
    diastolic: f64,
) -> Option<BloodPressureResult> {
    if !sex.is_supported() {
        return None;
    }
    if !(height_cm > 0.0 && systolic > 0.0 && diastolic > 0.0) {
        debug!("blood pressure not staged: missing height or reading");
        return None;
    }
    let age_years = age_months / 12.0;
    if age_years >= ADULT_AGE_YEARS {
        let status = adult_status(systolic, diastolic);
        trace!(systolic, diastolic, status = status.as_str(), "adult cutoffs");
        return Some(BloodPressureResult::adult(status));
    }
    if age_years.is_nan() || age_years < MIN_AGE_YEARS {
        debug!("blood pressure not staged under one year");
        return None;
    }

    let height_z = z_score(standards, MeasurementType::HeightForAge, sex, age_months, height_cm)
        .clamp(-HEIGHT_Z_LIMIT, HEIGHT_Z_LIMIT);
    let systolic_thresholds = channel_thresholds(
        standards.bp_coefficients(sex, BpChannel::Systolic)?,
        age_years,
        height_z,
    );
    let diastolic_thresholds = channel_thresholds(
        standards.bp_coefficients(sex, BpChannel::Diastolic)?,
        age_years,
        height_z,
    );

    let status = channel_status(systolic, &systolic_thresholds, SYSTOLIC_STAGE2_MMHG).max(
        channel_status(diastolic, &diastolic_thresholds, DIASTOLIC_STAGE2_MMHG),
    );
    trace!(
        systolic,
        diastolic,
        height_z,
        systolic_p95 = systolic_thresholds.p95,
        diastolic_p95 = diastolic_thresholds.p95,
        status = status.as_str(),
        "pediatric percentiles"
    );
    Some(BloodPressureResult::pediatric(
        status,
        BloodPressureThresholds {
            height_z,
            systolic: systolic_thresholds,
            diastolic: diastolic_thresholds,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use growth_model::{BloodPressureBand, Severity};

    fn boys(
        age_months: f64,
        height_cm: f64,
        systolic: f64,
        diastolic: f64,
    ) -> Option<BloodPressureResult> {
        classify_blood_pressure(
            GrowthStandards::builtin(),
            Sex::Male,
            age_months,
            height_cm,
            systolic,
            diastolic,
        )
    }

    #[test]
    fn expected_mean_at_reference_point() {
        let coefficients = GrowthStandards::builtin()
            .bp_coefficients(Sex::Male, BpChannel::Systolic)
            .unwrap();
        assert!((expected_mean(coefficients, 10.0, 0.0) - 102.19768).abs() < 1e-9);
        // Height z beyond the limit is clamped.
        assert_eq!(
            expected_mean(coefficients, 8.0, 5.0),
            expected_mean(coefficients, 8.0, 3.0)
        );
    }

    #[test]
    fn thresholds_follow_the_normal_quantiles() {
        let coefficients = BpCoefficients::new(100.0, [0.0; 4], [0.0; 4]);
        let thresholds = channel_thresholds(&coefficients, 7.0, 0.0);
        assert_eq!(thresholds.expected_mean, 100.0);
        assert!((thresholds.p90 - 113.44).abs() < 1e-9);
        assert!((thresholds.p95 - 117.2725).abs() < 1e-9);
        assert!((thresholds.p95_plus_12 - 129.2725).abs() < 1e-9);
    }

    // Boy aged 10 at median height: systolic p90 ≈ 115.6, p95 ≈ 119.5,
    // p95+12 ≈ 131.5; diastolic p90 ≈ 74.5, p95 ≈ 78.3, p95+12 ≈ 90.3.
    #[test]
    fn pediatric_tiers() {
        let cases = [
            (110.0, 65.0, BloodPressureStatus::Normal),
            (117.0, 60.0, BloodPressureStatus::Elevated),
            (120.0, 70.0, BloodPressureStatus::Stage1Hypertension),
            (100.0, 80.0, BloodPressureStatus::Stage1Hypertension),
            (132.0, 60.0, BloodPressureStatus::Stage2Hypertension),
            (100.0, 90.0, BloodPressureStatus::Stage2Hypertension),
        ];
        for (systolic, diastolic, expected) in cases {
            let result = boys(120.0, 138.5, systolic, diastolic).unwrap();
            assert_eq!(result.status, expected, "{systolic}/{diastolic}");
            assert_eq!(result.band, BloodPressureBand::pediatric(expected));
            let thresholds = result.thresholds.unwrap();
            assert!(thresholds.height_z.abs() < 1e-12);
        }
    }

    #[test]
    fn absolute_ceiling_applies_to_children() {
        let result = boys(36.0, 95.0, 140.0, 50.0).unwrap();
        assert_eq!(result.status, BloodPressureStatus::Stage2Hypertension);
        assert_eq!(result.severity, Severity::Severe);
    }

    #[test]
    fn worse_channel_wins() {
        let only_systolic = boys(120.0, 138.5, 117.0, 40.0).unwrap();
        let only_diastolic = boys(120.0, 138.5, 90.0, 80.0).unwrap();
        let both = boys(120.0, 138.5, 117.0, 80.0).unwrap();
        assert_eq!(only_systolic.status, BloodPressureStatus::Elevated);
        assert_eq!(only_diastolic.status, BloodPressureStatus::Stage1Hypertension);
        assert_eq!(both.status, BloodPressureStatus::Stage1Hypertension);
    }

    #[test]
    fn adult_cutoffs() {
        assert_eq!(adult_status(118.0, 78.0), BloodPressureStatus::Normal);
        assert_eq!(adult_status(125.0, 70.0), BloodPressureStatus::Elevated);
        assert_eq!(adult_status(125.0, 80.0), BloodPressureStatus::Stage1Hypertension);
        assert_eq!(adult_status(131.0, 70.0), BloodPressureStatus::Stage1Hypertension);
        assert_eq!(adult_status(150.0, 70.0), BloodPressureStatus::Stage2Hypertension);
        assert_eq!(adult_status(110.0, 92.0), BloodPressureStatus::Stage2Hypertension);
    }

    #[test]
    fn adolescent_uses_adult_model() {
        let result = boys(170.0, 165.0, 125.0, 70.0).unwrap();
        assert_eq!(result.status, BloodPressureStatus::Elevated);
        assert_eq!(result.band, BloodPressureBand::AdultElevated);
        assert!(result.thresholds.is_none());
        assert!(boys(156.0, 160.0, 125.0, 70.0).unwrap().band.is_adult());
    }

    #[test]
    fn not_staged() {
        assert!(boys(11.0, 75.0, 100.0, 60.0).is_none());
        assert!(boys(60.0, 0.0, 100.0, 60.0).is_none());
        assert!(boys(60.0, 110.0, 0.0, 60.0).is_none());
        assert!(boys(60.0, 110.0, 100.0, 0.0).is_none());
        assert!(boys(f64::NAN, 110.0, 100.0, 60.0).is_none());
        assert!(
            classify_blood_pressure(
                GrowthStandards::builtin(),
                Sex::Unspecified,
                60.0,
                110.0,
                100.0,
                60.0
            )
            .is_none()
        );
    }
}
