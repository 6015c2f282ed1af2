//! Per-visit growth history for one patient.

use chrono::NaiveDate;
use growth_model::{BloodPressureResult, GrowthAssessment, MeasurementType, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::age::months_between;
use crate::classifier::GrowthClassifier;
use crate::error::VitalsError;
use crate::vitals::{BloodPressureReading, body_mass_index, parse_positive};

/// Measurements taken at one consultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub head_circumference_cm: Option<f64>,
    pub blood_pressure: Option<BloodPressureReading>,
}

impl Visit {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight_kg: None,
            height_cm: None,
            head_circumference_cm: None,
            blood_pressure: None,
        }
    }

    /// Builds a visit from form text. Blank fields are absent; anything else
    /// must parse as a positive number (or `SYS/DIA` for blood pressure).
    pub fn from_text(
        date: NaiveDate,
        weight: &str,
        height: &str,
        head_circumference: &str,
        blood_pressure: &str,
    ) -> Result<Self, VitalsError> {
        fn optional(field: &'static str, text: &str) -> Result<Option<f64>, VitalsError> {
            if text.trim().is_empty() {
                Ok(None)
            } else {
                parse_positive(field, text).map(Some)
            }
        }

        Ok(Self {
            date,
            weight_kg: optional("weight", weight)?,
            height_cm: optional("height", height)?,
            head_circumference_cm: optional("head circumference", head_circumference)?,
            blood_pressure: if blood_pressure.trim().is_empty() {
                None
            } else {
                Some(blood_pressure.parse()?)
            },
        })
    }
}

/// Classification of one visit at the patient's age on that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitAnalysis {
    pub date: NaiveDate,
    pub age_months: f64,
    pub growth: GrowthAssessment,
    pub bmi: Option<f64>,
    pub blood_pressure: Option<BloodPressureResult>,
}

/// Chronological visit analyses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthHistory {
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub visits: Vec<VisitAnalysis>,
}

impl GrowthHistory {
    /// Classifies each visit at the age the patient had on the visit date.
    /// Visits are ordered by date; visits on the same date keep input order.
    pub fn build(
        classifier: &GrowthClassifier<'_>,
        sex: Sex,
        birth_date: NaiveDate,
        visits: &[Visit],
    ) -> Self {
        let mut ordered: Vec<&Visit> = visits.iter().collect();
        ordered.sort_by_key(|visit| visit.date);

        let visits = ordered
            .into_iter()
            .map(|visit| {
                let age_months = months_between(birth_date, visit.date);
                let weight = visit.weight_kg.unwrap_or_default();
                let height = visit.height_cm.unwrap_or_default();
                let growth = classifier.classify_growth(
                    sex,
                    age_months,
                    weight,
                    height,
                    visit.head_circumference_cm.unwrap_or_default(),
                );
                let blood_pressure = visit.blood_pressure.and_then(|reading| {
                    classifier.classify_blood_pressure(
                        sex,
                        age_months,
                        height,
                        reading.systolic,
                        reading.diastolic,
                    )
                });
                VisitAnalysis {
                    date: visit.date,
                    age_months,
                    growth,
                    bmi: body_mass_index(weight, height),
                    blood_pressure,
                }
            })
            .collect::<Vec<_>>();
        debug!(visits = visits.len(), sex = sex.as_str(), "built growth history");

        Self {
            sex,
            birth_date,
            visits,
        }
    }

    pub fn latest(&self) -> Option<&VisitAnalysis> {
        self.visits.last()
    }

    /// `(date, z-score)` for every visit where the indicator was computed.
    pub fn z_score_series(&self, indicator: MeasurementType) -> Vec<(NaiveDate, f64)> {
        self.visits
            .iter()
            .filter_map(|visit| {
                visit
                    .growth
                    .get(indicator)
                    .map(|result| (visit.date, result.z_score))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn visit_from_text() {
        let visit = Visit::from_text(date(2024, 1, 1), "9,8 kg", " 76 ", "", "").unwrap();
        assert_eq!(visit.weight_kg, Some(9.8));
        assert_eq!(visit.height_cm, Some(76.0));
        assert_eq!(visit.head_circumference_cm, None);
        assert_eq!(visit.blood_pressure, None);

        let err = Visit::from_text(date(2024, 1, 1), "heavy", "", "", "").unwrap_err();
        assert!(matches!(err, VitalsError::InvalidMeasurement { field: "weight", .. }));
        assert!(Visit::from_text(date(2024, 1, 1), "", "", "", "120").is_err());
    }

    #[test]
    fn visits_are_sorted_and_aged_at_visit_date() {
        let birth = date(2022, 1, 1);
        let mut late = Visit::new(date(2024, 1, 1));
        late.weight_kg = Some(12.0);
        let mut early = Visit::new(date(2023, 1, 1));
        early.weight_kg = Some(9.5);

        let history =
            GrowthHistory::build(&GrowthClassifier::default(), Sex::Female, birth, &[late, early]);
        assert_eq!(history.visits.len(), 2);
        assert_eq!(history.visits[0].date, date(2023, 1, 1));
        assert_eq!(history.visits[0].age_months, 12.0);
        assert_eq!(history.visits[1].age_months, 24.0);
        assert_eq!(history.latest().map(|v| v.date), Some(date(2024, 1, 1)));
        assert_eq!(history.z_score_series(MeasurementType::WeightForAge).len(), 2);
        assert!(history.z_score_series(MeasurementType::HeightForAge).is_empty());
        assert!(history.visits.iter().all(|v| v.bmi.is_none()));
    }

    #[test]
    fn same_day_visits_keep_input_order() {
        let day = date(2023, 6, 1);
        let mut first = Visit::new(day);
        first.weight_kg = Some(8.0);
        let mut second = Visit::new(day);
        second.weight_kg = Some(8.4);
        let history = GrowthHistory::build(
            &GrowthClassifier::default(),
            Sex::Male,
            date(2022, 12, 1),
            &[first, second],
        );
        let series = history.z_score_series(MeasurementType::WeightForAge);
        assert!(series[0].1 < series[1].1);
    }

    #[test]
    fn blood_pressure_and_bmi_per_visit() {
        let mut visit = Visit::new(date(2020, 1, 1));
        visit.weight_kg = Some(32.9);
        visit.height_cm = Some(138.5);
        visit.blood_pressure = Some(BloodPressureReading::new(110.0, 65.0));
        let history = GrowthHistory::build(
            &GrowthClassifier::default(),
            Sex::Male,
            date(2010, 1, 1),
            &[visit],
        );
        let analysis = history.latest().unwrap();
        assert_eq!(analysis.age_months, 120.0);
        assert!(analysis.bmi.is_some());
        assert!(analysis.blood_pressure.is_some());
    }
}
