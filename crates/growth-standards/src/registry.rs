#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use growth_model::{BpChannel, MeasurementType, Sex};
use serde::Serialize;
use tracing::debug;

use crate::builtin;
use crate::coefficients::BpCoefficients;
use crate::csv::parse_lms_csv;
use crate::error::StandardsError;
use crate::table::ReferenceTable;

static BUILTIN: LazyLock<GrowthStandards> = LazyLock::new(GrowthStandards::builtin_tables);

/// Reference tables keyed by measurement type and sex, plus the
/// blood-pressure coefficients.
///
/// Read-only after construction. The built-in instance lives for the whole
/// process; custom instances come from [`GrowthStandards::from_csv`].
#[derive(Debug, Clone)]
pub struct GrowthStandards {
    tables: BTreeMap<(MeasurementType, Sex), ReferenceTable>,
    bp_coefficients: BTreeMap<(Sex, BpChannel), BpCoefficients>,
}

/// Counts describing a loaded registry.
#[derive(Debug, Clone, Serialize)]
pub struct StandardsSummary {
    pub table_count: usize,
    pub point_count: usize,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub indicator: MeasurementType,
    pub sex: Sex,
    pub points: usize,
    pub key_min: f64,
    pub key_max: f64,
}

impl GrowthStandards {
    /// The compiled-in registry, initialised on first use.
    pub fn builtin() -> &'static GrowthStandards {
        &BUILTIN
    }

    fn builtin_tables() -> Self {
        let mut tables = BTreeMap::new();
        let data: [(MeasurementType, Sex, &[growth_model::ReferencePoint]); 8] = [
            (MeasurementType::WeightForAge, Sex::Male, builtin::WFA_BOYS),
            (MeasurementType::WeightForAge, Sex::Female, builtin::WFA_GIRLS),
            (MeasurementType::HeightForAge, Sex::Male, builtin::HFA_BOYS),
            (MeasurementType::HeightForAge, Sex::Female, builtin::HFA_GIRLS),
            (MeasurementType::HeadCircumferenceForAge, Sex::Male, builtin::HC_BOYS),
            (MeasurementType::HeadCircumferenceForAge, Sex::Female, builtin::HC_GIRLS),
            (MeasurementType::WeightForHeight, Sex::Male, builtin::WFH_BOYS),
            (MeasurementType::WeightForHeight, Sex::Female, builtin::WFH_GIRLS),
        ];
        for (kind, sex, points) in data {
            tables.insert((kind, sex), ReferenceTable::from_static(points));
        }

        let mut bp_coefficients = BTreeMap::new();
        bp_coefficients.insert((Sex::Male, BpChannel::Systolic), builtin::BP_BOYS_SYSTOLIC);
        bp_coefficients.insert((Sex::Male, BpChannel::Diastolic), builtin::BP_BOYS_DIASTOLIC);
        bp_coefficients.insert((Sex::Female, BpChannel::Systolic), builtin::BP_GIRLS_SYSTOLIC);
        bp_coefficients.insert((Sex::Female, BpChannel::Diastolic), builtin::BP_GIRLS_DIASTOLIC);

        debug!(tables = tables.len(), "initialised built-in growth standards");
        Self {
            tables,
            bp_coefficients,
        }
    }

    /// Loads LMS tables from a CSV file, falling back to the built-in table
    /// for every (indicator, sex) pair the file does not provide.
    pub fn from_csv(path: &Path) -> Result<Self, StandardsError> {
        let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
        Self::from_csv_source(bytes.as_slice(), path)
    }

    /// Same as [`GrowthStandards::from_csv`] for an in-memory or streamed source.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, StandardsError> {
        Self::from_csv_source(reader, Path::new("<reader>"))
    }

    fn from_csv_source<R: Read>(reader: R, path: &Path) -> Result<Self, StandardsError> {
        let loaded = parse_lms_csv(reader, path)?;
        let mut standards = Self::builtin().clone();
        for ((kind, sex), table) in loaded {
            debug!(
                indicator = kind.as_code(),
                sex = sex.as_str(),
                points = table.len(),
                "replacing built-in table"
            );
            standards.tables.insert((kind, sex), table);
        }
        Ok(standards)
    }

    /// Returns a copy of this registry with one table replaced.
    pub fn with_table(
        mut self,
        kind: MeasurementType,
        sex: Sex,
        table: ReferenceTable,
    ) -> Result<Self, StandardsError> {
        if !sex.is_supported() {
            return Err(StandardsError::UnsupportedSex);
        }
        self.tables.insert((kind, sex), table);
        Ok(self)
    }

    /// Table for a measurement type and sex. `None` for [`Sex::Unspecified`].
    pub fn table(&self, kind: MeasurementType, sex: Sex) -> Option<&ReferenceTable> {
        self.tables.get(&(kind, sex))
    }

    /// Coefficients for a sex and channel. `None` for [`Sex::Unspecified`].
    pub fn bp_coefficients(&self, sex: Sex, channel: BpChannel) -> Option<&BpCoefficients> {
        self.bp_coefficients.get(&(sex, channel))
    }

    pub fn tables(&self) -> impl Iterator<Item = (MeasurementType, Sex, &ReferenceTable)> {
        self.tables
            .iter()
            .map(|((kind, sex), table)| (*kind, *sex, table))
    }

    pub fn summary(&self) -> StandardsSummary {
        let tables: Vec<TableSummary> = self
            .tables()
            .map(|(indicator, sex, table)| {
                let (key_min, key_max) = table.domain();
                TableSummary {
                    indicator,
                    sex,
                    points: table.len(),
                    key_min,
                    key_max,
                }
            })
            .collect();
        StandardsSummary {
            table_count: tables.len(),
            point_count: tables.iter().map(|t| t.points).sum(),
            tables,
        }
    }
}

impl Default for GrowthStandards {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
