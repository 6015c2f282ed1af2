//! LMS dataset loader.
//!
//! Expected header (column order free, extra columns ignored):
//!
//! ```text
//! indicator,sex,key,l,m,s
//! wfa,male,0,0.3487,3.3464,0.14602
//! ```

#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use growth_model::{MeasurementType, ReferencePoint, Sex};
use tracing::trace;

use crate::error::StandardsError;
use crate::table::ReferenceTable;

const REQUIRED_COLUMNS: [&str; 6] = ["indicator", "sex", "key", "l", "m", "s"];

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
}

fn get_str(row: &csv::StringRecord, idx: usize) -> &str {
    row.get(idx).map(str::trim).unwrap_or_default()
}

fn get_number(
    row: &csv::StringRecord,
    idx: usize,
    column: &str,
    line: usize,
    path: &Path,
) -> Result<f64, StandardsError> {
    let raw = get_str(row, idx);
    raw.parse::<f64>().map_err(|_| {
        StandardsError::csv(
            path,
            format!("row {line}: column '{column}' is not a number: '{raw}'"),
        )
    })
}

/// Parses an LMS CSV into validated tables, one per (indicator, sex) pair.
///
/// Rows may appear in any order; each table is sorted by key before
/// validation. Rows for the unspecified sex are rejected.
pub fn parse_lms_csv<R: Read>(
    reader: R,
    path: &Path,
) -> Result<BTreeMap<(MeasurementType, Sex), ReferenceTable>, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, e.to_string()))?
        .clone();

    let mut indices = [0usize; 6];
    for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = header_index(&headers, column)
            .ok_or_else(|| StandardsError::csv(path, format!("missing column '{column}'")))?;
    }
    let [idx_indicator, idx_sex, idx_key, idx_l, idx_m, idx_s] = indices;

    let mut grouped: BTreeMap<(MeasurementType, Sex), Vec<ReferencePoint>> = BTreeMap::new();
    for (offset, row) in reader.records().enumerate() {
        let row = row.map_err(|e| StandardsError::csv(path, e.to_string()))?;
        // Header is line 1.
        let line = row
            .position()
            .map_or(offset + 2, |pos| pos.line() as usize);

        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let indicator_raw = get_str(&row, idx_indicator);
        let kind = indicator_raw.parse::<MeasurementType>().map_err(|_| {
            StandardsError::UnknownIndicator {
                path: path.to_path_buf(),
                row: line,
                value: indicator_raw.to_string(),
            }
        })?;

        let sex_raw = get_str(&row, idx_sex);
        let sex = match sex_raw.parse::<Sex>() {
            Ok(sex) if sex.is_supported() => sex,
            _ => {
                return Err(StandardsError::UnknownSex {
                    path: path.to_path_buf(),
                    row: line,
                    value: sex_raw.to_string(),
                });
            }
        };

        let point = ReferencePoint::new(
            get_number(&row, idx_key, "key", line, path)?,
            get_number(&row, idx_l, "l", line, path)?,
            get_number(&row, idx_m, "m", line, path)?,
            get_number(&row, idx_s, "s", line, path)?,
        );
        trace!(indicator = kind.as_code(), sex = sex.as_str(), key = point.key, "lms row");
        grouped.entry((kind, sex)).or_default().push(point);
    }

    let mut tables = BTreeMap::new();
    for ((kind, sex), mut points) in grouped {
        points.sort_by(|a, b| a.key.total_cmp(&b.key));
        let table = ReferenceTable::new(points).map_err(|e| e.for_table(kind, sex))?;
        tables.insert((kind, sex), table);
    }
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(
        text: &str,
    ) -> Result<BTreeMap<(MeasurementType, Sex), ReferenceTable>, StandardsError> {
        parse_lms_csv(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn groups_and_sorts_rows() {
        let tables = parse(
            "indicator,sex,key,l,m,s\n\
             hca,f,6,1,42.0,0.03\n\
             hca,f,0,1,34.0,0.04\n\
             wfa,male,0,0.35,3.3,0.14\n\
             wfa,male,1,0.23,4.5,0.13\n",
        )
        .unwrap();
        assert_eq!(tables.len(), 2);
        let hc = &tables[&(MeasurementType::HeadCircumferenceForAge, Sex::Female)];
        assert_eq!(hc.first().key, 0.0);
        assert_eq!(hc.last().key, 6.0);
    }

    #[test]
    fn column_order_and_case_are_free() {
        let tables = parse(
            "S,M,L,Key,Sex,Indicator\n\
             0.08,2.4,0.85,45,1,wfh\n\
             0.08,3.4,0.85,50,1,wfh\n",
        )
        .unwrap();
        let table = &tables[&(MeasurementType::WeightForHeight, Sex::Male)];
        assert_eq!(table.points()[1].m, 3.4);
    }

    #[test]
    fn missing_column_is_reported() {
        let err = parse("indicator,sex,key,l,m\nwfa,male,0,1,2\n").unwrap_err();
        assert!(err.to_string().contains("missing column 's'"));
    }

    #[test]
    fn bad_number_names_the_row() {
        let err = parse("indicator,sex,key,l,m,s\nwfa,male,0,1,abc,0.1\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("row 2"), "{message}");
        assert!(message.contains("'m'"), "{message}");
    }

    #[test]
    fn unknown_indicator_and_sex() {
        let err = parse("indicator,sex,key,l,m,s\nbmi,male,0,1,2,0.1\n").unwrap_err();
        assert!(matches!(err, StandardsError::UnknownIndicator { row: 2, .. }));

        let err = parse("indicator,sex,key,l,m,s\nwfa,other,0,1,2,0.1\n").unwrap_err();
        assert!(matches!(err, StandardsError::UnknownSex { row: 2, .. }));
    }

    #[test]
    fn single_point_table_is_rejected() {
        let err = parse("indicator,sex,key,l,m,s\nhfa,female,0,1,49,0.04\n").unwrap_err();
        assert!(matches!(
            err,
            StandardsError::InvalidTable {
                kind: MeasurementType::HeightForAge,
                sex: Sex::Female,
                ..
            }
        ));
    }

    #[test]
    fn non_positive_median_is_rejected() {
        let err = parse(
            "indicator,sex,key,l,m,s\n\
             wfa,male,0,0.35,-3.3,0.14\n\
             wfa,male,1,0.23,4.5,0.13\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StandardsError::InvalidTable {
                kind: MeasurementType::WeightForAge,
                sex: Sex::Male,
                ..
            }
        ));
    }
}
