use std::fs;
use std::io::Write;

use growth_model::{BpChannel, MeasurementType, Sex};
use growth_standards::{GrowthStandards, StandardsError};

const WHO_HC_BOYS: &str = "indicator,sex,key,l,m,s
hca,male,0,1,34.4618,0.03686
hca,male,1,1,37.2759,0.03133
hca,male,2,1,39.1285,0.02997
hca,male,3,1,40.5135,0.02918
";

#[test]
fn csv_tables_replace_builtin_tables() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("hc_boys.csv");
    fs::write(&path, WHO_HC_BOYS).expect("write csv");

    let standards = GrowthStandards::from_csv(&path).expect("load csv");
    let table = standards
        .table(MeasurementType::HeadCircumferenceForAge, Sex::Male)
        .expect("hc boys table");
    assert_eq!(table.len(), 4);
    assert_eq!(table.points()[1].m, 37.2759);

    // Everything else still comes from the built-in set.
    let builtin = GrowthStandards::builtin();
    assert_eq!(
        standards.table(MeasurementType::HeadCircumferenceForAge, Sex::Female),
        builtin.table(MeasurementType::HeadCircumferenceForAge, Sex::Female)
    );
    assert_eq!(
        standards.table(MeasurementType::WeightForAge, Sex::Male),
        builtin.table(MeasurementType::WeightForAge, Sex::Male)
    );
    assert_eq!(
        standards.bp_coefficients(Sex::Female, BpChannel::Diastolic),
        builtin.bp_coefficients(Sex::Female, BpChannel::Diastolic)
    );
}

#[test]
fn csv_reader_accepts_streams() {
    let mut buffer = Vec::new();
    buffer
        .write_all(
            b"indicator,sex,key,l,m,s\n\
              wfh,female,50,-0.38,3.2,0.09\n\
              wfh,female,45,-0.38,2.46,0.09\n",
        )
        .unwrap();
    let standards = GrowthStandards::from_csv_reader(buffer.as_slice()).expect("load stream");
    let table = standards
        .table(MeasurementType::WeightForHeight, Sex::Female)
        .unwrap();
    assert_eq!(table.domain(), (45.0, 50.0));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let err = GrowthStandards::from_csv(&path).unwrap_err();
    assert!(matches!(err, StandardsError::Io { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn invalid_table_is_rejected_with_identity() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("dup.csv");
    fs::write(
        &path,
        "indicator,sex,key,l,m,s\nwfa,female,6,0.1,7.3,0.12\nwfa,female,6,0.1,7.4,0.12\n",
    )
    .unwrap();
    let err = GrowthStandards::from_csv(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid reference table Weight-for-Age/female: keys must be strictly ascending (6 then 6)"
    );
}

#[test]
fn negative_spread_is_rejected() {
    let err = GrowthStandards::from_csv_reader(
        "indicator,sex,key,l,m,s\nwfa,male,0,1,3.3,-0.14\nwfa,male,1,1,4.5,0.13\n".as_bytes(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid reference table Weight-for-Age/male: M and S must be positive at key 0"
    );
}
