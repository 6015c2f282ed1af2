use std::io::Write;

use clap::Parser;
use growth_cli::cli::{Cli, Command, OutputArg};
use growth_cli::commands::{load_standards, run_classify, run_tables};
use growth_cli::logging::LogFormat;
use growth_cli::summary::{growth_table, reference_table};
use growth_model::{BloodPressureStatus, GrowthStatus, MeasurementType, Sex};
use tracing::level_filters::LevelFilter;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("growth").chain(args.iter().copied()))
        .expect("valid arguments")
}

#[test]
fn classify_arguments() {
    let cli = parse(&[
        "classify", "--sex", "female", "--age-months", "6", "--head", "42.06", "--bp", "95/55",
    ]);
    let Command::Classify(args) = &cli.command else {
        panic!("expected classify");
    };
    assert_eq!(args.sex, Sex::Female);
    assert_eq!(args.age_months, Some(6.0));
    assert_eq!(args.head, Some(42.06));
    assert_eq!(args.bp.map(|bp| bp.systolic), Some(95.0));
    assert!(cli.output == OutputArg::Table);
}

#[test]
fn age_source_is_required_and_exclusive() {
    assert!(Cli::try_parse_from(["growth", "classify", "--sex", "male"]).is_err());
    assert!(
        Cli::try_parse_from([
            "growth", "classify", "--sex", "male", "--age-months", "12", "--dob", "2020-01-01",
        ])
        .is_err()
    );
    assert!(
        Cli::try_parse_from([
            "growth", "classify", "--sex", "male", "--age-months", "12", "--on", "2024-01-01",
        ])
        .is_err()
    );
    assert!(
        Cli::try_parse_from(["growth", "classify", "--sex", "robot", "--age-months", "12"])
            .is_err()
    );
    assert!(
        Cli::try_parse_from([
            "growth", "classify", "--sex", "m", "--age-months", "12", "--bp", "120",
        ])
        .is_err()
    );
}

#[test]
fn log_config_precedence() {
    let default = parse(&["tables"]).log_config();
    assert_eq!(default.level_filter, LevelFilter::WARN);
    assert!(default.use_env_filter);
    assert!(!default.log_data);

    let verbose = parse(&["-vv", "tables"]).log_config();
    assert_eq!(verbose.level_filter, LevelFilter::DEBUG);
    assert!(!verbose.use_env_filter);

    let explicit = parse(&[
        "-q",
        "--log-level",
        "trace",
        "--log-format",
        "json",
        "--log-data",
        "tables",
    ])
    .log_config();
    assert_eq!(explicit.level_filter, LevelFilter::TRACE);
    assert_eq!(explicit.format, LogFormat::Json);
    assert!(explicit.log_data);
    assert!(explicit.directives().contains("growth_core=trace"));

    let to_file = parse(&["--log-file", "growth.log", "tables"]).log_config();
    assert!(to_file.with_timestamps);
    assert!(!to_file.with_ansi);
    assert_eq!(to_file.log_file.as_deref(), Some(std::path::Path::new("growth.log")));
    assert!(!default.with_timestamps);
}

#[test]
fn classify_from_birth_date() {
    let cli = parse(&[
        "classify", "--sex", "male", "--dob", "2010-01-01", "--on", "2020-01-01", "--weight",
        "32.9", "--height", "138.5", "--bp", "110/65",
    ]);
    let Command::Classify(args) = &cli.command else {
        panic!("expected classify");
    };
    let standards = load_standards(None).unwrap();
    let report = run_classify(args, &standards).unwrap();
    assert_eq!(report.age_label.as_deref(), Some("10 years 0 months"));
    assert_eq!(report.classification.age_months, 120.0);
    let wfa = report.classification.growth.weight_for_age.as_ref().unwrap();
    assert_eq!(wfa.status, GrowthStatus::Normal);
    assert_eq!(
        report.classification.blood_pressure.as_ref().unwrap().status,
        BloodPressureStatus::Normal
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["age_label"], "10 years 0 months");
    assert_eq!(json["sex"], "male");
    assert_eq!(json["growth"]["weight_for_age"]["status"], "normal");
    assert!(json["growth"]["head_circumference_for_age"].is_null());

    let rendered = growth_table(report.classification.growth.iter()).to_string();
    assert!(rendered.contains("Weight-for-Age"));
    assert!(rendered.contains("Height-for-Age"));
}

#[test]
fn classify_rejects_bad_dates() {
    let standards = load_standards(None).unwrap();
    let cli = parse(&["classify", "--sex", "male", "--dob", "yesterday"]);
    let Command::Classify(args) = &cli.command else {
        panic!("expected classify");
    };
    let err = run_classify(args, &standards).unwrap_err();
    assert!(err.to_string().contains("invalid date of birth"));

    let cli = parse(&["classify", "--sex", "male", "--dob", "2024-05-01", "--on", "2024-01-01"]);
    let Command::Classify(args) = &cli.command else {
        panic!("expected classify");
    };
    assert!(run_classify(args, &standards).is_err());

    let cli = parse(&["classify", "--sex", "male", "--age-months=-4"]);
    let Command::Classify(args) = &cli.command else {
        panic!("expected classify");
    };
    assert!(run_classify(args, &standards).is_err());
}

#[test]
fn unspecified_sex_reports_nothing() {
    let standards = load_standards(None).unwrap();
    let cli = parse(&["classify", "--sex", "unspecified", "--age-months", "24", "--weight", "12"]);
    let Command::Classify(args) = &cli.command else {
        panic!("expected classify");
    };
    let report = run_classify(args, &standards).unwrap();
    assert!(report.classification.growth.is_empty());
    assert!(report.classification.blood_pressure.is_none());
}

#[test]
fn tables_are_filtered() {
    let standards = load_standards(None).unwrap();
    let cli = parse(&["tables", "--indicator", "hca", "--sex", "female"]);
    let Command::Tables(args) = &cli.command else {
        panic!("expected tables");
    };
    let rows = run_tables(args, &standards);
    assert_eq!(rows.len(), 7);
    assert!(rows.iter().all(|row| row.indicator == MeasurementType::HeadCircumferenceForAge));
    let six_months = rows.iter().find(|row| row.key == 6.0).unwrap();
    assert!((six_months.minus_two_sd.unwrap() - 42.06 * 0.94).abs() < 1e-9);
    assert!((six_months.plus_two_sd.unwrap() - 42.06 * 1.06).abs() < 1e-9);

    let rendered = reference_table(&rows).to_string();
    assert!(rendered.contains("hca"));
    assert!(rendered.contains("6 months"));

    let all = parse(&["tables"]);
    let Command::Tables(args) = &all.command else {
        panic!("expected tables");
    };
    assert_eq!(run_tables(args, &standards).len(), 100);
}

#[test]
fn custom_standards_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "indicator,sex,key,l,m,s").unwrap();
    writeln!(file, "hca,male,0,1,35,0.04").unwrap();
    writeln!(file, "hca,male,60,1,51,0.03").unwrap();
    file.flush().unwrap();

    let standards = load_standards(Some(file.path())).unwrap();
    let cli = parse(&["tables", "--indicator", "hca", "--sex", "male"]);
    let Command::Tables(args) = &cli.command else {
        panic!("expected tables");
    };
    let rows = run_tables(args, &standards);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].m, 51.0);

    let missing = load_standards(Some(std::path::Path::new("/nonexistent/lms.csv"))).unwrap_err();
    assert!(format!("{missing:#}").contains("load reference tables"));
}
