use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Local;
use growth_core::age::{age_label_at, months_between, parse_birth_date};
use growth_core::lms::value_at_z;
use growth_core::GrowthClassifier;
use growth_model::{Classification, Measurement, MeasurementType, Sex};
use growth_standards::GrowthStandards;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::cli::{ClassifyArgs, Cli, Command, OutputArg, TablesArgs};
use crate::logging::redact_value;
use crate::summary::{print_classification, print_tables};

/// Classification plus the display age when a birth date was given.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_label: Option<String>,
    #[serde(flatten)]
    pub classification: Classification,
}

/// One control point with its -2 SD and +2 SD centile values.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub indicator: MeasurementType,
    pub sex: Sex,
    pub key: f64,
    pub l: f64,
    pub m: f64,
    pub s: f64,
    pub minus_two_sd: Option<f64>,
    pub plus_two_sd: Option<f64>,
}

pub fn run(cli: &Cli) -> Result<()> {
    let standards = load_standards(cli.standards.as_deref())?;
    match &cli.command {
        Command::Classify(args) => {
            let report = run_classify(args, &standards)?;
            match cli.output {
                OutputArg::Table => print_classification(&report),
                OutputArg::Json => print_json(&report)?,
            }
        }
        Command::Tables(args) => {
            let rows = run_tables(args, &standards);
            match cli.output {
                OutputArg::Table => print_tables(&rows),
                OutputArg::Json => print_json(&rows)?,
            }
        }
    }
    Ok(())
}

/// Built-in tables, or the built-ins overlaid with the tables in `path`.
pub fn load_standards(path: Option<&Path>) -> Result<Cow<'static, GrowthStandards>> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(GrowthStandards::builtin()));
    };
    let span = info_span!("load_standards", path = %path.display());
    let _guard = span.enter();
    let standards = GrowthStandards::from_csv(path)
        .with_context(|| format!("load reference tables from {}", path.display()))?;
    info!(tables = standards.summary().table_count, "reference tables loaded");
    Ok(Cow::Owned(standards))
}

pub fn run_classify(args: &ClassifyArgs, standards: &GrowthStandards) -> Result<ClassifyReport> {
    let span = info_span!("classify", sex = args.sex.as_str());
    let _guard = span.enter();

    let (age_months, age_label) = match (&args.dob, args.age_months) {
        (Some(dob), _) => {
            let birth = parse_birth_date(dob)
                .with_context(|| format!("invalid date of birth '{dob}', expected YYYY-MM-DD"))?;
            let on = args.on.unwrap_or_else(|| Local::now().date_naive());
            if on < birth {
                bail!("measurement date {on} is before the date of birth");
            }
            debug!(dob = redact_value(dob), "age from date of birth");
            (months_between(birth, on), Some(age_label_at(dob, on)))
        }
        (None, Some(months)) => {
            if !(months >= 0.0 && months.is_finite()) {
                bail!("age must be a non-negative number of months, got {months}");
            }
            (months, None)
        }
        (None, None) => bail!("either --age-months or --dob is required"),
    };

    let mut measurement = Measurement::at_age(age_months);
    measurement.weight_kg = args.weight;
    measurement.height_cm = args.height;
    measurement.head_circumference_cm = args.head;
    if let Some(reading) = args.bp {
        measurement = measurement.with_blood_pressure(reading.systolic, reading.diastolic);
    }

    if !args.sex.is_supported() {
        warn!("sex not specified, no reference curves apply");
    }
    let classification = GrowthClassifier::new(standards).classify(args.sex, &measurement);
    info!(
        indicators = classification.growth.iter().count(),
        blood_pressure = classification.blood_pressure.is_some(),
        "classified"
    );
    Ok(ClassifyReport {
        age_label,
        classification,
    })
}

pub fn run_tables(args: &TablesArgs, standards: &GrowthStandards) -> Vec<TableRow> {
    standards
        .tables()
        .filter(|(kind, sex, _)| {
            args.indicator.is_none_or(|wanted| wanted == *kind)
                && args.sex.is_none_or(|wanted| wanted == *sex)
        })
        .flat_map(|(indicator, sex, table)| {
            table.points().iter().map(move |point| TableRow {
                indicator,
                sex,
                key: point.key,
                l: point.l,
                m: point.m,
                s: point.s,
                minus_two_sd: value_at_z(point.lms(), -2.0),
                plus_two_sd: value_at_z(point.lms(), 2.0),
            })
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize result")?;
    println!("{json}");
    Ok(())
}
