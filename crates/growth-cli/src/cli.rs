//! CLI argument definitions for the growth-standards tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use growth_core::BloodPressureReading;
use growth_model::{MeasurementType, Sex};
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "growth",
    version,
    about = "Pediatric growth standards - z-scores, growth categories, blood-pressure staging",
    long_about = "Score pediatric anthropometric measurements against LMS growth standards.\n\n\
                  Weight-for-age, height-for-age, weight-for-height and head circumference\n\
                  are classified from WHO/CDC reference tables; blood pressure is staged\n\
                  with the height-adjusted pediatric model or adult cutoffs from 13 years."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// LMS reference tables (CSV) replacing the built-in ones.
    #[arg(long = "standards", value_name = "CSV", global = true)]
    pub standards: Option<PathBuf>,

    /// Result format on stdout.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow measurement values and birth dates in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify one set of measurements.
    Classify(ClassifyArgs),

    /// Print reference tables with their -2 SD / median / +2 SD values.
    Tables(TablesArgs),
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Sex of the patient (male, female, unspecified).
    #[arg(long = "sex")]
    pub sex: Sex,

    /// Age in months.
    #[arg(
        long = "age-months",
        value_name = "MONTHS",
        conflicts_with = "dob",
        required_unless_present = "dob"
    )]
    pub age_months: Option<f64>,

    /// Date of birth (YYYY-MM-DD).
    #[arg(long = "dob", value_name = "DATE")]
    pub dob: Option<String>,

    /// Date the measurements were taken (default: today).
    #[arg(long = "on", value_name = "DATE", requires = "dob")]
    pub on: Option<NaiveDate>,

    /// Weight in kg.
    #[arg(long = "weight", value_name = "KG")]
    pub weight: Option<f64>,

    /// Height or recumbent length in cm.
    #[arg(long = "height", value_name = "CM")]
    pub height: Option<f64>,

    /// Head circumference in cm.
    #[arg(long = "head", value_name = "CM")]
    pub head: Option<f64>,

    /// Blood pressure reading, e.g. 110/70.
    #[arg(long = "bp", value_name = "SYS/DIA")]
    pub bp: Option<BloodPressureReading>,
}

#[derive(Parser)]
pub struct TablesArgs {
    /// Only this indicator (wfa, hfa, wfh, hca).
    #[arg(long = "indicator")]
    pub indicator: Option<MeasurementType>,

    /// Only this sex.
    #[arg(long = "sex")]
    pub sex: Option<Sex>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl Cli {
    /// Logging configuration from flags: `--log-level` beats `-v/-q`, and
    /// `RUST_LOG` applies only when neither is given.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let mut config = LogConfig::default()
            .with_level(level_filter)
            .with_format(format)
            // Log files get timestamps, stderr does not.
            .with_timestamps(self.log_file.is_some())
            .with_log_file(self.log_file.clone())
            .with_log_data(self.log_data);
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}
