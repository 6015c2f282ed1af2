#![deny(unsafe_code)]

use std::path::PathBuf;

use growth_model::{MeasurementType, Sex};

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("unknown indicator '{value}' at {path} row {row}")]
    UnknownIndicator {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("unknown sex '{value}' at {path} row {row}")]
    UnknownSex {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("no reference table for unspecified sex")]
    UnsupportedSex,

    #[error("invalid reference table {kind}/{sex}: {message}")]
    InvalidTable {
        kind: MeasurementType,
        sex: Sex,
        message: String,
    },

    #[error("invalid reference table: {message}")]
    InvalidPoints { message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Csv {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Attach the table identity to a point-level validation error.
    pub(crate) fn for_table(self, kind: MeasurementType, sex: Sex) -> Self {
        match self {
            Self::InvalidPoints { message } => Self::InvalidTable { kind, sex, message },
            other => other,
        }
    }
}
