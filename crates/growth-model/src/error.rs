use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown sex: {0}")]
    UnknownSex(String),
    #[error("unknown measurement type: {0}")]
    UnknownMeasurementType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
