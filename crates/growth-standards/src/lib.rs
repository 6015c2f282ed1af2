#![deny(unsafe_code)]

pub mod builtin;
pub mod coefficients;
pub mod csv;
pub mod error;
pub mod registry;
pub mod table;

pub use crate::coefficients::BpCoefficients;
pub use crate::error::StandardsError;
pub use crate::registry::{GrowthStandards, StandardsSummary, TableSummary};
pub use crate::table::ReferenceTable;
