//! LMS distribution parameters.
//!
//! A growth curve is summarised at each key by three Box-Cox parameters:
//! - **L**: power transform (skewness)
//! - **M**: median
//! - **S**: coefficient of variation

use serde::{Deserialize, Serialize};

/// Box-Cox parameters at one point of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lms {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl Lms {
    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    /// Returns true if the distribution cannot produce a score
    /// (zero median or zero spread).
    pub fn is_degenerate(&self) -> bool {
        self.m == 0.0 || self.s == 0.0 || !self.m.is_finite() || !self.s.is_finite()
    }
}

/// A single control point in a reference table.
///
/// `key` is age in months or length in cm depending on the table's
/// [`MeasurementType`](crate::MeasurementType).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub key: f64,
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl ReferencePoint {
    pub const fn new(key: f64, l: f64, m: f64, s: f64) -> Self {
        Self { key, l, m, s }
    }

    pub const fn lms(&self) -> Lms {
        Lms::new(self.l, self.m, self.s)
    }

    /// Returns true if every field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.key.is_finite() && self.l.is_finite() && self.m.is_finite() && self.s.is_finite()
    }
}
