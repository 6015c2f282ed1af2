#![deny(unsafe_code)]

use serde::Serialize;

/// Regression coefficients of the expected-mean blood-pressure model for one
/// sex and channel.
///
/// The expected mean is `alpha + Σ beta[i]·a^(i+1) + Σ gamma[i]·h^(i+1)` where
/// `a` is age in years minus 10 and `h` the height-for-age z-score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BpCoefficients {
    pub alpha: f64,
    /// Age-deviation terms, linear to quartic.
    pub beta: [f64; 4],
    /// Height-z terms, linear to quartic.
    pub gamma: [f64; 4],
}

impl BpCoefficients {
    pub const fn new(alpha: f64, beta: [f64; 4], gamma: [f64; 4]) -> Self {
        Self { alpha, beta, gamma }
    }
}
