//! Compiled-in reference data.
//!
//! Sources:
//! - WHO Child Growth Standards (0-24 months, head circumference 0-60 months,
//!   weight-for-length 45-120 cm)
//! - CDC 2000 Growth Charts (2 years and older)
//! - AAP 2017 Clinical Practice Guideline (blood-pressure regression)
//!
//! These are illustrative control points, not the full published tables.
//! Weight-for-age switches from WHO to CDC values at 24 months, which shows
//! as a step in L and M there. Load a continuous dataset with
//! [`GrowthStandards::from_csv`](crate::GrowthStandards::from_csv) where that
//! matters.

use growth_model::ReferencePoint as P;

use crate::coefficients::BpCoefficients;

pub const WFA_BOYS: &[P] = &[
    P::new(0.0, 0.1815, 3.346, 0.127),
    P::new(1.0, 0.160, 4.47, 0.13),
    P::new(3.0, 0.1132, 6.421, 0.123),
    P::new(6.0, 0.063, 7.939, 0.119),
    P::new(12.0, 0.005, 9.683, 0.114),
    P::new(24.0, -0.16, 12.7, 0.11),
    P::new(36.0, -0.22, 14.7, 0.11),
    P::new(48.0, -0.28, 16.7, 0.12),
    P::new(60.0, -0.34, 18.7, 0.12),
    P::new(72.0, -0.40, 21.0, 0.13),
    P::new(84.0, -0.46, 23.5, 0.13),
    P::new(96.0, -0.52, 26.1, 0.14),
    P::new(108.0, -0.58, 29.3, 0.15),
    P::new(120.0, -0.64, 32.9, 0.16),
    P::new(144.0, -0.76, 41.5, 0.17),
    P::new(168.0, -0.88, 53.0, 0.17),
];

pub const WFA_GIRLS: &[P] = &[
    P::new(0.0, 0.1548, 3.232, 0.135),
    P::new(1.0, 0.135, 4.18, 0.13),
    P::new(3.0, 0.0637, 5.859, 0.128),
    P::new(6.0, 0.0075, 7.297, 0.123),
    P::new(12.0, -0.055, 8.951, 0.119),
    P::new(24.0, -0.46, 12.1, 0.12),
    P::new(36.0, -0.52, 14.2, 0.13),
    P::new(48.0, -0.58, 16.2, 0.14),
    P::new(60.0, -0.64, 18.2, 0.15),
    P::new(72.0, -0.70, 20.5, 0.16),
    P::new(84.0, -0.76, 23.0, 0.17),
    P::new(120.0, -0.9, 34.0, 0.18),
    P::new(168.0, -1.1, 52.0, 0.16),
];

pub const HFA_BOYS: &[P] = &[
    P::new(0.0, 1.0, 49.88, 0.038),
    P::new(6.0, 1.0, 67.62, 0.032),
    P::new(12.0, 1.0, 75.75, 0.033),
    P::new(24.0, 1.0, 86.5, 0.04),
    P::new(36.0, 1.0, 95.0, 0.04),
    P::new(48.0, 1.0, 103.0, 0.04),
    P::new(60.0, 1.0, 109.5, 0.04),
    P::new(72.0, 1.0, 116.0, 0.04),
    P::new(84.0, 1.0, 122.0, 0.04),
    P::new(96.0, 1.0, 128.0, 0.04),
    P::new(108.0, 1.0, 133.5, 0.04),
    P::new(120.0, 1.0, 138.5, 0.04),
    P::new(144.0, 1.0, 149.0, 0.05),
    P::new(168.0, 1.0, 164.0, 0.04),
];

pub const HFA_GIRLS: &[P] = &[
    P::new(0.0, 1.0, 49.15, 0.038),
    P::new(6.0, 1.0, 65.73, 0.032),
    P::new(12.0, 1.0, 74.02, 0.033),
    P::new(24.0, 1.0, 85.5, 0.04),
    P::new(36.0, 1.0, 94.0, 0.04),
    P::new(48.0, 1.0, 102.5, 0.04),
    P::new(60.0, 1.0, 109.0, 0.04),
    P::new(72.0, 1.0, 115.5, 0.04),
    P::new(84.0, 1.0, 121.5, 0.04),
    P::new(96.0, 1.0, 127.5, 0.04),
    P::new(120.0, 1.0, 139.0, 0.04),
    P::new(144.0, 1.0, 152.0, 0.04),
    P::new(168.0, 1.0, 161.0, 0.04),
];

pub const HC_BOYS: &[P] = &[
    P::new(0.0, 1.0, 34.46, 0.038),
    P::new(3.0, 1.0, 40.5, 0.032),
    P::new(6.0, 1.0, 43.25, 0.030),
    P::new(12.0, 1.0, 46.06, 0.027),
    P::new(24.0, 1.0, 48.31, 0.026),
    P::new(36.0, 1.0, 49.5, 0.027),
    P::new(60.0, 1.0, 50.8, 0.028),
];

pub const HC_GIRLS: &[P] = &[
    P::new(0.0, 1.0, 33.87, 0.038),
    P::new(3.0, 1.0, 39.5, 0.032),
    P::new(6.0, 1.0, 42.06, 0.030),
    P::new(12.0, 1.0, 44.73, 0.027),
    P::new(24.0, 1.0, 47.11, 0.026),
    P::new(36.0, 1.0, 48.5, 0.027),
    P::new(60.0, 1.0, 50.0, 0.028),
];

// Weight-for-length/height, keyed by cm (45-120 cm, roughly 0-5 years).
pub const WFH_BOYS: &[P] = &[
    P::new(45.0, 0.85, 2.4, 0.08),
    P::new(50.0, 0.85, 3.4, 0.08),
    P::new(55.0, 0.85, 4.5, 0.08),
    P::new(60.0, 0.85, 5.7, 0.08),
    P::new(65.0, 0.85, 7.0, 0.08),
    P::new(70.0, 0.85, 8.3, 0.08),
    P::new(75.0, 0.85, 9.5, 0.08),
    P::new(80.0, 0.85, 10.7, 0.08),
    P::new(85.0, 0.85, 11.9, 0.08),
    P::new(90.0, 0.85, 13.2, 0.08),
    P::new(95.0, 0.85, 14.5, 0.08),
    P::new(100.0, 0.85, 15.9, 0.08),
    P::new(105.0, 0.85, 17.4, 0.08),
    P::new(110.0, 0.85, 19.0, 0.08),
    P::new(120.0, 0.85, 22.4, 0.09),
];

pub const WFH_GIRLS: &[P] = &[
    P::new(45.0, 0.85, 2.4, 0.08),
    P::new(50.0, 0.85, 3.2, 0.08),
    P::new(55.0, 0.85, 4.2, 0.08),
    P::new(60.0, 0.85, 5.4, 0.08),
    P::new(65.0, 0.85, 6.6, 0.08),
    P::new(70.0, 0.85, 7.8, 0.08),
    P::new(75.0, 0.85, 9.0, 0.08),
    P::new(80.0, 0.85, 10.2, 0.08),
    P::new(85.0, 0.85, 11.4, 0.08),
    P::new(90.0, 0.85, 12.7, 0.08),
    P::new(95.0, 0.85, 14.0, 0.08),
    P::new(100.0, 0.85, 15.4, 0.08),
    P::new(105.0, 0.85, 17.0, 0.08),
    P::new(110.0, 0.85, 18.7, 0.08),
    P::new(120.0, 0.85, 22.1, 0.09),
];

pub const BP_BOYS_SYSTOLIC: BpCoefficients = BpCoefficients::new(
    102.19768,
    [1.824298, 0.127775, 0.0024961, -0.0013507],
    [2.735038, -0.357675, 0.181727, -0.0439845],
);

pub const BP_BOYS_DIASTOLIC: BpCoefficients = BpCoefficients::new(
    61.0104,
    [0.683800, -0.098350, 0.017113, 0.0004593],
    [1.469936, -0.078492, 0.113502, -0.0097425],
);

pub const BP_GIRLS_SYSTOLIC: BpCoefficients = BpCoefficients::new(
    102.01027,
    [1.943970, 0.0059838, -0.0078961, -0.0005952],
    [2.035264, 0.025349, -0.018845, 0.012124],
);

pub const BP_GIRLS_DIASTOLIC: BpCoefficients = BpCoefficients::new(
    60.5051,
    [1.013010, 0.011572, 0.0042426, -0.0013781],
    [1.166411, 0.127952, -0.038084, -0.0102054],
);
