//! LMS interpolation and Box-Cox z-scores.
//!
//! For a measurement `X` against parameters `(L, M, S)`:
//!
//! ```text
//! |L| < 0.01:  Z = ln(X / M) / S
//! otherwise:   Z = ((X / M)^L - 1) / (L * S)
//! ```
//!
//! Keys outside a table's domain use the nearest edge point; there is no
//! extrapolation.

use growth_model::{Lms, MeasurementType, Sex};
use growth_standards::{GrowthStandards, ReferenceTable};
use tracing::trace;

/// Below this magnitude of `L` the log-normal limit of the transform is used.
pub const LOG_LIMIT_EPSILON: f64 = 0.01;

/// Returns the LMS parameters at `key`, linearly interpolated between the
/// bracketing control points and clamped to the edge points outside the
/// table's domain.
///
/// # Examples
///
/// ```
/// use growth_core::lms::interpolate;
/// use growth_model::ReferencePoint;
/// use growth_standards::ReferenceTable;
///
/// let table = ReferenceTable::new(vec![
///     ReferencePoint::new(0.0, 1.0, 30.0, 0.04),
///     ReferencePoint::new(10.0, 1.0, 40.0, 0.02),
/// ])
/// .unwrap();
/// assert_eq!(interpolate(&table, 5.0).m, 35.0);
/// assert_eq!(interpolate(&table, -3.0).m, 30.0);
/// assert_eq!(interpolate(&table, 99.0).m, 40.0);
/// ```
pub fn interpolate(table: &ReferenceTable, key: f64) -> Lms {
    let first = table.first();
    let last = table.last();
    if key <= first.key {
        return first.lms();
    }
    if key >= last.key {
        return last.lms();
    }
    let Some((lower, upper)) = table.bracket(key) else {
        // Only reachable for NaN keys.
        trace!(key, "unordered key, using first control point");
        return first.lms();
    };
    let t = (key - lower.key) / (upper.key - lower.key);
    Lms::new(
        lerp(lower.l, upper.l, t),
        lerp(lower.m, upper.m, t),
        lerp(lower.s, upper.s, t),
    )
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + t * (to - from)
}

/// Box-Cox z-score of `value` under `lms`.
///
/// Returns `0.0` when the value is not a positive finite number, when the
/// distribution is degenerate (`M == 0` or `S == 0`), and when the transform
/// itself does not produce a finite number.
pub fn z_score_from_lms(lms: Lms, value: f64) -> f64 {
    if !(value > 0.0 && value.is_finite()) || lms.is_degenerate() {
        return 0.0;
    }
    let ratio = value / lms.m;
    let z = if lms.l.abs() < LOG_LIMIT_EPSILON {
        ratio.ln() / lms.s
    } else {
        (ratio.powf(lms.l) - 1.0) / (lms.l * lms.s)
    };
    if z.is_finite() { z } else { 0.0 }
}

/// Measurement value lying at `z` standard deviations under `lms`.
///
/// Inverse of [`z_score_from_lms`]. `None` when the distribution is
/// degenerate or `z` lies beyond the support of the power transform
/// (`1 + L·S·z <= 0`).
pub fn value_at_z(lms: Lms, z: f64) -> Option<f64> {
    if lms.is_degenerate() || !z.is_finite() {
        return None;
    }
    let value = if lms.l.abs() < LOG_LIMIT_EPSILON {
        lms.m * (lms.s * z).exp()
    } else {
        let base = 1.0 + lms.l * lms.s * z;
        if base <= 0.0 {
            return None;
        }
        lms.m * base.powf(1.0 / lms.l)
    };
    value.is_finite().then_some(value)
}

/// Z-score of `value` at `key` for the given indicator and sex.
///
/// `0.0` when the registry has no table for the pair, which is always the
/// case for [`Sex::Unspecified`].
pub fn z_score(
    standards: &GrowthStandards,
    kind: MeasurementType,
    sex: Sex,
    key: f64,
    value: f64,
) -> f64 {
    let Some(table) = standards.table(kind, sex) else {
        return 0.0;
    };
    let lms = interpolate(table, key);
    let z = z_score_from_lms(lms, value);
    trace!(
        indicator = kind.as_code(),
        sex = sex.as_str(),
        key,
        value,
        l = lms.l,
        m = lms.m,
        s = lms.s,
        z,
        "z-score"
    );
    z
}
