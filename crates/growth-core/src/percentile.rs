//! Standard-normal percentiles.

/// Percentile (0-100) of a z-score under the standard normal distribution.
///
/// Non-finite scores map to 50.
pub fn percentile_from_z(z: f64) -> f64 {
    if !z.is_finite() {
        return 50.0;
    }
    (standard_normal_cdf(z) * 100.0).clamp(0.0, 100.0)
}

/// Φ(z), accurate to about 1e-7.
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Error function, Abramowitz and Stegun 7.1.26.
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();
    sign * y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_is_fiftieth() {
        assert!((percentile_from_z(0.0) - 50.0).abs() < 1e-6);
    }

    #[test]
    fn known_quantiles() {
        assert!((percentile_from_z(1.0) - 84.134).abs() < 1e-3);
        assert!((percentile_from_z(-1.0) - 15.866).abs() < 1e-3);
        assert!((percentile_from_z(1.645) - 95.0).abs() < 1e-2);
        assert!((percentile_from_z(-2.0) - 2.275).abs() < 1e-3);
    }

    #[test]
    fn symmetric_and_bounded() {
        for z in [0.3, 1.1, 2.7, 5.0, 40.0] {
            let sum = percentile_from_z(z) + percentile_from_z(-z);
            assert!((sum - 100.0).abs() < 1e-6);
        }
        assert!(percentile_from_z(40.0) <= 100.0);
        assert!(percentile_from_z(-40.0) >= 0.0);
        assert_eq!(percentile_from_z(f64::NAN), 50.0);
    }
}
