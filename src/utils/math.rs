use nalgebra::Vector3;

/// Logistic function, 0.5 at zero.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Clamps each component of `value` into `[-|limit|, |limit|]` of the
/// matching axis. A NaN limit allows no movement on that axis.
pub fn clamp_each(value: &Vector3<f64>, limit: &Vector3<f64>) -> Vector3<f64> {
    value.zip_map(limit, |v, l| {
        let l = if l.is_nan() { 0.0 } else { l.abs() };
        v.clamp(-l, l)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!(sigmoid(800.0) <= 1.0);
    }

    #[test]
    fn test_clamp_each() {
        let clamped = clamp_each(&Vector3::new(5.0, -5.0, 0.5), &Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(clamped, Vector3::new(1.0, -2.0, 0.5));
    }

    #[test]
    fn test_clamp_each_tolerates_bad_limits() {
        let clamped = clamp_each(
            &Vector3::new(5.0, -5.0, 0.5),
            &Vector3::new(-1.0, f64::NAN, f64::INFINITY),
        );
        assert_eq!(clamped, Vector3::new(1.0, 0.0, 0.5));
    }
}
