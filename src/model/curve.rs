use serde::{Deserialize, Serialize};

use crate::model::error::{FlightModelError, Result};

/// How values between two breakpoints are blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveInterpolation {
    /// Straight line between the two neighbouring breakpoints.
    #[default]
    Linear,
    /// Cubic Hermite segment with finite-difference tangents.
    Smooth,
}

/// Sampled aerodynamic coefficient curve, keyed by angle of attack in degrees.
///
/// Breakpoints are strictly increasing in angle. Queries outside the table
/// return the nearest endpoint value; the curve never extrapolates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAeroCurve", into = "RawAeroCurve")]
pub struct AeroCurve {
    points: Vec<(f64, f64)>,
    interpolation: CurveInterpolation,
}

/// Accepted on-disk shapes: a bare `[[deg, coef], ...]` list or a table with
/// an explicit interpolation mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawAeroCurve {
    Points(Vec<(f64, f64)>),
    Table {
        points: Vec<(f64, f64)>,
        #[serde(default)]
        interpolation: CurveInterpolation,
    },
}

impl TryFrom<RawAeroCurve> for AeroCurve {
    type Error = FlightModelError;

    fn try_from(raw: RawAeroCurve) -> Result<Self> {
        match raw {
            RawAeroCurve::Points(points) => Self::new(points, CurveInterpolation::Linear),
            RawAeroCurve::Table {
                points,
                interpolation,
            } => Self::new(points, interpolation),
        }
    }
}

impl From<AeroCurve> for RawAeroCurve {
    fn from(curve: AeroCurve) -> Self {
        RawAeroCurve::Table {
            points: curve.points,
            interpolation: curve.interpolation,
        }
    }
}

impl AeroCurve {
    /// Builds a curve from `(angle_deg, coefficient)` breakpoints.
    ///
    /// # Errors
    /// `InvalidCurve` if the table is empty, holds a non-finite value, or its
    /// angles are not strictly increasing.
    pub fn new(points: Vec<(f64, f64)>, interpolation: CurveInterpolation) -> Result<Self> {
        if points.is_empty() {
            return Err(FlightModelError::InvalidCurve(
                "curve needs at least one breakpoint".into(),
            ));
        }

        if let Some((angle, value)) = points
            .iter()
            .find(|(angle, value)| !angle.is_finite() || !value.is_finite())
        {
            return Err(FlightModelError::InvalidCurve(format!(
                "non-finite breakpoint ({angle}, {value})"
            )));
        }

        if let Some(pair) = points.windows(2).find(|pair| pair[1].0 <= pair[0].0) {
            return Err(FlightModelError::InvalidCurve(format!(
                "angles must be strictly increasing, found {} after {}",
                pair[1].0, pair[0].0
            )));
        }

        Ok(Self {
            points,
            interpolation,
        })
    }

    /// Built-in tables that are known to be ordered and finite.
    pub(crate) fn from_trusted(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            interpolation: CurveInterpolation::Linear,
        }
    }

    pub fn with_interpolation(mut self, interpolation: CurveInterpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn linear(points: Vec<(f64, f64)>) -> Result<Self> {
        Self::new(points, CurveInterpolation::Linear)
    }

    pub fn smooth(points: Vec<(f64, f64)>) -> Result<Self> {
        Self::new(points, CurveInterpolation::Smooth)
    }

    /// A curve that returns `value` for every angle.
    pub fn constant(value: f64) -> Result<Self> {
        Self::new(vec![(0.0, value)], CurveInterpolation::Linear)
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn interpolation(&self) -> CurveInterpolation {
        self.interpolation
    }

    /// Angle range covered by the breakpoints (degrees).
    pub fn domain(&self) -> (f64, f64) {
        (self.points[0].0, self.points[self.points.len() - 1].0)
    }

    /// Coefficient at `angle_deg`, clamped to the endpoint values outside the table.
    pub fn sample(&self, angle_deg: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];

        if angle_deg.is_nan() || angle_deg <= first.0 {
            return first.1;
        }
        if angle_deg >= last.0 {
            return last.1;
        }

        // first.0 < angle_deg < last.0, so 1 <= upper <= len - 1
        let upper = self.points.partition_point(|&(angle, _)| angle <= angle_deg);
        let lower = upper - 1;

        let (x0, y0) = self.points[lower];
        let (x1, y1) = self.points[upper];
        let h = x1 - x0;
        let t = (angle_deg - x0) / h;

        match self.interpolation {
            CurveInterpolation::Linear => y0 + (y1 - y0) * t,
            CurveInterpolation::Smooth => {
                let m0 = self.tangent(lower);
                let m1 = self.tangent(upper);
                let t2 = t * t;
                let t3 = t2 * t;

                (2.0 * t3 - 3.0 * t2 + 1.0) * y0
                    + (t3 - 2.0 * t2 + t) * h * m0
                    + (-2.0 * t3 + 3.0 * t2) * y1
                    + (t3 - t2) * h * m1
            }
        }
    }

    fn secant(&self, i: usize) -> f64 {
        let (x0, y0) = self.points[i];
        let (x1, y1) = self.points[i + 1];
        (y1 - y0) / (x1 - x0)
    }

    fn tangent(&self, i: usize) -> f64 {
        let last = self.points.len() - 1;
        match i {
            _ if last == 0 => 0.0,
            0 => self.secant(0),
            i if i == last => self.secant(last - 1),
            i => 0.5 * (self.secant(i - 1) + self.secant(i)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lift_table() -> Vec<(f64, f64)> {
        vec![(-20.0, -1.0), (0.0, 0.0), (10.0, 1.0), (20.0, 0.6)]
    }

    #[test]
    fn test_linear_interpolation() {
        let curve = AeroCurve::linear(lift_table()).unwrap();

        assert_relative_eq!(curve.sample(5.0), 0.5);
        assert_relative_eq!(curve.sample(-10.0), -0.5);
        assert_relative_eq!(curve.sample(15.0), 0.8);
    }

    #[test]
    fn test_breakpoints_are_exact() {
        for curve in [
            AeroCurve::linear(lift_table()).unwrap(),
            AeroCurve::smooth(lift_table()).unwrap(),
        ] {
            for &(angle, value) in curve.points() {
                assert_relative_eq!(curve.sample(angle), value, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_out_of_domain_clamps_to_endpoints() {
        let curve = AeroCurve::smooth(lift_table()).unwrap();

        assert_relative_eq!(curve.sample(-90.0), -1.0);
        assert_relative_eq!(curve.sample(90.0), 0.6);
        assert_relative_eq!(curve.sample(f64::NAN), -1.0);
    }

    #[test]
    fn test_smooth_interpolation_stays_between_linear_neighbours_on_straight_segments() {
        // Collinear points give zero curvature, so both modes agree
        let points = vec![(0.0, 0.0), (5.0, 0.5), (10.0, 1.0)];
        let linear = AeroCurve::linear(points.clone()).unwrap();
        let smooth = AeroCurve::smooth(points).unwrap();

        for angle in [1.0, 2.5, 4.0, 7.5, 9.0] {
            assert_relative_eq!(smooth.sample(angle), linear.sample(angle), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_single_point_curve_is_constant() {
        let curve = AeroCurve::constant(0.3).unwrap();

        assert_relative_eq!(curve.sample(-45.0), 0.3);
        assert_relative_eq!(curve.sample(0.0), 0.3);
        assert_relative_eq!(curve.sample(45.0), 0.3);
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert!(matches!(
            AeroCurve::linear(vec![]),
            Err(FlightModelError::InvalidCurve(_))
        ));
        assert!(matches!(
            AeroCurve::linear(vec![(0.0, 0.0), (0.0, 1.0)]),
            Err(FlightModelError::InvalidCurve(_))
        ));
        assert!(matches!(
            AeroCurve::linear(vec![(10.0, 0.0), (0.0, 1.0)]),
            Err(FlightModelError::InvalidCurve(_))
        ));
        assert!(matches!(
            AeroCurve::linear(vec![(0.0, f64::NAN)]),
            Err(FlightModelError::InvalidCurve(_))
        ));
    }

    #[test]
    fn test_deserialize_bare_list_and_table() {
        let bare: AeroCurve = serde_yaml::from_str("[[-10.0, -0.5], [10.0, 0.5]]").unwrap();
        assert_eq!(bare.interpolation(), CurveInterpolation::Linear);
        assert_relative_eq!(bare.sample(0.0), 0.0);

        let table: AeroCurve = serde_yaml::from_str(
            "points: [[0.0, 0.0], [10.0, 1.0]]\ninterpolation: smooth\n",
        )
        .unwrap();
        assert_eq!(table.interpolation(), CurveInterpolation::Smooth);
        assert_eq!(table.domain(), (0.0, 10.0));
    }

    #[test]
    fn test_deserialize_rejects_unordered_table() {
        let result: std::result::Result<AeroCurve, _> =
            serde_yaml::from_str("[[10.0, 0.5], [-10.0, -0.5]]");
        assert!(result.is_err());
    }
}
