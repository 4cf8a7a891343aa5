use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::KNOTS_PER_METRE_PER_SECOND;

/// Intermediate values of one tick, for external visualisation and logs.
///
/// Vectors are in world frame unless the field name says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightTelemetry {
    pub dt: f64,
    pub altitude: f64,
    pub air_density: f64,
    /// |body velocity| [m/s]
    pub airspeed: f64,
    pub angle_of_attack_deg: f64,
    pub angle_of_attack_yaw_deg: f64,
    pub body_acceleration: Vector3<f64>,
    pub g_force: f64,
    pub throttle: f64,
    pub control_authority: f64,
    pub wing_lift_coefficient: f64,
    pub stabilizer_lift_coefficient: f64,
    pub thrust: Vector3<f64>,
    pub parasitic_drag: Vector3<f64>,
    pub wing_lift: Vector3<f64>,
    pub stabilizer_lift: Vector3<f64>,
    /// Reported whether or not it was applied
    pub induced_drag: Vector3<f64>,
    pub induced_drag_applied: bool,
    pub target_rate_body: Vector3<f64>,
    pub net_force: Vector3<f64>,
    pub net_torque: Vector3<f64>,
}

impl FlightTelemetry {
    pub fn airspeed_knots(&self) -> f64 {
        self.airspeed * KNOTS_PER_METRE_PER_SECOND
    }
}

/// Receives telemetry after the force math of each tick has finished.
pub trait TelemetrySink {
    fn record(&mut self, telemetry: &FlightTelemetry);
}

impl<F: FnMut(&FlightTelemetry)> TelemetrySink for F {
    fn record(&mut self, telemetry: &FlightTelemetry) {
        self(telemetry)
    }
}

/// Discards everything.
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn record(&mut self, _telemetry: &FlightTelemetry) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |t: &FlightTelemetry| seen.push(t.g_force);
            sink.record(&FlightTelemetry {
                g_force: 2.5,
                ..FlightTelemetry::default()
            });
        }
        assert_eq!(seen, vec![2.5]);
    }

    #[test]
    fn test_airspeed_knots() {
        let telemetry = FlightTelemetry {
            airspeed: 100.0,
            ..FlightTelemetry::default()
        };
        assert_relative_eq!(telemetry.airspeed_knots(), 194.38, epsilon = 0.01);
    }
}
