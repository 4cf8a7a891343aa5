use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::model::FlightState;

/// Rigid-body state of an entity, owned by the integrator.
///
/// World frame is Y-up. Both velocities are expressed in world frame.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in world space [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Snapshot handed to the flight model for one tick.
    pub fn flight_state(&self, mass: f64) -> FlightState {
        FlightState {
            position: self.position,
            orientation: self.attitude,
            linear_velocity: self.velocity,
            angular_velocity: self.angular_velocity,
            mass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_state_snapshot() {
        let spatial = SpatialComponent::new(
            Vector3::new(0.0, 500.0, 0.0),
            Vector3::new(80.0, 0.0, 0.0),
            UnitQuaternion::identity(),
            Vector3::new(0.0, 0.1, 0.0),
        );

        let state = spatial.flight_state(1200.0);
        assert_eq!(state.altitude(), 500.0);
        assert_eq!(state.linear_velocity, spatial.velocity);
        assert_eq!(state.angular_velocity, spatial.angular_velocity);
        assert_eq!(state.mass, 1200.0);
    }
}
