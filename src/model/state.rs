use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::model::error::{FlightModelError, Result};

/// Read-only snapshot of the rigid body, owned by the external integrator.
///
/// World frame is Y-up. Velocities are expressed in world frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Position in world space [m]
    pub position: Vector3<f64>,
    /// Rotation from body to world frame
    pub orientation: UnitQuaternion<f64>,
    /// Linear velocity in world space [m/s]
    pub linear_velocity: Vector3<f64>,
    /// Angular velocity in world space [rad/s]
    pub angular_velocity: Vector3<f64>,
    /// Total mass [kg]
    pub mass: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            mass: 1.0,
        }
    }
}

impl FlightState {
    /// Height above the world origin, taken from the vertical (Y) axis.
    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    /// Rejects snapshots carrying NaN or infinite components.
    pub fn validate(&self) -> Result<()> {
        if !self.position.iter().all(|x| x.is_finite()) {
            return Err(FlightModelError::NonFiniteState("position"));
        }
        if !self.orientation.coords.iter().all(|x| x.is_finite()) {
            return Err(FlightModelError::NonFiniteState("orientation"));
        }
        if !self.linear_velocity.iter().all(|x| x.is_finite()) {
            return Err(FlightModelError::NonFiniteState("linear velocity"));
        }
        if !self.angular_velocity.iter().all(|x| x.is_finite()) {
            return Err(FlightModelError::NonFiniteState("angular velocity"));
        }
        if !self.mass.is_finite() {
            return Err(FlightModelError::NonFiniteState("mass"));
        }
        Ok(())
    }
}

/// Control axes delivered by the host input layer each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Signed throttle axis; positive opens the throttle [-1, 1]
    pub throttle: f64,
    /// Roll stick, positive rolls about +X [-1, 1]
    pub roll: f64,
    /// Pitch stick, positive pitches the nose up (about +Z) [-1, 1]
    pub pitch: f64,
    /// Yaw stick, positive rotates about +Y [-1, 1]
    pub yaw: f64,
}

impl ControlInputs {
    pub fn new(throttle: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            throttle,
            roll,
            pitch,
            yaw,
        }
    }

    /// Copy with every axis clamped to [-1, 1]; NaN axes read as neutral.
    pub fn clamped(&self) -> Self {
        let clamp = |x: f64| if x.is_nan() { 0.0 } else { x.clamp(-1.0, 1.0) };
        Self {
            throttle: clamp(self.throttle),
            roll: clamp(self.roll),
            pitch: clamp(self.pitch),
            yaw: clamp(self.yaw),
        }
    }

    /// Stick axes laid onto the body rotation axes: X = roll, Y = yaw, Z = pitch.
    pub fn stick(&self) -> Vector3<f64> {
        Vector3::new(self.roll, self.yaw, self.pitch)
    }
}
