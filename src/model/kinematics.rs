use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::model::error::{FlightModelError, Result};
use crate::model::state::FlightState;
use crate::utils::GRAVITY;

/// Motion state re-expressed in the body frame (+X forward, +Y up, +Z right).
///
/// Recomputed every tick; nothing here outlives the tick except the linear
/// velocity, which [`SamplerState`] carries forward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyFrameKinematics {
    /// Linear velocity in body frame [m/s]
    pub linear_velocity: Vector3<f64>,
    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
    /// Angle between velocity and the forward axis in the vertical plane [rad]
    pub angle_of_attack: f64,
    /// Angle between velocity and the forward axis in the horizontal plane [rad]
    pub angle_of_attack_yaw: f64,
    /// Backward-difference acceleration in body frame [m/s²]
    pub acceleration: Vector3<f64>,
    /// |acceleration| expressed in multiples of standard gravity
    pub g_force: f64,
}

impl BodyFrameKinematics {
    /// Airspeed along the nose.
    pub fn forward_speed(&self) -> f64 {
        self.linear_velocity.x
    }

    pub fn speed(&self) -> f64 {
        self.linear_velocity.norm()
    }
}

/// Cross-tick memory of the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SamplerState {
    /// Body-frame linear velocity seen on the previous tick.
    pub previous_linear_velocity: Vector3<f64>,
}

/// Derives [`BodyFrameKinematics`] from a world-frame snapshot.
pub struct KinematicsSampler;

impl KinematicsSampler {
    /// Samples one tick and returns the state to hand to the next one.
    ///
    /// # Arguments
    /// * `state` - Sampler memory from the previous tick.
    /// * `flight` - Current rigid-body snapshot.
    /// * `dt` - Fixed step length (s).
    ///
    /// # Errors
    /// `InvalidTimestep` when `dt` is not a finite positive number.
    pub fn sample(
        state: &SamplerState,
        flight: &FlightState,
        dt: f64,
    ) -> Result<(SamplerState, BodyFrameKinematics)> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(FlightModelError::InvalidTimestep(dt));
        }

        let inverse = flight.orientation.inverse();
        let linear_velocity = inverse * flight.linear_velocity;
        let angular_velocity = inverse * flight.angular_velocity;

        let acceleration = (linear_velocity - state.previous_linear_velocity) / dt;

        let kinematics = BodyFrameKinematics {
            linear_velocity,
            angular_velocity,
            angle_of_attack: angle_of_attack(&linear_velocity),
            angle_of_attack_yaw: angle_of_attack_yaw(&linear_velocity),
            acceleration,
            g_force: acceleration.norm() / GRAVITY,
        };

        let next = SamplerState {
            previous_linear_velocity: linear_velocity,
        };

        Ok((next, kinematics))
    }
}

/// Pitch-plane angle of attack of a body-frame velocity (radians).
pub fn angle_of_attack(velocity_body: &Vector3<f64>) -> f64 {
    (-velocity_body.y).atan2(velocity_body.x)
}

/// Yaw-plane angle of attack of a body-frame velocity (radians).
pub fn angle_of_attack_yaw(velocity_body: &Vector3<f64>) -> f64 {
    (-velocity_body.z).atan2(velocity_body.x)
}
