use bevy::prelude::*;
use nalgebra::Vector3;

use crate::utils::{DEFAULT_TIMESTEP, GRAVITY};

/// Settings of the reference rigid-body integrator.
#[derive(Resource, Debug, Clone)]
pub struct PhysicsConfig {
    /// Fixed step (s), installed as the `Time<Fixed>` period by `PhysicsPlugin`.
    pub timestep: f64,

    // Integrator safety limits
    pub max_velocity: f64,
    pub max_angular_velocity: f64,

    /// World-frame gravitational acceleration, Y-up.
    pub gravity: Vector3<f64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP, // 120 Hz
            max_velocity: 600.0, // m/s
            max_angular_velocity: 10.0, // rad/s
            gravity: Vector3::new(0.0, -GRAVITY, 0.0),
        }
    }
}
