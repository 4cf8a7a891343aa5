use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::model::error::{FlightModelError, Result};
use crate::model::kinematics::BodyFrameKinematics;
use crate::utils::{clamp_each, sigmoid};

/// Speed-dependent effectiveness of the control surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlAuthority {
    /// Slope of the logistic ramp (1/(m/s)).
    pub steepness: f64,
    /// Forward speed at which authority reaches one half (m/s).
    pub midpoint_speed: f64,
    /// Pins authority to 1 regardless of speed.
    pub override_full_authority: bool,
}

impl Default for ControlAuthority {
    fn default() -> Self {
        Self {
            steepness: 0.3,
            midpoint_speed: 200.0,
            override_full_authority: false,
        }
    }
}

impl ControlAuthority {
    pub fn factor(&self, speed: f64) -> f64 {
        if self.override_full_authority {
            return 1.0;
        }
        sigmoid(self.steepness * (speed - self.midpoint_speed))
    }
}

/// Turn-rate limits and gain. Vectors are ordered roll (X), yaw (Y), pitch (Z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttitudeConfig {
    /// Angular rate commanded by a full stick deflection [rad/s]
    pub max_angular_velocity: Vector3<f64>,
    /// Largest rate change corrected per second [rad/s²]
    pub max_angular_acceleration: Vector3<f64>,
    /// Gain applied to both the commanded rate and the final torque
    pub turn_power: f64,
    pub authority: ControlAuthority,
}

impl Default for AttitudeConfig {
    fn default() -> Self {
        Self {
            max_angular_velocity: Vector3::new(3.0, 0.5, 1.5),
            max_angular_acceleration: Vector3::new(6.0, 1.0, 3.0),
            turn_power: 1.0,
            authority: ControlAuthority::default(),
        }
    }
}

impl AttitudeConfig {
    /// Rejects limits the controller could not clamp against.
    ///
    /// # Errors
    /// `InvalidConfig` if a rate or acceleration limit is negative or
    /// non-finite, or a gain is non-finite.
    pub fn validate(&self) -> Result<()> {
        let limits = self
            .max_angular_velocity
            .iter()
            .map(|value| ("max_angular_velocity", *value))
            .chain(
                self.max_angular_acceleration
                    .iter()
                    .map(|value| ("max_angular_acceleration", *value)),
            );
        for (name, value) in limits {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FlightModelError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        let gains = [
            ("turn_power", self.turn_power),
            ("authority steepness", self.authority.steepness),
            ("authority midpoint_speed", self.authority.midpoint_speed),
        ];
        for (name, value) in gains {
            if !value.is_finite() {
                return Err(FlightModelError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// What the controller decided this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttitudeCommand {
    /// Body rates the pilot is asking for [rad/s]
    pub target_rate: Vector3<f64>,
    /// Rate-limited error before authority and gain scaling
    pub correction: Vector3<f64>,
    pub authority: f64,
    /// Body-frame corrective torque
    pub torque: Vector3<f64>,
}

/// Rate-limited proportional controller from stick intent to corrective torque.
///
/// Memoryless: there is no integral or derivative term, each tick compares
/// the commanded rate with the measured one from scratch. It borrows its
/// limits, so a model builds one per tick from its own configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeController<'a> {
    config: &'a AttitudeConfig,
}

impl<'a> AttitudeController<'a> {
    /// # Errors
    /// `InvalidConfig` if `config` fails [`AttitudeConfig::validate`].
    pub fn new(config: &'a AttitudeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AttitudeConfig {
        self.config
    }

    /// Body rates commanded by the stick.
    pub fn target_rate(&self, stick: &Vector3<f64>) -> Vector3<f64> {
        stick.component_mul(&self.config.max_angular_velocity) * self.config.turn_power
    }

    /// Per-axis error clamped to what the body may correct within `dt`.
    pub fn rate_limited_correction(
        &self,
        target: &Vector3<f64>,
        current: &Vector3<f64>,
        dt: f64,
    ) -> Vector3<f64> {
        let max_delta = self.config.max_angular_acceleration * dt;
        clamp_each(&(target - current), &max_delta)
    }

    /// Corrective torque for this tick, in body frame.
    ///
    /// # Arguments
    /// * `stick` - Stick axes in body order (roll, yaw, pitch), each in [-1, 1].
    /// * `kinematics` - Fresh body-frame sample of this tick.
    /// * `dt` - Fixed step length (s).
    pub fn command(
        &self,
        stick: &Vector3<f64>,
        kinematics: &BodyFrameKinematics,
        dt: f64,
    ) -> AttitudeCommand {
        let target_rate = self.target_rate(stick);
        let correction =
            self.rate_limited_correction(&target_rate, &kinematics.angular_velocity, dt);
        let authority = self.config.authority.factor(kinematics.forward_speed());

        AttitudeCommand {
            target_rate,
            correction,
            authority,
            torque: correction * authority * self.config.turn_power,
        }
    }
}
