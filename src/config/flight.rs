use bevy::log::info;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ConfigError;
use crate::model::{
    AeroCurve, AtmosphereModel, AttitudeConfig, ControlAuthority, CurveInterpolation,
    DragCoefficients, FlightModelError, InducedDragConfig, InducedDragModel,
};

/// Immutable tuning of one flying body, set once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightModelConfig {
    /// Name of the body, used in logs.
    pub name: String,
    /// Thrust at full throttle (N).
    pub max_thrust: f64,
    /// Throttle change per second at full axis deflection.
    pub throttle_rate: f64,
    /// Throttle setting at spawn and after a reset [0, 1].
    pub initial_throttle: f64,
    /// Parasitic drag per signed body axis.
    pub drag: DragCoefficients,
    /// Reference area of the main wing (m²).
    pub wing_area: f64,
    /// Reference area of the vertical stabilizer (m²), the wing area when unset.
    pub stabilizer_area: Option<f64>,
    pub attitude: AttitudeConfig,
    /// Lift coefficient against angle of attack (degrees).
    pub lift_curve: AeroCurve,
    pub induced_drag: InducedDragConfig,
    pub atmosphere: AtmosphereModel,
}

impl Default for FlightModelConfig {
    /// A light jet; control authority ramps in around 200 m/s.
    fn default() -> Self {
        Self {
            name: "LightJet".to_string(),
            max_thrust: 50_000.0,
            throttle_rate: 1.0,
            initial_throttle: 0.0,
            drag: DragCoefficients::default(),
            wing_area: 27.9,
            stabilizer_area: Some(6.0),
            attitude: AttitudeConfig::default(),
            lift_curve: default_lift_curve(),
            induced_drag: InducedDragConfig::default(),
            atmosphere: AtmosphereModel::default(),
        }
    }
}

impl FlightModelConfig {
    /// A slow trainer with a smooth lift curve and induced drag applied.
    pub fn trainer() -> Self {
        Self {
            name: "Trainer".to_string(),
            max_thrust: 4_000.0,
            throttle_rate: 0.5,
            initial_throttle: 0.0,
            drag: DragCoefficients {
                forward: 0.08,
                backward: 0.5,
                up: 2.0,
                down: 2.0,
                right: 1.0,
                left: 1.0,
            },
            wing_area: 16.2,
            stabilizer_area: Some(2.5),
            attitude: AttitudeConfig {
                max_angular_velocity: Vector3::new(1.5, 0.3, 0.8),
                max_angular_acceleration: Vector3::new(3.0, 0.6, 1.6),
                turn_power: 1.0,
                authority: ControlAuthority {
                    steepness: 0.2,
                    midpoint_speed: 30.0,
                    override_full_authority: false,
                },
            },
            lift_curve: default_lift_curve().with_interpolation(CurveInterpolation::Smooth),
            induced_drag: InducedDragConfig {
                model: InducedDragModel::Curve {
                    curve: default_induced_drag_curve(),
                },
                apply: true,
            },
            atmosphere: AtmosphereModel::default(),
        }
    }

    /// Loads a configuration from a `.yaml`, `.yml` or `.json` file and validates it.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Returns
    /// The validated configuration, or the first problem found.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        info!("Loaded flight model config {} from {}", config.name, path.display());
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn stabilizer_area(&self) -> f64 {
        self.stabilizer_area.unwrap_or(self.wing_area)
    }

    /// Checks every scalar the force math relies on.
    pub fn validate(&self) -> Result<(), FlightModelError> {
        let non_negative = |name: &str, value: f64| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(FlightModelError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )))
            }
        };
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(FlightModelError::InvalidConfig(format!(
                    "{name} must be finite and positive, got {value}"
                )))
            }
        };

        non_negative("max_thrust", self.max_thrust)?;
        non_negative("throttle_rate", self.throttle_rate)?;
        if !(0.0..=1.0).contains(&self.initial_throttle) {
            return Err(FlightModelError::InvalidConfig(format!(
                "initial_throttle must be within [0, 1], got {}",
                self.initial_throttle
            )));
        }

        for value in self.drag.values() {
            non_negative("drag coefficient", value)?;
        }

        positive("wing_area", self.wing_area)?;
        positive("stabilizer_area", self.stabilizer_area())?;

        self.attitude.validate()?;

        if let InducedDragModel::LiftSquared { scale } = self.induced_drag.model {
            non_negative("induced drag scale", scale)?;
        }

        positive("sea_level_density", self.atmosphere.sea_level_density)?;
        positive("scale_height", self.atmosphere.scale_height)?;

        Ok(())
    }
}

/// Symmetric lift curve stalling at ±15°.
pub fn default_lift_curve() -> AeroCurve {
    AeroCurve::from_trusted(vec![
        (-90.0, 0.0),
        (-40.0, -0.6),
        (-15.0, -1.2),
        (0.0, 0.0),
        (15.0, 1.2),
        (40.0, 0.6),
        (90.0, 0.0),
    ])
}

/// Induced drag coefficient growing with |angle of attack|.
pub fn default_induced_drag_curve() -> AeroCurve {
    AeroCurve::from_trusted(vec![
        (-90.0, 1.2),
        (-15.0, 0.12),
        (0.0, 0.0),
        (15.0, 0.12),
        (90.0, 1.2),
    ])
}
