mod flight;
mod physics;

pub use flight::{default_induced_drag_curve, default_lift_curve, FlightModelConfig};
pub use physics::PhysicsConfig;

use thiserror::Error;

use crate::model::FlightModelError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("Invalid flight model configuration: {0}")]
    Validation(#[from] FlightModelError),
}
