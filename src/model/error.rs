use thiserror::Error;

/// Contract violations detected by the flight model.
///
/// Per-tick variants mean the tick was skipped and no state was mutated.
/// Curve and config variants are raised once, at load time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlightModelError {
    #[error("Invalid timestep: {0} (must be finite and greater than zero)")]
    InvalidTimestep(f64),

    #[error("Non-finite flight state: {0}")]
    NonFiniteState(&'static str),

    #[error("Non-finite flight model output: {0}")]
    NonFiniteOutput(&'static str),

    #[error("Invalid aero curve: {0}")]
    InvalidCurve(String),

    #[error("Invalid flight model configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FlightModelError>;
