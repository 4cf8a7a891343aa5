//! Engine-agnostic force and torque pipeline.
//!
//! Per tick: [`KinematicsSampler`] → {[`ForceModel`], [`AttitudeController`]}
//! → [`FlightOutput`], sequenced by [`FlightModel`]. [`AtmosphereModel`] and
//! [`AeroCurve`] are pure lookups.

mod atmosphere;
mod attitude;
mod curve;
mod error;
mod flight;
mod forces;
mod kinematics;
mod state;
mod telemetry;

pub use atmosphere::AtmosphereModel;
pub use attitude::{AttitudeCommand, AttitudeConfig, AttitudeController, ControlAuthority};
pub use curve::{AeroCurve, CurveInterpolation};
pub use error::{FlightModelError, Result};
pub use flight::{FlightModel, FlightOutput};
pub use forces::{
    parasitic_drag, surface_forces, thrust_force, AeroSurface, BodyForces, DragCoefficients,
    ForceModel, InducedDragConfig, InducedDragModel, SurfaceForces, ThrottleState,
    DIRECTION_EPSILON, MIN_LIFT_SPEED_SQ,
};
pub use kinematics::{
    angle_of_attack, angle_of_attack_yaw, BodyFrameKinematics, KinematicsSampler, SamplerState,
};
pub use state::{ControlInputs, FlightState};
pub use telemetry::{FlightTelemetry, NullTelemetry, TelemetrySink};
