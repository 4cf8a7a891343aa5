mod aerodynamics;
mod physics;

pub use aerodynamics::{apply_flight_output, flight_model_system};
pub use physics::{
    calculate_net_forces_moments, force_calculator_system, integrate_state,
    physics_integrator_system,
};
