mod force_calculator;
mod integrator;

pub use force_calculator::{calculate_net_forces_moments, force_calculator_system};
pub use integrator::{integrate_state, physics_integrator_system};
