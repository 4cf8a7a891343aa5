mod flight;
mod physics;

pub use flight::{FlightBody, FlightModelPlugin};
pub use physics::PhysicsPlugin;

use bevy::prelude::*;

/// Fixed-step stages, run in declaration order.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    /// Flight models tick and publish their loads.
    Flight,
    /// Loads are summed per body.
    Forces,
    /// Rigid bodies advance.
    Integration,
}
