use bevy::prelude::*;

use crate::config::PhysicsConfig;
use crate::plugins::FlightSet;
use crate::systems::{force_calculator_system, physics_integrator_system};

/// Reference rigid-body integrator for headless runs.
///
/// Hosts that bring their own physics engine skip this plugin and read the
/// loads from `PhysicsComponent` instead.
#[derive(Default)]
pub struct PhysicsPlugin {
    config: PhysicsConfig,
}

impl PhysicsPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_seconds(self.config.timestep));

        app.configure_sets(FixedUpdate, (FlightSet::Forces, FlightSet::Integration).chain());

        app.add_systems(
            FixedUpdate,
            (
                force_calculator_system.in_set(FlightSet::Forces),
                physics_integrator_system.in_set(FlightSet::Integration),
            ),
        );
    }
}
