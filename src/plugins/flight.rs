use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};

use crate::components::{
    FlightControls, FlightModelComponent, FlightTelemetryComponent, PhysicsComponent,
    SpatialComponent,
};
use crate::config::FlightModelConfig;
use crate::model::FlightModel;
use crate::plugins::FlightSet;
use crate::systems::flight_model_system;

/// Everything needed to spawn one flying body.
#[derive(Debug, Clone)]
pub struct FlightBody {
    pub config: FlightModelConfig,
    pub spatial: SpatialComponent,
    pub mass: f64,
    /// Body-frame inertia tensor [kg·m²]
    pub inertia: Matrix3<f64>,
}

impl FlightBody {
    pub fn new(config: FlightModelConfig, spatial: SpatialComponent) -> Self {
        Self {
            config,
            spatial,
            mass: 9_000.0,
            inertia: Matrix3::from_diagonal(&Vector3::new(20_000.0, 80_000.0, 60_000.0)),
        }
    }

    pub fn with_mass(mut self, mass: f64, inertia: Matrix3<f64>) -> Self {
        self.mass = mass;
        self.inertia = inertia;
        self
    }
}

/// Ticks a flight model per body on the fixed-step schedule.
///
/// Works with any integrator that consumes `PhysicsComponent` loads; pair it
/// with [`PhysicsPlugin`](crate::plugins::PhysicsPlugin) for a complete
/// headless simulation. Each tick uses the period of `Time<Fixed>`, so a host
/// that sets its own fixed rate gets matching Δt.
#[derive(Default)]
pub struct FlightModelPlugin {
    bodies: Vec<FlightBody>,
}

impl FlightModelPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: FlightBody) -> Self {
        self.bodies.push(body);
        self
    }

    fn spawn_bodies(mut commands: Commands, bodies: &[FlightBody]) {
        for body in bodies {
            let name = body.config.name.clone();
            let model = match FlightModel::new(body.config.clone()) {
                Ok(model) => model,
                Err(err) => {
                    error!("Not spawning {}: {}", name, err);
                    continue;
                }
            };

            commands.spawn((
                FlightModelComponent(model),
                FlightControls::default(),
                FlightTelemetryComponent::default(),
                body.spatial.clone(),
                PhysicsComponent::new(body.mass, body.inertia),
                Name::new(name.clone()),
            ));
            info!("Spawned flight body {} at {:?}", name, body.spatial.position);
        }
    }
}

impl Plugin for FlightModelPlugin {
    fn build(&self, app: &mut App) {
        let bodies = self.bodies.clone();

        // Leaves a rate set by the host or PhysicsPlugin in place
        app.init_resource::<Time<Fixed>>();

        app.configure_sets(FixedUpdate, (FlightSet::Flight, FlightSet::Forces).chain())
            .add_systems(
                Startup,
                move |commands: Commands| Self::spawn_bodies(commands, &bodies),
            )
            .add_systems(FixedUpdate, flight_model_system.in_set(FlightSet::Flight));
    }
}
