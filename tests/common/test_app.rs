use bevy::core::TaskPoolPlugin;
use bevy::prelude::*;
use flight_model::{
    config::PhysicsConfig,
    plugins::{FlightBody, FlightModelPlugin, PhysicsPlugin},
};

/// Builder for a headless app that steps `FixedUpdate` by hand.
#[derive(Default)]
pub struct TestAppBuilder {
    bodies: Vec<FlightBody>,
    physics_config: Option<PhysicsConfig>,
    without_integrator: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: FlightBody) -> Self {
        self.bodies.push(body);
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    /// Only `FlightModelPlugin` is added: loads are computed at Bevy's default
    /// fixed rate but bodies never move.
    pub fn without_integrator(mut self) -> Self {
        self.without_integrator = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(TaskPoolPlugin::default());

        let mut flight = FlightModelPlugin::new();
        for body in self.bodies {
            flight = flight.with_body(body);
        }
        app.add_plugins(flight);

        if !self.without_integrator {
            let physics_config = self.physics_config.unwrap_or_default();
            app.add_plugins(PhysicsPlugin::with_config(physics_config));
        }

        app.finish();
        app.cleanup();
        // Runs Startup, which spawns the bodies
        app.update();

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs `steps` fixed steps.
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Period of the fixed schedule (s).
    pub fn fixed_period(&self) -> f64 {
        self.app.world().resource::<Time<Fixed>>().timestep().as_secs_f64()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn count<T: Component>(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).count()
    }
}
