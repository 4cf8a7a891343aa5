mod common;

use approx::assert_relative_eq;
use bevy::prelude::{Fixed, Time};
use flight_model::components::{
    FlightControls, FlightModelComponent, FlightTelemetryComponent, ForceCategory,
    PhysicsComponent, SpatialComponent,
};
use nalgebra::Vector3;

use crate::common::{
    assert_physics_valid, assert_spatial_valid, assert_telemetry_valid, full_authority_config,
    test_body, test_config, test_physics_config, TestAppBuilder,
};

#[test]
fn test_bodies_spawned_at_startup() {
    let mut app = TestAppBuilder::new()
        .with_body(test_body(test_config(), 50.0))
        .with_body(test_body(full_authority_config(), 80.0))
        .build();

    assert_eq!(app.count::<FlightModelComponent>(), 2);
    assert_eq!(app.count::<FlightControls>(), 2);
    assert_eq!(app.count::<SpatialComponent>(), 2);
}

#[test]
fn test_invalid_body_is_not_spawned() {
    let mut config = test_config();
    config.wing_area = -1.0;

    let mut app = TestAppBuilder::new()
        .with_body(test_body(config, 50.0))
        .with_body(test_body(test_config(), 50.0))
        .build();

    assert_eq!(app.count::<FlightModelComponent>(), 1);
}

#[test]
fn test_loads_published_per_category() {
    let mut app = TestAppBuilder::new()
        .with_body(test_body(test_config(), 60.0))
        .without_integrator()
        .build();

    let period = app.fixed_period();
    app.query_single_mut::<FlightControls>().unwrap().0.throttle = 1.0;
    app.run_steps(3);

    let telemetry = app
        .query_single::<FlightTelemetryComponent>()
        .unwrap()
        .clone();
    assert_eq!(telemetry.ticks, 3);
    assert_eq!(telemetry.skipped_ticks, 0);
    let latest = telemetry.latest.unwrap();
    assert_telemetry_valid(&latest);
    assert_relative_eq!(latest.throttle, 3.0 * period, epsilon = 1e-12);

    let physics = app.query_single::<PhysicsComponent>().unwrap();
    // Replaced every tick, never accumulated
    assert_eq!(physics.forces.len(), 2);
    assert_eq!(physics.moments.len(), 1);

    let thrust = physics
        .forces
        .iter()
        .find(|f| f.category == ForceCategory::Propulsive)
        .unwrap();
    assert_relative_eq!(
        thrust.vector,
        Vector3::new(300.0 * period, 0.0, 0.0),
        epsilon = 1e-9
    );

    let total: Vector3<f64> = physics.forces.iter().map(|f| f.vector).sum();
    assert_relative_eq!(total, latest.net_force, epsilon = 1e-9);
}

#[test]
fn test_flight_stage_alone_ticks_at_fixed_period() {
    let mut app = TestAppBuilder::new()
        .with_body(test_body(test_config(), 60.0))
        .without_integrator()
        .build();

    // No PhysicsPlugin, so FixedUpdate keeps Bevy's default rate
    let period = app.fixed_period();
    assert_relative_eq!(period, Time::<Fixed>::default().timestep().as_secs_f64());

    app.query_single_mut::<FlightControls>().unwrap().0.throttle = 1.0;
    app.run_steps(1);

    let latest = app
        .query_single::<FlightTelemetryComponent>()
        .unwrap()
        .latest
        .unwrap();
    assert_relative_eq!(latest.dt, period, epsilon = 1e-12);
    assert_relative_eq!(latest.throttle, period, epsilon = 1e-12);
    let model = app.query_single::<FlightModelComponent>().unwrap();
    assert_relative_eq!(model.throttle(), period, epsilon = 1e-12);
}

#[test]
fn test_physics_plugin_sets_flight_step() {
    let physics = test_physics_config();
    let mut app = TestAppBuilder::new()
        .with_body(test_body(test_config(), 60.0))
        .with_physics(physics.clone())
        .build();

    assert_relative_eq!(app.fixed_period(), physics.timestep, epsilon = 1e-12);

    app.run_steps(1);
    let latest = app
        .query_single::<FlightTelemetryComponent>()
        .unwrap()
        .latest
        .unwrap();
    assert_relative_eq!(latest.dt, physics.timestep, epsilon = 1e-12);
}

#[test]
fn test_rejected_ticks_are_counted() {
    let mut app = TestAppBuilder::new()
        .with_body(test_body(test_config(), 60.0))
        .without_integrator()
        .build();

    // An integrator fault upstream
    app.query_single_mut::<SpatialComponent>().unwrap().velocity.y = f64::NAN;
    app.run_steps(4);

    let telemetry = app.query_single::<FlightTelemetryComponent>().unwrap();
    assert_eq!(telemetry.ticks, 0);
    assert_eq!(telemetry.skipped_ticks, 4);
    assert!(telemetry.latest.is_none());

    let physics = app.query_single::<PhysicsComponent>().unwrap();
    assert!(physics.forces.is_empty());
    assert!(physics.moments.is_empty());
}

#[test]
fn test_unpowered_glide() {
    let mut app = TestAppBuilder::new()
        .with_body(test_body(test_config(), 50.0))
        .with_physics(test_physics_config())
        .build();

    app.run_steps(100);

    let spatial = app.query_single::<SpatialComponent>().unwrap().clone();
    assert_spatial_valid(&spatial);
    assert_physics_valid(app.query_single::<PhysicsComponent>().unwrap());

    // Drag slows the body while the wing holds it well above a free fall
    assert!(spatial.velocity.x < 50.0);
    assert!(spatial.position.y > 1000.0 - 0.5 * 9.81);

    let telemetry = app
        .query_single::<FlightTelemetryComponent>()
        .unwrap()
        .latest
        .unwrap();
    assert_telemetry_valid(&telemetry);
    assert!(telemetry.angle_of_attack_deg > 0.0);
    assert!(telemetry.wing_lift.y > 0.0);
}

#[test]
fn test_roll_stick_spins_up_roll_rate() {
    let mut app = TestAppBuilder::new()
        .with_body(test_body(full_authority_config(), 80.0))
        .with_physics(test_physics_config())
        .build();

    app.query_single_mut::<FlightControls>().unwrap().0.roll = 1.0;
    app.run_steps(10);

    let spatial = app.query_single::<SpatialComponent>().unwrap();
    assert_spatial_valid(spatial);
    let body_rate = spatial.attitude.inverse() * spatial.angular_velocity;
    assert!(body_rate.x > 0.0);
}
