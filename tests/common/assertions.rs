use flight_model::{
    components::{PhysicsComponent, SpatialComponent},
    model::FlightTelemetry,
};
use nalgebra::Vector3;

#[track_caller]
pub fn assert_vector_finite(vector: &Vector3<f64>, what: &str) {
    assert!(
        vector.iter().all(|x| x.is_finite()),
        "{what} is not finite: {vector:?}"
    );
}

/// Assert that a spatial component's state is valid
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert_vector_finite(&spatial.position, "position");
    assert_vector_finite(&spatial.velocity, "velocity");
    assert_vector_finite(&spatial.angular_velocity, "angular velocity");
    assert!(
        (spatial.attitude.as_ref().norm() - 1.0).abs() < 1e-9,
        "attitude is not normalised"
    );
}

/// Assert that a physics component's state is valid
#[track_caller]
pub fn assert_physics_valid(physics: &PhysicsComponent) {
    assert!(physics.mass > 0.0, "Mass must be positive");
    assert!(physics.mass.is_finite(), "Mass must be finite");
    assert_vector_finite(&physics.net_force, "net force");
    assert_vector_finite(&physics.net_moment, "net moment");
}

#[track_caller]
pub fn assert_telemetry_valid(telemetry: &FlightTelemetry) {
    assert!((0.0..=1.0).contains(&telemetry.throttle), "throttle out of range");
    assert!(
        (0.0..=1.0).contains(&telemetry.control_authority),
        "authority out of range"
    );
    assert!(telemetry.air_density > 0.0);
    assert_vector_finite(&telemetry.net_force, "net force");
    assert_vector_finite(&telemetry.net_torque, "net torque");
    assert_vector_finite(&telemetry.induced_drag, "induced drag");
}
