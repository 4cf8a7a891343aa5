use flight_model::{
    components::SpatialComponent,
    config::{FlightModelConfig, PhysicsConfig},
    model::{AeroCurve, ControlAuthority, FlightState},
    plugins::FlightBody,
};
use nalgebra::{Matrix3, UnitQuaternion, Vector3};

/// Lift coefficient of 0.1 per degree between ±10°.
pub fn ramp_lift_curve() -> AeroCurve {
    AeroCurve::linear(vec![(-10.0, -1.0), (0.0, 0.0), (10.0, 1.0)]).unwrap()
}

/// Small body with round numbers: 100 N of thrust, 20 m² of wing.
pub fn test_config() -> FlightModelConfig {
    FlightModelConfig {
        name: "test_body".to_string(),
        max_thrust: 100.0,
        throttle_rate: 1.0,
        initial_throttle: 0.0,
        wing_area: 20.0,
        stabilizer_area: None,
        lift_curve: ramp_lift_curve(),
        ..FlightModelConfig::default()
    }
}

/// [`test_config`] with the controls always fully effective.
pub fn full_authority_config() -> FlightModelConfig {
    let mut config = test_config();
    config.attitude.authority = ControlAuthority {
        override_full_authority: true,
        ..ControlAuthority::default()
    };
    config
}

pub fn level_state(speed: f64, altitude: f64) -> FlightState {
    FlightState {
        position: Vector3::new(0.0, altitude, 0.0),
        orientation: UnitQuaternion::identity(),
        linear_velocity: Vector3::new(speed, 0.0, 0.0),
        angular_velocity: Vector3::zeros(),
        mass: 1000.0,
    }
}

pub fn level_spatial(speed: f64, altitude: f64) -> SpatialComponent {
    SpatialComponent {
        position: Vector3::new(0.0, altitude, 0.0),
        velocity: Vector3::new(speed, 0.0, 0.0),
        ..SpatialComponent::default()
    }
}

pub fn test_body(config: FlightModelConfig, speed: f64) -> FlightBody {
    FlightBody::new(config, level_spatial(speed, 1000.0))
        .with_mass(1000.0, Matrix3::from_diagonal(&Vector3::new(500.0, 2000.0, 1500.0)))
}

pub fn test_physics_config() -> PhysicsConfig {
    PhysicsConfig {
        timestep: 0.01,
        ..PhysicsConfig::default()
    }
}
