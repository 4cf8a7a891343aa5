use bevy::prelude::*;
use nalgebra::{Matrix3, UnitQuaternion, Vector3};

use crate::components::{PhysicsComponent, SpatialComponent};
use crate::config::PhysicsConfig;

/// Advances every body by one fixed step from its net world-frame loads.
pub fn physics_integrator_system(
    mut query: Query<(&PhysicsComponent, &mut SpatialComponent)>,
    config: Res<PhysicsConfig>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.timestep().as_secs_f64();
    let max_vel = config.max_velocity;
    let max_ang_vel = config.max_angular_velocity;

    query.par_iter_mut().for_each(|(physics, mut spatial)| {
        integrate_state(physics, &mut spatial, dt);
        apply_velocity_limits(&mut spatial, max_vel, max_ang_vel);
    });
}

struct StateDerivatives {
    velocity: Vector3<f64>,
    acceleration: Vector3<f64>,
    angular_acceleration: Vector3<f64>,
}

/// Inertia tensor and its inverse expressed in world frame for `attitude`.
fn world_inertia(
    physics: &PhysicsComponent,
    attitude: &UnitQuaternion<f64>,
) -> (Matrix3<f64>, Matrix3<f64>) {
    let rotation = attitude.to_rotation_matrix();
    let r = rotation.matrix();
    (
        r * physics.inertia * r.transpose(),
        r * physics.inertia_inv * r.transpose(),
    )
}

fn calculate_derivatives(
    physics: &PhysicsComponent,
    velocity: &Vector3<f64>,
    attitude: &UnitQuaternion<f64>,
    angular_velocity: &Vector3<f64>,
) -> StateDerivatives {
    let (inertia, inertia_inv) = world_inertia(physics, attitude);
    let gyro_term = angular_velocity.cross(&(inertia * angular_velocity));

    StateDerivatives {
        velocity: *velocity,
        acceleration: physics.net_force / physics.mass,
        angular_acceleration: inertia_inv * (physics.net_moment - gyro_term),
    }
}

fn rotate(
    attitude: &UnitQuaternion<f64>,
    angular_velocity: &Vector3<f64>,
    dt: f64,
) -> UnitQuaternion<f64> {
    // World-frame rates compose on the left
    UnitQuaternion::from_scaled_axis(angular_velocity * dt) * attitude
}

/// Classic RK4 step. Loads are held constant across the stages; angular
/// velocity is world frame.
pub fn integrate_state(physics: &PhysicsComponent, spatial: &mut SpatialComponent, dt: f64) {
    let p0 = spatial.position;
    let v0 = spatial.velocity;
    let q0 = spatial.attitude;
    let w0 = spatial.angular_velocity;
    let half = dt / 2.0;

    let k1 = calculate_derivatives(physics, &v0, &q0, &w0);

    let w2 = w0 + k1.angular_acceleration * half;
    let k2 = calculate_derivatives(
        physics,
        &(v0 + k1.acceleration * half),
        &rotate(&q0, &w0, half),
        &w2,
    );

    let w3 = w0 + k2.angular_acceleration * half;
    let k3 = calculate_derivatives(
        physics,
        &(v0 + k2.acceleration * half),
        &rotate(&q0, &w2, half),
        &w3,
    );

    let w4 = w0 + k3.angular_acceleration * dt;
    let k4 = calculate_derivatives(
        physics,
        &(v0 + k3.acceleration * dt),
        &rotate(&q0, &w3, dt),
        &w4,
    );

    spatial.position =
        p0 + (dt / 6.0) * (k1.velocity + 2.0 * k2.velocity + 2.0 * k3.velocity + k4.velocity);
    spatial.velocity = v0
        + (dt / 6.0)
            * (k1.acceleration + 2.0 * k2.acceleration + 2.0 * k3.acceleration + k4.acceleration);
    spatial.angular_velocity = w0
        + (dt / 6.0)
            * (k1.angular_acceleration
                + 2.0 * k2.angular_acceleration
                + 2.0 * k3.angular_acceleration
                + k4.angular_acceleration);

    let omega_avg = (w0 + 2.0 * w2 + 2.0 * w3 + w4) / 6.0;
    let attitude = rotate(&q0, &omega_avg, dt);
    spatial.attitude = UnitQuaternion::from_quaternion(attitude.into_inner().normalize());
}

fn apply_velocity_limits(
    spatial: &mut SpatialComponent,
    max_velocity: f64,
    max_angular_velocity: f64,
) {
    let velocity_norm = spatial.velocity.norm();
    if velocity_norm > max_velocity {
        spatial.velocity *= max_velocity / velocity_norm;
    }

    let angular_velocity_norm = spatial.angular_velocity.norm();
    if angular_velocity_norm > max_angular_velocity {
        spatial.angular_velocity *= max_angular_velocity / angular_velocity_norm;
    }
}
