use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{PhysicsComponent, ReferenceFrame, SpatialComponent};
use crate::config::PhysicsConfig;

/// Sums every load on a body into a world-frame force and moment about the
/// centre of mass, gravity included.
///
/// # Arguments
/// * `physics` - Mass properties and the loads of this step.
/// * `spatial` - Current attitude, used to rotate body-frame loads.
/// * `gravity` - World-frame gravitational acceleration.
///
/// # Returns
/// `(net_force, net_moment)` in world frame.
pub fn calculate_net_forces_moments(
    physics: &PhysicsComponent,
    spatial: &SpatialComponent,
    gravity: &Vector3<f64>,
) -> (Vector3<f64>, Vector3<f64>) {
    let to_world = |vector: &Vector3<f64>, frame: ReferenceFrame| match frame {
        ReferenceFrame::Body => spatial.attitude * vector,
        ReferenceFrame::Inertial => *vector,
    };

    let mut net_force = gravity * physics.mass;
    let mut net_moment = Vector3::zeros();

    for force in &physics.forces {
        let force_world = to_world(&force.vector, force.frame);
        net_force += force_world;

        if let Some(point) = force.point {
            net_moment += to_world(&point, force.frame).cross(&force_world);
        }
    }

    for moment in &physics.moments {
        net_moment += to_world(&moment.vector, moment.frame);
    }

    (net_force, net_moment)
}

pub fn force_calculator_system(
    mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>,
    config: Res<PhysicsConfig>,
) {
    for (mut physics, spatial) in query.iter_mut() {
        let (net_force, net_moment) =
            calculate_net_forces_moments(&physics, spatial, &config.gravity);
        physics.net_force = net_force;
        physics.net_moment = net_moment;
    }
}
