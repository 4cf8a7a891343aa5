use bevy::prelude::*;

use crate::components::{
    FlightControls, FlightModelComponent, FlightTelemetryComponent, Force, ForceCategory, Moment,
    PhysicsComponent, ReferenceFrame, SpatialComponent,
};
use crate::model::{FlightOutput, FlightTelemetry, TelemetrySink};

/// Replaces the flight model's loads on `physics` with those of one tick.
///
/// Thrust is split out as a propulsive force so it can be told apart from
/// the aerodynamic terms; everything is already in world frame.
///
/// # Arguments
/// * `physics` - Load accumulator of the body.
/// * `output` - Net force and torque of the tick, or `None` if it was skipped.
/// * `telemetry` - Breakdown of the same tick.
pub fn apply_flight_output(
    physics: &mut PhysicsComponent,
    output: Option<&FlightOutput>,
    telemetry: Option<&FlightTelemetry>,
) {
    physics.clear_category(ForceCategory::Aerodynamic);
    physics.clear_category(ForceCategory::Propulsive);
    physics.clear_category(ForceCategory::Control);

    let Some(output) = output else {
        return;
    };

    let thrust = telemetry.map(|t| t.thrust).unwrap_or_default();

    physics.add_force(Force {
        vector: thrust,
        point: None,
        frame: ReferenceFrame::Inertial,
        category: ForceCategory::Propulsive,
    });
    physics.add_force(Force {
        vector: output.force - thrust,
        point: None,
        frame: ReferenceFrame::Inertial,
        category: ForceCategory::Aerodynamic,
    });
    physics.add_moment(Moment {
        vector: output.torque,
        frame: ReferenceFrame::Inertial,
        category: ForceCategory::Control,
    });
}

/// Ticks every flight model once per fixed step and hands its loads to the
/// force calculator. A rejected tick contributes nothing and is logged.
///
/// Δt is the period of `Time<Fixed>`, the step `FixedUpdate` actually runs at.
pub fn flight_model_system(
    mut query: Query<(
        &mut FlightModelComponent,
        &FlightControls,
        &SpatialComponent,
        &mut PhysicsComponent,
        Option<&mut FlightTelemetryComponent>,
        Option<&Name>,
    )>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.timestep().as_secs_f64();

    for (mut model, controls, spatial, mut physics, mut telemetry, name) in query.iter_mut() {
        let state = spatial.flight_state(physics.mass);

        let mut latest = None;
        let result = model.tick_observed(dt, &controls.0, &state, &mut |t: &FlightTelemetry| {
            latest = Some(*t)
        });

        match result {
            Ok(output) => {
                apply_flight_output(&mut physics, Some(&output), latest.as_ref());

                if let (Some(sink), Some(recorded)) = (telemetry.as_deref_mut(), latest.as_ref()) {
                    sink.record(recorded);
                }

                if let Some(t) = latest.as_ref() {
                    debug!(
                        "{}: airspeed {:.1} m/s, aoa {:.2} deg, throttle {:.2}, authority {:.3}",
                        name.map(Name::as_str).unwrap_or("flight body"),
                        t.airspeed,
                        t.angle_of_attack_deg,
                        t.throttle,
                        t.control_authority
                    );
                }
            }
            Err(err) => {
                warn!(
                    "{}: flight model tick skipped: {}",
                    name.map(Name::as_str).unwrap_or("flight body"),
                    err
                );
                apply_flight_output(&mut physics, None, None);

                if let Some(sink) = telemetry.as_deref_mut() {
                    sink.skipped_ticks += 1;
                }
            }
        }
    }
}
