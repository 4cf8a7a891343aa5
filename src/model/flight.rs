use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::FlightModelConfig;
use crate::model::attitude::AttitudeController;
use crate::model::error::{FlightModelError, Result};
use crate::model::forces::ForceModel;
use crate::model::kinematics::{BodyFrameKinematics, KinematicsSampler, SamplerState};
use crate::model::state::{ControlInputs, FlightState};
use crate::model::telemetry::{FlightTelemetry, NullTelemetry, TelemetrySink};

/// Net world-frame loads produced by one tick, applied at the centre of mass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightOutput {
    pub force: Vector3<f64>,
    pub torque: Vector3<f64>,
}

/// One flying body: configuration plus the only state that survives a tick,
/// the throttle setting and the previous body velocity.
#[derive(Debug, Clone)]
pub struct FlightModel {
    config: FlightModelConfig,
    forces: ForceModel,
    sampler: SamplerState,
    last_kinematics: Option<BodyFrameKinematics>,
}

impl FlightModel {
    /// # Errors
    /// `InvalidConfig` or `InvalidCurve` if the configuration fails validation.
    pub fn new(config: FlightModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            forces: ForceModel::new(config.initial_throttle),
            sampler: SamplerState::default(),
            last_kinematics: None,
            config,
        })
    }

    pub fn config(&self) -> &FlightModelConfig {
        &self.config
    }

    pub fn throttle(&self) -> f64 {
        self.forces.throttle()
    }

    pub fn sampler_state(&self) -> &SamplerState {
        &self.sampler
    }

    /// Body-frame sample of the last successful tick.
    pub fn last_kinematics(&self) -> Option<&BodyFrameKinematics> {
        self.last_kinematics.as_ref()
    }

    /// Restores the initial throttle and forgets the previous velocity.
    pub fn reset(&mut self) {
        self.forces = ForceModel::new(self.config.initial_throttle);
        self.sampler = SamplerState::default();
        self.last_kinematics = None;
    }

    /// Runs one fixed step.
    ///
    /// # Errors
    /// `InvalidTimestep`, `NonFiniteState` or `NonFiniteOutput`; the tick is
    /// skipped and no state changes.
    pub fn tick(
        &mut self,
        dt: f64,
        inputs: &ControlInputs,
        state: &FlightState,
    ) -> Result<FlightOutput> {
        self.tick_observed(dt, inputs, state, &mut NullTelemetry)
    }

    /// Like [`FlightModel::tick`], handing the intermediate values to `sink`
    /// once all the force math is done.
    pub fn tick_observed(
        &mut self,
        dt: f64,
        inputs: &ControlInputs,
        state: &FlightState,
        sink: &mut dyn TelemetrySink,
    ) -> Result<FlightOutput> {
        state.validate()?;
        let (sampler, kinematics) = KinematicsSampler::sample(&self.sampler, state, dt)?;

        let inputs = inputs.clamped();
        let density = self.config.atmosphere.density(state.altitude());

        // Throttle is integrated on a copy, kept only if the tick succeeds
        let mut forces = self.forces;
        let body = forces.compute(&self.config, &kinematics, density, inputs.throttle, dt);
        let command = AttitudeController::new(&self.config.attitude)?.command(
            &inputs.stick(),
            &kinematics,
            dt,
        );

        let rotation = state.orientation;
        let apply_induced = self.config.induced_drag.apply;
        let output = FlightOutput {
            force: rotation * body.net(apply_induced),
            torque: rotation * command.torque,
        };

        if output.force.iter().any(|v| !v.is_finite()) {
            return Err(FlightModelError::NonFiniteOutput("force"));
        }
        if output.torque.iter().any(|v| !v.is_finite()) {
            return Err(FlightModelError::NonFiniteOutput("torque"));
        }

        self.forces = forces;
        self.sampler = sampler;
        self.last_kinematics = Some(kinematics);

        sink.record(&FlightTelemetry {
            dt,
            altitude: state.altitude(),
            air_density: density,
            airspeed: kinematics.speed(),
            angle_of_attack_deg: kinematics.angle_of_attack.to_degrees(),
            angle_of_attack_yaw_deg: kinematics.angle_of_attack_yaw.to_degrees(),
            body_acceleration: kinematics.acceleration,
            g_force: kinematics.g_force,
            throttle: self.forces.throttle(),
            control_authority: command.authority,
            wing_lift_coefficient: body.wing.lift_coefficient,
            stabilizer_lift_coefficient: body.stabilizer.lift_coefficient,
            thrust: rotation * body.thrust,
            parasitic_drag: rotation * body.parasitic_drag,
            wing_lift: rotation * body.wing.lift,
            stabilizer_lift: rotation * body.stabilizer.lift,
            induced_drag: rotation * body.induced_drag(),
            induced_drag_applied: apply_induced,
            target_rate_body: command.target_rate,
            net_force: output.force,
            net_torque: output.torque,
        });

        Ok(output)
    }
}
