use bevy::prelude::*;

use crate::model::{ControlInputs, FlightModel, FlightTelemetry, TelemetrySink};

/// The per-body flight model driven by the fixed-step schedule.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct FlightModelComponent(pub FlightModel);

/// Control axes for the next tick, written by whatever input layer the host uses.
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct FlightControls(pub ControlInputs);

/// Latest telemetry of a body plus a count of ticks rejected by the model.
#[derive(Component, Debug, Clone, Default)]
pub struct FlightTelemetryComponent {
    pub latest: Option<FlightTelemetry>,
    pub ticks: u64,
    pub skipped_ticks: u64,
}

impl TelemetrySink for FlightTelemetryComponent {
    fn record(&mut self, telemetry: &FlightTelemetry) {
        self.latest = Some(*telemetry);
        self.ticks += 1;
    }
}
