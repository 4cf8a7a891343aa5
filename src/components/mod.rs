mod flight;
mod physics;
mod spatial;

pub use flight::{FlightControls, FlightModelComponent, FlightTelemetryComponent};
pub use physics::{Force, ForceCategory, Moment, PhysicsComponent, ReferenceFrame};
pub use spatial::SpatialComponent;
