mod flight_model;

pub use flight_model::{apply_flight_output, flight_model_system};
