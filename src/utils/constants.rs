pub const GRAVITY: f64 = 9.81; // m/s^2, reference for g-force
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const SCALE_HEIGHT: f64 = 8000.0; // m
pub const KNOTS_PER_METRE_PER_SECOND: f64 = 1.943844;

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // 120 Hz fixed step
