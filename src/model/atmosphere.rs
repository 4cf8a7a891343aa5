use serde::{Deserialize, Serialize};

use crate::utils::{SCALE_HEIGHT, SEA_LEVEL_DENSITY};

/// Exponential atmosphere: `rho = rho_0 * exp(-altitude / H)`.
///
/// Altitudes below zero are not clamped and give densities above sea level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereModel {
    /// Air density at zero altitude (kg/m³).
    pub sea_level_density: f64,
    /// Altitude over which density falls by a factor of e (m).
    pub scale_height: f64,
}

impl Default for AtmosphereModel {
    fn default() -> Self {
        Self {
            sea_level_density: SEA_LEVEL_DENSITY,
            scale_height: SCALE_HEIGHT,
        }
    }
}

impl AtmosphereModel {
    pub fn new(sea_level_density: f64, scale_height: f64) -> Self {
        Self {
            sea_level_density,
            scale_height,
        }
    }

    /// Air density at the given altitude (kg/m³).
    pub fn density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }
}
