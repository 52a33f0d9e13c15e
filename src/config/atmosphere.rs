use crate::constants::{SCALE_HEIGHT, SEA_LEVEL_DENSITY};
use crate::errors::{ensure_non_negative, ensure_positive, DomainError};
use serde::{Deserialize, Serialize};

/// Exponential atmosphere: ρ(h) = ρ₀ · exp(-h / H)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereModel {
    /// Density at zero height [kg/m³]
    pub sea_level_density: f64,
    /// Height over which density falls by a factor of e [m]
    pub scale_height: f64,
}

impl AtmosphereModel {
    pub fn new(sea_level_density: f64, scale_height: f64) -> Result<Self, DomainError> {
        let model = AtmosphereModel {
            sea_level_density,
            scale_height,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn standard() -> Self {
        AtmosphereModel {
            sea_level_density: SEA_LEVEL_DENSITY,
            scale_height: SCALE_HEIGHT,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_non_negative("sea_level_density", self.sea_level_density)?;
        ensure_positive("scale_height", self.scale_height)?;
        Ok(())
    }

    /// Density at a height above the surface [kg/m³].
    ///
    /// Negative heights give densities above ρ₀. That is mathematically well defined
    /// but has no physical meaning; callers are expected to stay at h >= 0.
    pub fn density_at_height(&self, height: f64) -> f64 {
        self.sea_level_density * (-height / self.scale_height).exp()
    }
}

impl Default for AtmosphereModel {
    fn default() -> Self {
        Self::standard()
    }
}
