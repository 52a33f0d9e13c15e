use super::ellipsoid::EllipsoidParameters;
use crate::constants::{G, M_EARTH};
use crate::errors::{ensure_positive, DomainError};
use serde::{Deserialize, Serialize};

/// Gravitating central body: point mass at the origin with a reference ellipsoid for its surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralBody {
    pub mass: f64, // kg
    #[serde(default)]
    pub ellipsoid: EllipsoidParameters,
}

impl CentralBody {
    pub fn new(mass: f64, ellipsoid: EllipsoidParameters) -> Result<Self, DomainError> {
        let body = CentralBody { mass, ellipsoid };
        body.validate()?;
        Ok(body)
    }

    pub fn earth() -> Self {
        CentralBody {
            mass: M_EARTH,
            ellipsoid: EllipsoidParameters::wgs84(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("body mass", self.mass)?;
        Ok(())
    }

    /// GM [m³/s²]
    pub fn gravitational_parameter(&self) -> f64 {
        G * self.mass
    }
}

impl Default for CentralBody {
    fn default() -> Self {
        Self::earth()
    }
}
