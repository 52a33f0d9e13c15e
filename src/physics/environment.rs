use crate::config::atmosphere::AtmosphereModel;
use crate::config::ellipsoid::EllipsoidParameters;
use crate::coordinates::geodetic::height_above_surface;
use crate::errors::DomainError;
use crate::models::state::CartesianPosition;

/// Atmospheric conditions evaluated at one position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub height: f64,  // radial height above the ellipsoid surface [m]
    pub density: f64, // kg/m³
}

impl Environment {
    pub fn new(
        position: &CartesianPosition,
        atmosphere: &AtmosphereModel,
        ellipsoid: &EllipsoidParameters,
    ) -> Result<Self, DomainError> {
        let height = height_above_surface(position, ellipsoid)?;
        Ok(Environment {
            height,
            density: atmosphere.density_at_height(height),
        })
    }
}

/// ρ(h) = ρ₀ · exp(-h / H) with h = height_above_surface(position) [kg/m³]
pub fn atmospheric_density(
    position: &CartesianPosition,
    atmosphere: &AtmosphereModel,
    ellipsoid: &EllipsoidParameters,
) -> Result<f64, DomainError> {
    Ok(Environment::new(position, atmosphere, ellipsoid)?.density)
}
