use super::environment::atmospheric_density;
use crate::config::atmosphere::AtmosphereModel;
use crate::config::ellipsoid::EllipsoidParameters;
use crate::errors::DomainError;
use crate::models::state::{CartesianPosition, Force, KinematicState};
use crate::models::vehicle::VehicleProperties;
use crate::numerics::vector::magnitude_from_origin;
use nalgebra as na;

/// Magnitude of the drag force, 0.5 · Cd · |v|² · ρ · A [N]
///
/// Always >= 0. Use [`drag_force`] for the vector opposing the velocity.
/// Fails where the density itself is undefined, deep inside the body.
pub fn drag_force_magnitude(
    velocity: &na::Vector3<f64>,
    drag_coefficient: f64,
    position: &CartesianPosition,
    cross_section_area: f64,
    atmosphere: &AtmosphereModel,
    ellipsoid: &EllipsoidParameters,
) -> Result<f64, DomainError> {
    let speed = magnitude_from_origin(velocity.x, velocity.y, velocity.z);
    let rho = atmospheric_density(position, atmosphere, ellipsoid)?;

    Ok(0.5 * drag_coefficient * speed.powi(2) * rho * cross_section_area)
}

/// Drag force vector, directed against the velocity. Zero when the vehicle is at rest.
pub fn drag_force<T: VehicleProperties>(
    vehicle: &T,
    state: &KinematicState,
    atmosphere: &AtmosphereModel,
    ellipsoid: &EllipsoidParameters,
) -> Result<Force, DomainError> {
    let Some(direction) = state.velocity.try_normalize(0.0) else {
        return Ok(na::Vector3::zeros());
    };

    let magnitude = drag_force_magnitude(
        &state.velocity,
        vehicle.drag_coefficient(),
        &state.position,
        vehicle.reference_area(),
        atmosphere,
        ellipsoid,
    )?;
    Ok(-direction * magnitude)
}
