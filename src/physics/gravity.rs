use crate::config::body::CentralBody;
use crate::errors::DomainError;
use crate::models::state::{CartesianPosition, Force};
use nalgebra as na;

/// Point-mass gravitational acceleration, -GM/r³ · r [m/s²]
pub fn gravity_acceleration(
    position: &CartesianPosition,
    body: &CentralBody,
) -> Result<na::Vector3<f64>, DomainError> {
    let r: f64 = position.magnitude();
    if r == 0.0 {
        return Err(DomainError::UndefinedAtOrigin("gravity"));
    }
    Ok(position * (-body.gravitational_parameter() / r.powi(3)))
}

/// Gravitational force on a vehicle of `vehicle_mass` kg, directed towards the body's centre [N]
pub fn gravity(
    position: &CartesianPosition,
    vehicle_mass: f64,
    body: &CentralBody,
) -> Result<Force, DomainError> {
    Ok(gravity_acceleration(position, body)? * vehicle_mass)
}
