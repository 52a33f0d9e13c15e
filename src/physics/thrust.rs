use crate::errors::DomainError;
use crate::models::state::Force;
use crate::models::vehicle::VehicleProperties;
use crate::numerics::vector::unit_vector;
use nalgebra as na;

/// Thrust magnitude from the propellant expelled over an interval, v_e · Δm / Δt [N]
pub fn thrust_force_magnitude(
    exhaust_velocity: f64,
    mass_flow: f64,
    time_interval: f64,
) -> Result<f64, DomainError> {
    if time_interval == 0.0 {
        return Err(DomainError::ZeroTimeInterval);
    }
    Ok(exhaust_velocity * (mass_flow / time_interval))
}

/// Thrust magnitude of `vehicle`'s engines burning `mass_flow` kg over `time_interval` s [N]
pub fn vehicle_thrust_magnitude<T: VehicleProperties>(
    vehicle: &T,
    mass_flow: f64,
    time_interval: f64,
) -> Result<f64, DomainError> {
    thrust_force_magnitude(vehicle.exhaust_velocity(), mass_flow, time_interval)
}

/// Thrust vector along `direction`, which only needs to be non-zero; it is normalised here.
pub fn thrust_force(magnitude: f64, direction: &na::Vector3<f64>) -> Result<Force, DomainError> {
    Ok(unit_vector(direction, "thrust direction")? * magnitude)
}
