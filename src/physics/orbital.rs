use crate::config::body::CentralBody;
use crate::errors::{ensure_non_negative, ensure_positive, DomainError};

/// Circular orbit speed at `height` above the polar radius [m/s]
///
/// The polar radius is the reference so the estimate holds for a polar orbit.
pub fn circular_velocity(height: f64, body: &CentralBody) -> Result<f64, DomainError> {
    let r = ensure_positive("orbit radius", body.ellipsoid.polar_radius() + height)?;
    Ok((body.gravitational_parameter() / r).sqrt())
}

/// Lift-off mass needed to put `payload_mass` into a circular orbit at `height`
///
/// Tsiolkovsky with the circular speed as Δv: m₀ = exp(v / v_e) · m_payload · (k + 1),
/// where k is the structural mass expressed as a fraction of the payload mass.
pub fn required_launch_mass(
    payload_mass: f64,
    exhaust_velocity: f64,
    height: f64,
    structural_ratio: f64,
    body: &CentralBody,
) -> Result<f64, DomainError> {
    ensure_non_negative("payload mass", payload_mass)?;
    ensure_positive("exhaust velocity", exhaust_velocity)?;
    ensure_non_negative("structural ratio", structural_ratio)?;

    let delta_v = circular_velocity(height, body)?;
    Ok((delta_v / exhaust_velocity).exp() * payload_mass * (structural_ratio + 1.0))
}
