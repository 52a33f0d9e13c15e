use crate::constants::PI;
use crate::errors::DomainError;
use nalgebra as na;

/// Euclidean distance of (x, y, z) from the origin. Zero for the zero vector.
pub fn magnitude_from_origin(x: f64, y: f64, z: f64) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

pub fn vector_add(a: &na::Vector3<f64>, b: &na::Vector3<f64>) -> na::Vector3<f64> {
    a + b
}

/// Spherical to Cartesian conversion
/// polar_angle is measured from +z [rad], azimuth from +x towards +y [rad]
pub fn spherical_to_cartesian(r: f64, polar_angle: f64, azimuth: f64) -> na::Vector3<f64> {
    let (sin_polar, cos_polar) = polar_angle.sin_cos();
    let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
    na::Vector3::new(
        r * sin_polar * cos_azimuth,
        r * sin_polar * sin_azimuth,
        r * cos_polar,
    )
}

/// `atan2` reports -π for a negative x and y = -0.0; fold it onto π so angles stay in (-π, π].
pub fn wrap_azimuth(angle: f64) -> f64 {
    if angle == -PI {
        PI
    } else {
        angle
    }
}

/// Cartesian to spherical conversion
/// Returns: (r, polar_angle, azimuth) with polar_angle in [0, π] and azimuth in (-π, π]
///
/// Both angles are undefined at the origin, which is reported as an error.
pub fn cartesian_to_spherical(v: &na::Vector3<f64>) -> Result<(f64, f64, f64), DomainError> {
    let r = magnitude_from_origin(v.x, v.y, v.z);
    if r == 0.0 {
        return Err(DomainError::UndefinedAtOrigin("spherical direction"));
    }

    let rho = v.x.hypot(v.y);
    let polar_angle = rho.atan2(v.z);
    let azimuth = wrap_azimuth(v.y.atan2(v.x));

    Ok((r, polar_angle, azimuth))
}

/// Unit vector along `v`, failing for the zero vector instead of producing NaN.
pub fn unit_vector(v: &na::Vector3<f64>, what: &'static str) -> Result<na::Vector3<f64>, DomainError> {
    v.try_normalize(0.0).ok_or(DomainError::UndefinedAtOrigin(what))
}
