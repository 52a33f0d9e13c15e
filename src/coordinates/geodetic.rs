use crate::config::ellipsoid::EllipsoidParameters;
use crate::constants::{PI, POLAR_AXIS_TOLERANCE};
use crate::errors::DomainError;
use crate::models::state::CartesianPosition;
use crate::numerics::vector::{magnitude_from_origin, wrap_azimuth};
use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Latitude/longitude [rad] and height above the reference ellipsoid [m].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticCoordinate {
    pub latitude: f64,  // [-π/2, π/2]
    pub longitude: f64, // (-π, π]
    pub height: f64,    // signed, along the ellipsoid normal
}

impl GeodeticCoordinate {
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        GeodeticCoordinate {
            latitude,
            longitude,
            height,
        }
    }

    pub fn to_cartesian(&self, ellipsoid: &EllipsoidParameters) -> CartesianPosition {
        geodetic_to_cartesian(self.latitude, self.longitude, self.height, ellipsoid)
    }
}

/// Distance from the centre to the ellipsoid surface point at the given geodetic latitude [m]
pub fn geocentric_radius(latitude: f64, ellipsoid: &EllipsoidParameters) -> f64 {
    let a = ellipsoid.equatorial_radius();
    let b = ellipsoid.polar_radius();
    let (sin_lat, cos_lat) = latitude.sin_cos();

    let numerator = (a * a * cos_lat).powi(2) + (b * b * sin_lat).powi(2);
    let denominator = (a * cos_lat).powi(2) + (b * sin_lat).powi(2);
    numerator.sqrt() / denominator.sqrt()
}

/// Convert geodetic coordinates to body-centred Cartesian coordinates
///
/// Uses the prime vertical radius of curvature N(φ), so the result is the exact
/// inverse of [`cartesian_to_geodetic`]. Angles are in radians.
pub fn geodetic_to_cartesian(
    latitude: f64,
    longitude: f64,
    height: f64,
    ellipsoid: &EllipsoidParameters,
) -> CartesianPosition {
    let a = ellipsoid.equatorial_radius();
    let e2 = ellipsoid.eccentricity_squared();
    let (sin_lat, cos_lat) = latitude.sin_cos();
    let (sin_lon, cos_lon) = longitude.sin_cos();

    let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();

    na::Vector3::new(
        (n + height) * cos_lat * cos_lon,
        (n + height) * cos_lat * sin_lon,
        (n * (1.0 - e2) + height) * sin_lat,
    )
}

/// Place a point `height` metres above the ellipsoid surface along the radial line
/// at angle `latitude` from the equatorial plane.
///
/// Not the inverse of [`cartesian_to_geodetic`]: the radial direction only matches
/// the ellipsoid normal on the equator and at the poles.
pub fn geocentric_to_cartesian(
    latitude: f64,
    longitude: f64,
    height: f64,
    ellipsoid: &EllipsoidParameters,
) -> CartesianPosition {
    let r = geocentric_radius(latitude, ellipsoid) + height;
    let (sin_lat, cos_lat) = latitude.sin_cos();
    let (sin_lon, cos_lon) = longitude.sin_cos();

    na::Vector3::new(r * cos_lat * cos_lon, r * cos_lat * sin_lon, r * sin_lat)
}

/// Convert body-centred Cartesian coordinates to geodetic coordinates (Bowring, 1985)
///
/// Closed form, no iteration. Points on the polar axis take a separate branch where
/// the longitude is reported as 0.
///
/// Fails for points deep inside the body, within roughly e²·a of the polar axis
/// (about 43 km for the Earth), where the ellipsoid normal is no longer unique and
/// Bowring's denominator p - e²·a·cos³u reaches zero or changes sign.
pub fn cartesian_to_geodetic(
    position: &CartesianPosition,
    ellipsoid: &EllipsoidParameters,
) -> Result<GeodeticCoordinate, DomainError> {
    let (x, y, z) = (position.x, position.y, position.z);
    let a = ellipsoid.equatorial_radius();
    let b = ellipsoid.polar_radius();
    let e2 = ellipsoid.eccentricity_squared();
    let d = ellipsoid.d();

    let p = x.hypot(y);

    if p < POLAR_AXIS_TOLERANCE {
        log::warn!(
            "position {:e} m from the polar axis, using the polar branch of the geodetic conversion",
            p
        );
        let latitude = if z < 0.0 { -PI / 2.0 } else { PI / 2.0 };
        return Ok(GeodeticCoordinate::new(latitude, 0.0, z.abs() - b));
    }

    let r = magnitude_from_origin(x, y, z);

    // Parametric (reduced) latitude
    let tu = b * z * (1.0 + d / r) / (a * p);
    let cu3 = (1.0 + tu * tu).powf(-1.5);

    // Geodetic latitude
    let denominator = p - e2 * a * cu3;
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(DomainError::InsideEvolute {
            distance_from_axis: p,
            z,
        });
    }
    let tp = (z + d * cu3 * tu.powi(3)) / denominator;
    let cp = 1.0 / (1.0 + tp * tp).sqrt();
    let sp = cp * tp;

    let latitude = tp.atan();
    let longitude = wrap_azimuth(y.atan2(x));
    let height = p * cp + z * sp - a * (1.0 - e2 * sp * sp).sqrt();

    Ok(GeodeticCoordinate::new(latitude, longitude, height))
}

/// Radial distance above the ellipsoid surface at the point's geodetic latitude [m]
///
/// Differs from `cartesian_to_geodetic(..).height`, which is measured along the
/// ellipsoid normal. The two agree only on the equator and at the poles.
pub fn height_above_surface(
    position: &CartesianPosition,
    ellipsoid: &EllipsoidParameters,
) -> Result<f64, DomainError> {
    let latitude = cartesian_to_geodetic(position, ellipsoid)?.latitude;
    Ok(magnitude_from_origin(position.x, position.y, position.z) - geocentric_radius(latitude, ellipsoid))
}
