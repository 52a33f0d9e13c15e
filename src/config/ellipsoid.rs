use crate::constants::{EARTH_EQUATORIAL_RADIUS, EARTH_POLAR_RADIUS};
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Reference ellipsoid of an oblate body.
///
/// Only the two radii are stored in configuration files; the eccentricity terms are
/// derived once here and cannot drift from the radii since the fields are private.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EllipsoidRadii", into = "EllipsoidRadii")]
pub struct EllipsoidParameters {
    equatorial_radius: f64,           // a [m]
    polar_radius: f64,                // b [m]
    eccentricity_squared: f64,        // e² = 1 - (b/a)²
    second_eccentricity_squared: f64, // e'² = e² / (1 - e²)
    d: f64,                           // e'² · b [m]
}

/// Serialized form of [`EllipsoidParameters`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidRadii {
    pub equatorial_radius: f64,
    pub polar_radius: f64,
}

impl EllipsoidParameters {
    /// Fails unless both radii are finite and equatorial > polar > 0.
    pub fn new(equatorial_radius: f64, polar_radius: f64) -> Result<Self, DomainError> {
        let valid = equatorial_radius.is_finite()
            && polar_radius.is_finite()
            && polar_radius > 0.0
            && polar_radius < equatorial_radius;
        if !valid {
            return Err(DomainError::InvalidEllipsoid {
                equatorial_radius,
                polar_radius,
            });
        }

        let ellipsoid = Self::derive(equatorial_radius, polar_radius);
        log::debug!(
            "ellipsoid a={} m b={} m e2={:.12} ep2={:.12}",
            ellipsoid.equatorial_radius,
            ellipsoid.polar_radius,
            ellipsoid.eccentricity_squared,
            ellipsoid.second_eccentricity_squared
        );
        Ok(ellipsoid)
    }

    /// Earth reference ellipsoid (a = 6378137.0 m, b = 6356752.3 m)
    pub fn wgs84() -> Self {
        Self::derive(EARTH_EQUATORIAL_RADIUS, EARTH_POLAR_RADIUS)
    }

    fn derive(equatorial_radius: f64, polar_radius: f64) -> Self {
        let eccentricity_squared = 1.0 - (polar_radius / equatorial_radius).powi(2);
        let second_eccentricity_squared = eccentricity_squared / (1.0 - eccentricity_squared);
        EllipsoidParameters {
            equatorial_radius,
            polar_radius,
            eccentricity_squared,
            second_eccentricity_squared,
            d: second_eccentricity_squared * polar_radius,
        }
    }

    pub fn equatorial_radius(&self) -> f64 {
        self.equatorial_radius
    }

    pub fn polar_radius(&self) -> f64 {
        self.polar_radius
    }

    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity_squared
    }

    pub fn second_eccentricity_squared(&self) -> f64 {
        self.second_eccentricity_squared
    }

    /// Bowring's auxiliary length e'² · b [m]
    pub fn d(&self) -> f64 {
        self.d
    }
}

impl Default for EllipsoidParameters {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl TryFrom<EllipsoidRadii> for EllipsoidParameters {
    type Error = DomainError;

    fn try_from(radii: EllipsoidRadii) -> Result<Self, Self::Error> {
        Self::new(radii.equatorial_radius, radii.polar_radius)
    }
}

impl From<EllipsoidParameters> for EllipsoidRadii {
    fn from(ellipsoid: EllipsoidParameters) -> Self {
        EllipsoidRadii {
            equatorial_radius: ellipsoid.equatorial_radius,
            polar_radius: ellipsoid.polar_radius,
        }
    }
}
