use thiserror::Error;

/// An operation was asked to evaluate a point where it is undefined.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error(
        "invalid ellipsoid: equatorial radius {equatorial_radius} m and polar radius \
         {polar_radius} m must be finite with equatorial > polar > 0"
    )]
    InvalidEllipsoid {
        equatorial_radius: f64,
        polar_radius: f64,
    },

    #[error("{0} is undefined at the origin")]
    UndefinedAtOrigin(&'static str),

    #[error(
        "geodetic conversion is undefined {distance_from_axis} m from the polar axis at z = {z} m, \
         inside the ellipsoid's evolute"
    )]
    InsideEvolute { distance_from_axis: f64, z: f64 },

    #[error("thrust is undefined for a zero time interval")]
    ZeroTimeInterval,

    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Errors that can occur while loading a kernel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Domain(#[from] DomainError),
}

/// Rejects NaN, infinities and values that are not strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidParameter { name, value })
    }
}

/// Rejects NaN, infinities and negative values.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_guard() {
        assert_eq!(ensure_positive("mass", 1.0), Ok(1.0));
        assert!(ensure_positive("mass", 0.0).is_err());
        assert!(ensure_positive("mass", f64::NAN).is_err());
        assert!(ensure_positive("mass", f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_negative_guard() {
        assert_eq!(ensure_non_negative("payload", 0.0), Ok(0.0));
        assert!(ensure_non_negative("payload", -1.0).is_err());
    }

    #[test]
    fn test_domain_error_converts_into_config_error() {
        let err: ConfigError = DomainError::ZeroTimeInterval.into();
        assert!(matches!(err, ConfigError::Domain(DomainError::ZeroTimeInterval)));
        assert_eq!(
            err.to_string(),
            "invalid configuration: thrust is undefined for a zero time interval"
        );
    }
}
