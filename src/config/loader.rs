use super::{AtmosphereModel, CentralBody, VehicleParameters};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the force model reads, in one file.
///
/// Missing sections fall back to Earth, the standard atmosphere and a Falcon 9 FT.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KernelConfig {
    #[serde(default)]
    pub body: CentralBody,
    #[serde(default)]
    pub atmosphere: AtmosphereModel,
    #[serde(default)]
    pub vehicle: VehicleParameters,
}

impl KernelConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: KernelConfig = toml::from_str(contents)?;
        config.validate()?;
        log::debug!(
            "loaded kernel configuration for {} (body mass {:e} kg)",
            config.vehicle.name,
            config.body.mass
        );
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    // The ellipsoid validates itself while deserializing
    fn validate(&self) -> Result<(), ConfigError> {
        self.body.validate()?;
        self.atmosphere.validate()?;
        self.vehicle.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = KernelConfig::from_toml_str("").unwrap();
        assert_eq!(config, KernelConfig::default());
        assert_eq!(config.vehicle.name, "Falcon 9 FT");
    }

    #[test]
    fn test_full_file() {
        let config = KernelConfig::from_toml_str(
            r#"
            [body]
            mass = 6.39e23

            [body.ellipsoid]
            equatorial_radius = 3396200.0
            polar_radius = 3376200.0

            [atmosphere]
            sea_level_density = 0.020
            scale_height = 11100.0

            [vehicle]
            name = "Lander"
            mass = 12000.0
            dry_mass = 4000.0
            cross_section_area = 12.5
            drag_coefficient = 1.4
            exhaust_velocity = 3200.0
            "#,
        )
        .unwrap();

        assert_eq!(config.body.ellipsoid.polar_radius(), 3_376_200.0);
        assert_eq!(config.atmosphere.scale_height, 11_100.0);
        assert_eq!(config.vehicle.name, "Lander");
    }

    #[test]
    fn test_invalid_ellipsoid_rejected() {
        let result = KernelConfig::from_toml_str(
            "[body]\nmass = 1.0\n[body.ellipsoid]\nequatorial_radius = 10.0\npolar_radius = 20.0\n",
        );
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_invalid_atmosphere_rejected() {
        let result = KernelConfig::from_toml_str(
            "[atmosphere]\nsea_level_density = 1.225\nscale_height = -1.0\n",
        );
        assert!(matches!(
            result,
            Err(ConfigError::Domain(DomainError::InvalidParameter {
                name: "scale_height",
                ..
            }))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            KernelConfig::load("does/not/exist.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let config = KernelConfig {
            vehicle: VehicleParameters::falcon_heavy(),
            ..KernelConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(KernelConfig::from_toml_str(&text).unwrap(), config);
    }
}
