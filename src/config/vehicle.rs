use crate::constants::PI;
use crate::errors::{ensure_non_negative, ensure_positive, DomainError};
use crate::models::vehicle::VehicleProperties;
use serde::{Deserialize, Serialize};

/// Drag coefficient assumed for the built-in vehicles, which publish none.
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.5;

/// Read-only vehicle data consumed by the force model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleParameters {
    pub name: String,
    pub mass: f64,               // kg, current total mass
    pub dry_mass: f64,           // kg
    pub cross_section_area: f64, // m²
    pub drag_coefficient: f64,
    pub exhaust_velocity: f64, // m/s
}

impl VehicleParameters {
    /// Builds a vehicle from its body diameter; the cross-section is the circle πd²/4.
    pub fn with_diameter(
        name: &str,
        mass: f64,
        dry_mass: f64,
        diameter: f64,
        drag_coefficient: f64,
        exhaust_velocity: f64,
    ) -> Result<Self, DomainError> {
        ensure_positive("diameter", diameter)?;
        let vehicle = VehicleParameters {
            name: name.to_owned(),
            mass,
            dry_mass,
            cross_section_area: circular_area(diameter),
            drag_coefficient,
            exhaust_velocity,
        };
        vehicle.validate()?;
        Ok(vehicle)
    }

    pub fn falcon_9_ft() -> Self {
        VehicleParameters {
            name: "Falcon 9 FT".to_owned(),
            mass: 544.6e3,
            dry_mass: 27.9e3,
            cross_section_area: circular_area(5.2633),
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            exhaust_velocity: 2.77e3,
        }
    }

    // Diameter is the equivalent of the core plus both side boosters
    pub fn falcon_heavy() -> Self {
        VehicleParameters {
            name: "Falcon Heavy".to_owned(),
            mass: 1385.5e3,
            dry_mass: 55.5e3,
            cross_section_area: circular_area(6.339),
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            exhaust_velocity: 2.77e3,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("vehicle mass", self.mass)?;
        ensure_non_negative("dry mass", self.dry_mass)?;
        if self.dry_mass > self.mass {
            return Err(DomainError::InvalidParameter {
                name: "dry mass",
                value: self.dry_mass,
            });
        }
        ensure_non_negative("cross section area", self.cross_section_area)?;
        ensure_non_negative("drag coefficient", self.drag_coefficient)?;
        ensure_positive("exhaust velocity", self.exhaust_velocity)?;
        Ok(())
    }

    /// Same vehicle with a different current mass, e.g. after propellant was burned.
    pub fn with_mass(&self, mass: f64) -> Result<Self, DomainError> {
        let vehicle = VehicleParameters {
            mass,
            ..self.clone()
        };
        vehicle.validate()?;
        Ok(vehicle)
    }

    pub fn propellant_mass(&self) -> f64 {
        self.mass - self.dry_mass
    }
}

impl Default for VehicleParameters {
    fn default() -> Self {
        Self::falcon_9_ft()
    }
}

impl VehicleProperties for VehicleParameters {
    fn mass(&self) -> f64 {
        self.mass
    }

    fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    fn reference_area(&self) -> f64 {
        self.cross_section_area
    }

    fn exhaust_velocity(&self) -> f64 {
        self.exhaust_velocity
    }
}

fn circular_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}
