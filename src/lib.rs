pub mod config;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod models;
pub mod numerics;
pub mod physics;

pub use config::{AtmosphereModel, CentralBody, EllipsoidParameters, KernelConfig, VehicleParameters};
pub use coordinates::geodetic::GeodeticCoordinate;
pub use errors::{ConfigError, DomainError};
pub use models::{CartesianPosition, Force, KinematicState, VehicleProperties};
