pub mod atmosphere;
pub mod body;
pub mod ellipsoid;
pub mod loader;
pub mod vehicle;

pub use atmosphere::AtmosphereModel;
pub use body::CentralBody;
pub use ellipsoid::EllipsoidParameters;
pub use loader::KernelConfig;
pub use vehicle::VehicleParameters;
