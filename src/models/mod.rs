pub mod state;
pub mod vehicle;

pub use state::{CartesianPosition, Force, KinematicState};
pub use vehicle::VehicleProperties;
