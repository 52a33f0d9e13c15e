use super::drag::drag_force;
use super::gravity::gravity;
use crate::config::atmosphere::AtmosphereModel;
use crate::config::body::CentralBody;
use crate::errors::DomainError;
use crate::models::state::{Force, KinematicState};
use crate::models::vehicle::VehicleProperties;
use nalgebra as na;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, state: &Self::State) -> Result<Self::State, DomainError>;
}

/// Individual forces acting on the vehicle at one state [N]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub gravity: Force,
    pub drag: Force,
    pub thrust: Force,
}

impl ForceBreakdown {
    pub fn net(&self) -> Force {
        self.gravity + self.drag + self.thrust
    }
}

/// Translational dynamics of an ascending vehicle: point-mass gravity, exponential
/// atmosphere drag and an optional thrust vector supplied by the caller's guidance.
pub struct AscentDynamics<'a, T: VehicleProperties> {
    body: &'a CentralBody,
    atmosphere: &'a AtmosphereModel,
    vehicle: &'a T,
    thrust: Option<Force>,
}

impl<'a, T: VehicleProperties> AscentDynamics<'a, T> {
    pub fn new(
        body: &'a CentralBody,
        atmosphere: &'a AtmosphereModel,
        vehicle: &'a T,
        thrust: Option<Force>,
    ) -> Self {
        Self {
            body,
            atmosphere,
            vehicle,
            thrust,
        }
    }

    pub fn forces(&self, state: &KinematicState) -> Result<ForceBreakdown, DomainError> {
        let breakdown = ForceBreakdown {
            gravity: gravity(&state.position, self.vehicle.mass(), self.body)?,
            drag: drag_force(self.vehicle, state, self.atmosphere, &self.body.ellipsoid)?,
            thrust: self.thrust.unwrap_or_else(na::Vector3::zeros),
        };
        log::debug!(
            "forces at r={:.1} m: gravity={:.3} N drag={:.3} N thrust={:.3} N",
            state.position.magnitude(),
            breakdown.gravity.magnitude(),
            breakdown.drag.magnitude(),
            breakdown.thrust.magnitude()
        );
        Ok(breakdown)
    }

    pub fn net_force(&self, state: &KinematicState) -> Result<Force, DomainError> {
        Ok(self.forces(state)?.net())
    }
}

impl<T: VehicleProperties> EquationsOfMotion for AscentDynamics<'_, T> {
    type State = KinematicState;

    fn compute_derivative(&self, state: &KinematicState) -> Result<KinematicState, DomainError> {
        let acceleration = self.net_force(state)? / self.vehicle.mass();

        // Position derivative is velocity
        Ok(KinematicState::new(state.velocity, acceleration))
    }
}
