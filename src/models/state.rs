use nalgebra as na;

/// Position relative to the body's centre of mass, z along the polar axis [m]
pub type CartesianPosition = na::Vector3<f64>;

/// Force vector [N]
pub type Force = na::Vector3<f64>;

/// Minimal translational state needed to evaluate the forces on the vehicle.
///
/// Produced fresh by the caller on every step. Its `Add`/`Mul<f64>` impls let an
/// integrator combine states and derivatives without unpacking them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub position: CartesianPosition,
    pub velocity: na::Vector3<f64>, // m/s
}

impl KinematicState {
    pub fn new(position: CartesianPosition, velocity: na::Vector3<f64>) -> Self {
        KinematicState { position, velocity }
    }

    pub fn zero() -> Self {
        KinematicState {
            position: na::Vector3::zeros(),
            velocity: na::Vector3::zeros(),
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

impl std::ops::Add for KinematicState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        KinematicState {
            position: self.position + other.position,
            velocity: self.velocity + other.velocity,
        }
    }
}

impl std::ops::Mul<f64> for KinematicState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        KinematicState {
            position: self.position * scalar,
            velocity: self.velocity * scalar,
        }
    }
}
