pub const G: f64 = 6.67430e-11; // Gravitational constant (m³/kg/s²)
pub const M_EARTH: f64 = 5.9722e24; // Mass of Earth (kg)

// Reference ellipsoid
pub const EARTH_EQUATORIAL_RADIUS: f64 = 6_378_137.0; // Semi-major axis [m]
pub const EARTH_POLAR_RADIUS: f64 = 6_356_752.3; // Semi-minor axis [m]

// Exponential atmosphere
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m³
pub const SCALE_HEIGHT: f64 = 8_500.0; // m

// Below this distance from the polar axis the geodetic conversion takes the polar branch
pub const POLAR_AXIS_TOLERANCE: f64 = 1e-9; // m

// Math
pub const PI: f64 = std::f64::consts::PI;
