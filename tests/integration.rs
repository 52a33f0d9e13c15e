use ascent::config::{AtmosphereModel, CentralBody, EllipsoidParameters, KernelConfig, VehicleParameters};
use ascent::coordinates::geodetic::{cartesian_to_geodetic, geodetic_to_cartesian, height_above_surface};
use ascent::errors::DomainError;
use ascent::models::KinematicState;
use ascent::physics::drag::drag_force_magnitude;
use ascent::physics::dynamics::{AscentDynamics, EquationsOfMotion};
use ascent::physics::environment::atmospheric_density;
use ascent::physics::gravity::gravity;
use ascent::physics::thrust::{thrust_force, thrust_force_magnitude};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra as na;
use std::path::Path;
use std::thread;

fn sample_config() -> KernelConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/falcon_heavy.toml");
    KernelConfig::load(path).expect("sample configuration should load")
}

#[test]
fn sample_config_matches_built_in_tables() {
    let config = sample_config();
    assert_eq!(config.body, CentralBody::earth());
    assert_eq!(config.atmosphere, AtmosphereModel::standard());
    assert_eq!(config.vehicle, VehicleParameters::falcon_heavy());
}

#[test]
fn launch_site_forces_through_public_api() {
    let config = sample_config();
    let ellipsoid = &config.body.ellipsoid;

    // Boundary converts degrees; the core only sees radians
    let position = geodetic_to_cartesian(28.5729f64.to_radians(), (-80.649f64).to_radians(), 0.0, ellipsoid);
    let geodetic = cartesian_to_geodetic(&position, ellipsoid).unwrap();
    assert_abs_diff_eq!(geodetic.latitude.to_degrees(), 28.5729, epsilon = 1e-9);
    assert_abs_diff_eq!(geodetic.longitude.to_degrees(), -80.649, epsilon = 1e-9);
    assert_abs_diff_eq!(geodetic.height, 0.0, epsilon = 1e-3);

    // On the surface the radial and normal heights both vanish
    let radial_height = height_above_surface(&position, ellipsoid).unwrap();
    assert_abs_diff_eq!(radial_height, 0.0, epsilon = 1e-3);

    let weight = gravity(&position, config.vehicle.mass, &config.body).unwrap();
    assert_relative_eq!(weight.magnitude() / config.vehicle.mass, 9.8, epsilon = 0.05);

    let density = atmospheric_density(&position, &config.atmosphere, ellipsoid).unwrap();
    assert_relative_eq!(
        density,
        config.atmosphere.density_at_height(radial_height),
        max_relative = 1e-12
    );

    let up = position.normalize();
    let velocity = up * 150.0;
    let drag = drag_force_magnitude(
        &velocity,
        config.vehicle.drag_coefficient,
        &position,
        config.vehicle.cross_section_area,
        &config.atmosphere,
        ellipsoid,
    )
    .unwrap();
    assert_relative_eq!(
        drag,
        0.5 * 0.5 * 150.0 * 150.0 * density * config.vehicle.cross_section_area,
        max_relative = 1e-12
    );

    let thrust_magnitude = thrust_force_magnitude(config.vehicle.exhaust_velocity, 8_000.0, 1.0).unwrap();
    let thrust = thrust_force(thrust_magnitude, &up).unwrap();
    let dynamics = AscentDynamics::new(&config.body, &config.atmosphere, &config.vehicle, Some(thrust));
    let state = KinematicState::new(position, velocity);

    let derivative = dynamics.compute_derivative(&state).unwrap();
    assert_eq!(derivative.position, velocity);
    // 22.16 MN against ~13.6 MN of weight: net acceleration points up
    assert!(derivative.velocity.dot(&up) > 0.0);
}

#[test]
fn derivative_is_usable_by_an_external_step() {
    let body = CentralBody::earth();
    let atmosphere = AtmosphereModel::standard();
    let vehicle = VehicleParameters::falcon_9_ft();
    let dynamics = AscentDynamics::new(&body, &atmosphere, &vehicle, None);

    let start = KinematicState::new(
        geodetic_to_cartesian(0.0, 0.0, 400_000.0, &body.ellipsoid),
        na::Vector3::new(0.0, 7_670.0, 0.0),
    );

    // One explicit Euler step done by the caller
    let dt = 1.0;
    let next = start + dynamics.compute_derivative(&start).unwrap() * dt;

    assert_abs_diff_eq!(next.position.y, 7_670.0, epsilon = 1e-9);
    assert!(next.velocity.x < 0.0);
}

#[test]
fn domain_errors_are_reported() {
    let body = CentralBody::earth();
    assert_eq!(
        gravity(&na::Vector3::zeros(), 1.0, &body),
        Err(DomainError::UndefinedAtOrigin("gravity"))
    );
    assert_eq!(
        thrust_force_magnitude(2_770.0, 250.0, 0.0),
        Err(DomainError::ZeroTimeInterval)
    );
    assert!(EllipsoidParameters::new(6_356_752.3, 6_378_137.0).is_err());
    assert!(matches!(
        cartesian_to_geodetic(&na::Vector3::new(1_000.0, 0.0, 10.0), &body.ellipsoid),
        Err(DomainError::InsideEvolute { .. })
    ));
}

#[test]
fn evaluations_run_concurrently() {
    let config = sample_config();
    let heights = [0.0, 10_000.0, 50_000.0, 150_000.0];

    let results: Vec<(f64, f64)> = thread::scope(|scope| {
        let handles: Vec<_> = heights
            .iter()
            .map(|&height| {
                let config = &config;
                scope.spawn(move || {
                    let position = geodetic_to_cartesian(0.5, 1.0, height, &config.body.ellipsoid);
                    let density = atmospheric_density(&position, &config.atmosphere, &config.body.ellipsoid).unwrap();
                    (height, density)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for pair in results.windows(2) {
        assert!(pair[0].1 > pair[1].1, "density should fall from {} m to {} m", pair[0].0, pair[1].0);
    }
}
