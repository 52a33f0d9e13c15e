use ascent::config::KernelConfig;
use ascent::coordinates::geodetic::{cartesian_to_geodetic, geodetic_to_cartesian};
use ascent::models::KinematicState;
use ascent::physics::dynamics::AscentDynamics;
use ascent::physics::environment::Environment;
use ascent::physics::orbital::circular_velocity;
use ascent::physics::thrust::{thrust_force, vehicle_thrust_magnitude};
use csv::Writer;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

// Launch site (degrees, converted to radians below)
const SITE_LATITUDE_DEG: f64 = 28.5729;
const SITE_LONGITUDE_DEG: f64 = -80.6490;

const MASS_FLOW: f64 = 2_500.0; // kg/s
const MAX_HEIGHT: f64 = 100_000.0; // m
const HEIGHT_STEP: f64 = 5_000.0; // m

fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => KernelConfig::load(path)?,
        None => KernelConfig::default(),
    };
    let body = &config.body;
    let vehicle = &config.vehicle;

    let latitude = SITE_LATITUDE_DEG.to_radians();
    let longitude = SITE_LONGITUDE_DEG.to_radians();

    let thrust_magnitude = vehicle_thrust_magnitude(vehicle, MASS_FLOW, 1.0)?;
    let orbit_speed = circular_velocity(MAX_HEIGHT, body)?;
    println!(
        "{}: thrust {:.1} kN, {:.1} t of propellant, circular speed at {} km {:.1} m/s",
        vehicle.name,
        thrust_magnitude / 1000.0,
        vehicle.propellant_mass() / 1000.0,
        MAX_HEIGHT / 1000.0,
        orbit_speed
    );

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let file = File::create(output_dir.join("force_profile.csv"))?;
    let mut writer = Writer::from_writer(file);

    writer.write_record([
        "Height (km)",
        "X (km)",
        "Y (km)",
        "Z (km)",
        "Latitude (deg)",
        "Longitude (deg)",
        "Density (kg/m^3)",
        "Speed (m/s)",
        "Mass (kg)",
        "Gravity (N)",
        "Drag (N)",
        "Thrust (N)",
        "Net Force (N)",
    ])?;

    let steps = (MAX_HEIGHT / HEIGHT_STEP) as usize;
    for i in 0..=steps {
        let height = i as f64 * HEIGHT_STEP;
        let position = geodetic_to_cartesian(latitude, longitude, height, &body.ellipsoid);

        // Vertical ascent, speed growing linearly towards orbital speed at the top of the column
        let up = position.normalize();
        let speed = orbit_speed * height / MAX_HEIGHT;
        let state = KinematicState::new(position, up * speed);

        // Propellant drains linearly over the column, never below the dry mass
        let mass = (vehicle.mass - vehicle.propellant_mass() * height / MAX_HEIGHT).max(vehicle.dry_mass);
        let stage = vehicle.with_mass(mass)?;

        let thrust = thrust_force(thrust_magnitude, &up)?;
        let dynamics = AscentDynamics::new(body, &config.atmosphere, &stage, Some(thrust));
        let forces = dynamics.forces(&state)?;

        let geodetic = cartesian_to_geodetic(&position, &body.ellipsoid)?;
        let environment = Environment::new(&position, &config.atmosphere, &body.ellipsoid)?;

        writer.write_record(&[
            (height / 1000.0).to_string(),
            (position.x / 1000.0).to_string(),
            (position.y / 1000.0).to_string(),
            (position.z / 1000.0).to_string(),
            geodetic.latitude.to_degrees().to_string(),
            geodetic.longitude.to_degrees().to_string(),
            environment.density.to_string(),
            state.speed().to_string(),
            stage.mass.to_string(),
            forces.gravity.magnitude().to_string(),
            forces.drag.magnitude().to_string(),
            forces.thrust.magnitude().to_string(),
            forces.net().magnitude().to_string(),
        ])?;
    }

    writer.flush()?;
    println!("Force profile has been written to output/force_profile.csv");

    Ok(())
}
