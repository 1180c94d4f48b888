use std::fmt;

use serde::Serialize;

pub mod heading;
pub mod lsm303d;
pub mod registry;
pub mod vector;

pub use lsm303d::{Error, Lsm303d};
pub use vector::Vector;

/// Structure de données issues de l'accéléromètre/magnétomètre
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MotionData {
    pub accelerometer: Vector<f64>,
    pub magnetometer: Vector<i16>,
    pub temperature: i16,
    pub raw_heading: f64,
    pub heading: Option<f64>,
    pub tilt_compensated: Option<Vector<f64>>,
}

impl fmt::Display for MotionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ACCEL: {} MAG: {} T: {} (1/8 °C) Cap brut: {:.2}°",
            self.accelerometer, self.magnetometer, self.temperature, self.raw_heading
        )?;

        match self.heading {
            Some(heading) => write!(f, " Cap: {:.2}°", heading),
            None => write!(f, " Cap: indisponible"),
        }
    }
}
