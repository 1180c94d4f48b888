use std::f64::consts::PI;

use nalgebra::{Matrix3, Vector3};

use super::vector::Vector;

/// Cap magnétique brut (degrés) calculé à partir du magnétomètre seul
pub(crate) fn raw_heading(mag: &Vector<i16>) -> f64 {
    let mut heading = f64::from(mag.x).atan2(f64::from(mag.y));
    if heading < 0.0 {
        heading += 2.0 * PI;
    }

    to_degrees_rounded(heading)
}

/// Cap compensé en inclinaison.
/// Retourne le vecteur magnétique dans le repère horizontal et le cap en degrés,
/// ou `None` si le calcul sort du domaine des fonctions trigonométriques.
pub(crate) fn tilt_compensate(accel: &Vector<f64>, mag: &Vector<i16>) -> Option<(Vector<f64>, f64)> {
    let (pitch, roll) = attitude(accel);
    let tilt = rotate(mag, pitch, roll);
    let heading = heading_of(&tilt)?;

    Some((Vector::from(tilt), heading))
}

/// Limite une accélération à +/- 1g en conservant le signe (NaN est propagé)
fn truncate(value: f64) -> f64 {
    if value.abs() > 1.0 {
        value.signum()
    } else {
        value
    }
}

/// Tangage et roulis (radians) à partir de l'accélération
fn attitude(accel: &Vector<f64>) -> (f64, f64) {
    let x = truncate(accel.x);
    let y = truncate(accel.y);

    let pitch = (-x).asin();

    // Roulis à zéro quand le tangage approche +/- 90°
    let mut roll = 0.0;
    if pitch.cos().abs() >= y.abs() {
        roll = (y / pitch.cos()).asin();
    }

    (pitch, roll)
}

/// Projette le champ magnétique dans le plan horizontal
fn rotate(mag: &Vector<i16>, pitch: f64, roll: f64) -> Vector3<f64> {
    let (sp, cp) = pitch.sin_cos();
    let (sr, cr) = roll.sin_cos();

    let rotation = Matrix3::new(
        cp, 0.0, sp,
        sr * sp, cr, -sr * cp,
        cr * sp, sr, cr * cp,
    );

    rotation * mag.to_vector3()
}

fn heading_of(tilt: &Vector3<f64>) -> Option<f64> {
    let mut heading = tilt.y.atan2(tilt.x);
    if heading < 0.0 {
        heading += 2.0 * PI;
    }

    let degrees = to_degrees_rounded(heading);
    degrees.is_finite().then_some(degrees)
}

/// Radians vers degrés, arrondi au centième
fn to_degrees_rounded(angle: f64) -> f64 {
    (100.0 * 180.0 * angle / PI).round() / 100.0
}
