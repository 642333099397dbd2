//! Analytic Sun model.
//!
//! Mean anomaly plus a three-term equation of center; the Sun is placed on
//! the ecliptic (latitude 0).

use std::f64::consts::PI;

use soluna_frames::EquatorialCoords;

/// Ecliptic longitude of Earth's perihelion in degrees.
pub const EARTH_PERIHELION_DEG: f64 = 102.9372;

/// Solar mean anomaly in radians.
///
/// `M = (357.5291 + 0.98560028·d)·π/180`
pub fn solar_mean_anomaly(days: f64) -> f64 {
    (357.5291 + 0.985_600_28 * days).to_radians()
}

/// Ecliptic longitude of the Sun for mean anomaly `m`, in radians (not wrapped).
///
/// `L = M + C + P + π` with `C` the equation of center and `P` the perihelion.
pub fn ecliptic_longitude(m: f64) -> f64 {
    let center = (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin())
        .to_radians();
    m + center + EARTH_PERIHELION_DEG.to_radians() + PI
}

/// Geocentric equatorial coordinates of the Sun.
pub fn sun_coordinates(days: f64) -> EquatorialCoords {
    let longitude = ecliptic_longitude(solar_mean_anomaly(days));
    EquatorialCoords::from_ecliptic(longitude, 0.0)
}
