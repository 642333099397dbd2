//! Horizontal positions of the Sun and Moon for an observer.

use serde::{Deserialize, Serialize};

use soluna_frames::{
    HorizontalCoords, RefractionClamped, altitude, astronomical_refraction, azimuth,
    parallactic_angle,
};
use soluna_time::sidereal_time;

use crate::location::GeoLocation;
use crate::moon::moon_coordinates;
use crate::sun::sun_coordinates;

/// Apparent Moon position for an observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPosition {
    /// Azimuth in radians from south, westward positive.
    pub azimuth: f64,
    /// Altitude in radians, refraction included.
    pub altitude: f64,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
    /// Parallactic angle in radians.
    pub parallactic_angle: f64,
    /// Present when the geometric altitude was below the horizon and the
    /// refraction term was evaluated at the horizon instead.
    pub refraction_clamped: Option<RefractionClamped>,
}

/// Geometric (unrefracted) Sun position `days` after J2000.0.
pub fn sun_position(days: f64, location: &GeoLocation) -> HorizontalCoords {
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();
    let sun = sun_coordinates(days);
    let h = sidereal_time(days, lw) - sun.right_ascension;
    HorizontalCoords::from_hour_angle(h, phi, sun.declination)
}

/// Moon position `days` after J2000.0, with refraction applied to the altitude.
pub fn moon_position(days: f64, location: &GeoLocation) -> MoonPosition {
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();
    let moon = moon_coordinates(days);
    let h = sidereal_time(days, lw) - moon.right_ascension;
    let geometric = altitude(h, phi, moon.declination);
    let refraction = astronomical_refraction(geometric);

    MoonPosition {
        azimuth: azimuth(h, phi, moon.declination),
        altitude: geometric + refraction.correction_rad,
        distance_km: moon.distance_km,
        parallactic_angle: parallactic_angle(h, phi, moon.declination),
        refraction_clamped: refraction.clamped,
    }
}
