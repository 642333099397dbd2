//! Ecliptic → equatorial conversion.

use serde::{Deserialize, Serialize};

use crate::obliquity::EARTH_OBLIQUITY_RAD;

/// Geocentric equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoords {
    /// Right ascension in radians, range (-π, π].
    pub right_ascension: f64,
    /// Declination in radians, range [-π/2, π/2].
    pub declination: f64,
}

impl EquatorialCoords {
    /// Convert ecliptic longitude/latitude (radians) to equatorial coordinates.
    pub fn from_ecliptic(longitude: f64, latitude: f64) -> Self {
        Self {
            right_ascension: right_ascension(longitude, latitude),
            declination: declination(longitude, latitude),
        }
    }
}

/// Right ascension of an ecliptic position.
///
/// `α = atan2(sin l·cos ε − tan b·sin ε, cos l)`
pub fn right_ascension(longitude: f64, latitude: f64) -> f64 {
    let e = EARTH_OBLIQUITY_RAD;
    (longitude.sin() * e.cos() - latitude.tan() * e.sin()).atan2(longitude.cos())
}

/// Declination of an ecliptic position.
///
/// `δ = asin(sin b·cos ε + cos b·sin ε·sin l)`
pub fn declination(longitude: f64, latitude: f64) -> f64 {
    let e = EARTH_OBLIQUITY_RAD;
    (latitude.sin() * e.cos() + latitude.cos() * e.sin() * longitude.sin()).asin()
}
