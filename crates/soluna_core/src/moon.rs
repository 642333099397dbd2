//! Analytic Moon model.
//!
//! Mean longitude, mean anomaly and mean argument of latitude with the
//! leading periodic term for each of longitude, latitude and distance.

use serde::{Deserialize, Serialize};

use soluna_frames::{EquatorialCoords, declination, right_ascension};

/// Geocentric Moon coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonCoords {
    /// Corrected ecliptic longitude in radians (not wrapped).
    pub ecliptic_longitude: f64,
    /// Ecliptic latitude in radians.
    pub ecliptic_latitude: f64,
    /// Right ascension in radians.
    pub right_ascension: f64,
    /// Declination in radians.
    pub declination: f64,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
}

impl MoonCoords {
    /// Right ascension and declination alone.
    pub fn equatorial(&self) -> EquatorialCoords {
        EquatorialCoords {
            right_ascension: self.right_ascension,
            declination: self.declination,
        }
    }
}

/// Moon coordinates `days` after J2000.0.
pub fn moon_coordinates(days: f64) -> MoonCoords {
    let mean_longitude = (218.316 + 13.176_396 * days).to_radians();
    let mean_anomaly = (134.963 + 13.064_993 * days).to_radians();
    let mean_distance = (93.272 + 13.229_350 * days).to_radians();

    let longitude = mean_longitude + 6.289_f64.to_radians() * mean_anomaly.sin();
    let latitude = 5.128_f64.to_radians() * mean_distance.sin();
    let distance_km = 385_001.0 - 20_905.0 * mean_anomaly.cos();

    MoonCoords {
        ecliptic_longitude: longitude,
        ecliptic_latitude: latitude,
        right_ascension: right_ascension(longitude, latitude),
        declination: declination(longitude, latitude),
        distance_km,
    }
}
