//! Equatorial → horizontal conversion for an observer.
//!
//! All functions take the local hour angle `H`, the observer latitude `φ`
//! and the body declination `δ`, in radians. Azimuth is measured from south,
//! positive toward west.

use serde::{Deserialize, Serialize};

/// Topocentric horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoords {
    /// Azimuth in radians from south, westward positive.
    pub azimuth: f64,
    /// Altitude above the horizon in radians.
    pub altitude: f64,
}

impl HorizontalCoords {
    /// Horizontal coordinates of a body with declination `dec` at hour angle `h`.
    pub fn from_hour_angle(h: f64, phi: f64, dec: f64) -> Self {
        Self {
            azimuth: azimuth(h, phi, dec),
            altitude: altitude(h, phi, dec),
        }
    }
}

/// `A = atan2(sin H, cos H·sin φ − tan δ·cos φ)`
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// `a = asin(sin φ·sin δ + cos φ·cos δ·cos H)`
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Parallactic angle: angle at the body between the zenith and the celestial pole.
///
/// `q = atan2(sin H, tan φ·cos δ − sin δ·cos H)`
pub fn parallactic_angle(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(phi.tan() * dec.cos() - dec.sin() * h.cos())
}
