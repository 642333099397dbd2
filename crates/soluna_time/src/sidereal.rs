//! Low-precision local sidereal time.
//!
//! Linear rotation model anchored at J2000.0; good to a few arcseconds per
//! century, which is well inside the arcminute budget of the Sun/Moon series.

/// Local sidereal time in radians (not wrapped).
///
/// `θ = (280.16 + 360.9856235·d)·π/180 − lw`
///
/// `days` counts from J2000.0; `west_longitude_rad` is the observer longitude
/// with west positive.
pub fn sidereal_time(days: f64, west_longitude_rad: f64) -> f64 {
    (280.16 + 360.985_623_5 * days).to_radians() - west_longitude_rad
}
