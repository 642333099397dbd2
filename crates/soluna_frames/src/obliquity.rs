//! Obliquity of the ecliptic used by the analytic series.

use std::f64::consts::PI;

/// Mean obliquity of the ecliptic in degrees, held fixed.
pub const EARTH_OBLIQUITY_DEG: f64 = 23.4397;

/// Mean obliquity of the ecliptic in radians.
pub const EARTH_OBLIQUITY_RAD: f64 = EARTH_OBLIQUITY_DEG * (PI / 180.0);
