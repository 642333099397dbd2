//! Coordinate transforms for the low-precision Sun/Moon models.
//!
//! Provides ecliptic → equatorial conversion, equatorial → horizontal
//! conversion for an observer, the parallactic angle, and an empirical
//! atmospheric refraction correction.

pub mod equatorial;
pub mod horizontal;
pub mod obliquity;
pub mod refraction;

pub use equatorial::{EquatorialCoords, declination, right_ascension};
pub use horizontal::{HorizontalCoords, altitude, azimuth, parallactic_angle};
pub use obliquity::{EARTH_OBLIQUITY_DEG, EARTH_OBLIQUITY_RAD};
pub use refraction::{Refraction, RefractionClamped, astronomical_refraction};
