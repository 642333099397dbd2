//! Low-precision Sun and Moon models.
//!
//! Every function here is a pure map from "days since J2000.0" (see
//! [`soluna_time::to_days_since_j2000`]) to coordinates. Accuracy is a few
//! arcminutes, fit for lighting and scheduling, not for navigation.
//!
//! This crate provides:
//! - The observer location type
//! - Sun mean anomaly, ecliptic longitude and equatorial coordinates
//! - Moon ecliptic/equatorial coordinates and distance
//! - Horizontal Sun and Moon positions for an observer
//! - Moon illumination (fraction, phase, bright-limb angle)

pub mod error;
pub mod illumination;
pub mod location;
pub mod moon;
pub mod position;
pub mod sun;

pub use error::CoreError;
pub use illumination::{
    LunarPhaseName, MoonIllumination, SUN_DISTANCE_KM, illumination_from_coords,
    moon_illumination,
};
pub use location::GeoLocation;
pub use moon::{MoonCoords, moon_coordinates};
pub use position::{MoonPosition, moon_position, sun_position};
pub use sun::{EARTH_PERIHELION_DEG, ecliptic_longitude, solar_mean_anomaly, sun_coordinates};
