//! Convenience wrapper for soluna.
//!
//! High-level functions that take calendar instants and degree coordinates
//! directly, validate the location, and return the low-level result types.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use soluna_rs::*;
//!
//! let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
//! let times = sun_times(&date, 50.5, 30.5, 0.0).unwrap();
//! let sunrise = times.get("sunrise").unwrap();
//! assert!(sunrise < times.solar_noon);
//!
//! let moon = moon_times(&date, 50.5, 30.5).unwrap();
//! println!("moonrise: {:?}", moon.rise());
//! ```

pub mod convenience;
pub mod error;

pub use convenience::{
    moon_illumination, moon_illumination_now, moon_position, moon_times, sun_position, sun_times,
    sun_times_with,
};
pub use error::SolunaError;

// Re-export result and configuration types so callers need only this crate.
pub use soluna_core::{GeoLocation, LunarPhaseName, MoonIllumination, MoonPosition};
pub use soluna_frames::HorizontalCoords;
pub use soluna_search::{
    DEFAULT_SUN_TIMES, DayPhase, MoonDay, MoonTimes, MoonTimesConfig, SunTimeEvent, SunTimeSpec,
    SunTimes,
};
