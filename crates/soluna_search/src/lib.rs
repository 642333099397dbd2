//! Rise/set event search for the Sun and Moon.
//!
//! This crate provides:
//! - Sun threshold crossings (sunrise/sunset, twilights, golden hour) from a
//!   transit-time approximation, plus solar noon and nadir
//! - Moon rise/set from 2-hour altitude samples with local quadratic fits,
//!   including always-up / always-down days
//!
//! An event that does not happen on the requested day is a normal outcome
//! (`None` or a dedicated variant), never an error.

pub mod error;
pub mod moon_times;
pub mod moon_times_types;
pub mod sun_times;
pub mod sun_times_types;

pub use error::SearchError;
pub use moon_times::{QuadraticFit, WindowRoots, moon_crossing_hours, moon_times};
pub use moon_times_types::{MoonDay, MoonTimes, MoonTimesConfig, WindowEvent};
pub use sun_times::{
    SolarTransit, approx_transit, hour_angle, julian_cycle, observer_angle_deg, solar_day,
    solar_transit_jd, sun_times,
};
pub use sun_times_types::{
    DEFAULT_SUN_TIMES, DayPhase, SolarCrossing, SolarDay, SunTimeEvent, SunTimeSpec, SunTimes,
};
