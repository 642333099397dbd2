//! Time normalization for the soluna Sun/Moon calculator.
//!
//! This crate provides:
//! - Instant ↔ Julian Date conversion (millisecond civil time, no leap seconds)
//! - Days since J2000.0, the argument of every analytic series downstream
//! - Hour arithmetic and start-of-day normalization on `chrono` instants
//! - Local sidereal time for the low-precision rotation model

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{add_hours, start_of_day};
pub use error::TimeError;
pub use julian::{
    J2000_JD, JD_UNIX_EPOCH, MILLIS_PER_DAY, from_julian_day, millis_to_julian_day,
    to_days_since_j2000, to_julian_day,
};
pub use sidereal::sidereal_time;
