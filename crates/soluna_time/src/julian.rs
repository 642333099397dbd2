//! Julian Date ↔ instant conversion.
//!
//! The scale is the plain civil one: a day is exactly 86 400 000 ms and leap
//! seconds are ignored, which is all the few-arcminute models need.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::TimeError;

/// Milliseconds in one civil day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day Number at the Unix epoch day (1970-01-01, noon-based count).
pub const JD_UNIX_EPOCH: f64 = 2_440_588.0;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of a Unix millisecond timestamp.
///
/// `jd = ms / 86_400_000 - 0.5 + 2_440_588`
pub fn millis_to_julian_day(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_DAY - 0.5 + JD_UNIX_EPOCH
}

/// Julian Date of an instant in any time zone.
pub fn to_julian_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    millis_to_julian_day(instant.timestamp_millis())
}

/// Instant (UTC) of a Julian Date, rounded to the nearest millisecond.
///
/// Fails for non-finite input and for dates outside the calendar range.
pub fn from_julian_day(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::NonFinite(jd));
    }
    let millis = ((jd + 0.5 - JD_UNIX_EPOCH) * MILLIS_PER_DAY).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(TimeError::OutOfRange(jd))
}

/// Days elapsed since J2000.0 (fractional).
pub fn to_days_since_j2000<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    to_julian_day(instant) - J2000_JD
}
