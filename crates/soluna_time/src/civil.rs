//! Civil-time arithmetic on `chrono` instants.

use chrono::{DateTime, TimeDelta, TimeZone, Timelike};

use crate::error::TimeError;

/// Milliseconds in one hour.
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Shift an instant by a (possibly negative or fractional) number of hours.
///
/// The offset is rounded to the nearest millisecond. The result keeps the
/// input's time zone.
pub fn add_hours<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    hours: f64,
) -> Result<DateTime<Tz>, TimeError> {
    let millis = (hours * MILLIS_PER_HOUR).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(TimeError::Overflow(hours));
    }
    let delta = TimeDelta::try_milliseconds(millis as i64).ok_or(TimeError::Overflow(hours))?;
    instant
        .clone()
        .checked_add_signed(delta)
        .ok_or(TimeError::Overflow(hours))
}

/// Midnight at the start of the instant's calendar day, in its own time zone.
///
/// A `DateTime<Utc>` normalizes to UTC midnight; an offset or local zone
/// normalizes to that zone's midnight. When midnight is skipped by a DST
/// transition the elapsed wall-clock time since midnight is subtracted instead.
pub fn start_of_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = instant.timezone();
    instant
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| tz.from_local_datetime(&midnight).earliest())
        .unwrap_or_else(|| {
            let elapsed = TimeDelta::seconds(i64::from(instant.num_seconds_from_midnight()))
                + TimeDelta::nanoseconds(i64::from(instant.nanosecond()));
            instant.clone() - elapsed
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn three_hours_later() {
        let t = Utc.with_ymd_and_hms(1992, 6, 10, 12, 0, 0).unwrap();
        let later = add_hours(&t, 3.0).unwrap();
        assert_eq!(later.timestamp_millis(), 708_188_400_000);
    }

    #[test]
    fn one_day_later() {
        let t = Utc.with_ymd_and_hms(2021, 1, 18, 12, 0, 0).unwrap();
        let later = add_hours(&t, 24.0).unwrap();
        assert_eq!(later.timestamp_millis(), 1_611_057_600_000);
    }

    #[test]
    fn negative_fractional_hours() {
        let t = Utc.with_ymd_and_hms(2021, 1, 18, 12, 0, 0).unwrap();
        let earlier = add_hours(&t, -1.5).unwrap();
        assert_eq!(t.timestamp_millis() - earlier.timestamp_millis(), 5_400_000);
    }

    #[test]
    fn keeps_time_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let t = tz.with_ymd_and_hms(2013, 3, 4, 0, 0, 0).unwrap();
        let later = add_hours(&t, 7.5).unwrap();
        assert_eq!(later.offset(), t.offset());
        assert_eq!(later.to_rfc3339(), "2013-03-04T07:30:00+02:00");
    }

    #[test]
    fn nan_hours_overflow() {
        let t = Utc.with_ymd_and_hms(2021, 1, 18, 12, 0, 0).unwrap();
        assert!(matches!(add_hours(&t, f64::NAN), Err(TimeError::Overflow(_))));
    }

    #[test]
    fn start_of_day_utc() {
        let t = Utc.with_ymd_and_hms(2013, 3, 5, 17, 42, 11).unwrap();
        let midnight = start_of_day(&t);
        assert_eq!(midnight, Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn start_of_day_offset_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        // 2013-03-04T23:30Z is already March 5 in UTC+2.
        let t = Utc
            .with_ymd_and_hms(2013, 3, 4, 23, 30, 0)
            .unwrap()
            .with_timezone(&tz);
        let midnight = start_of_day(&t);
        assert_eq!(
            midnight.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2013, 3, 4, 22, 0, 0).unwrap()
        );
    }
}
