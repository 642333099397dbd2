use chrono::{DateTime, TimeZone, Utc};
use soluna_core::{GeoLocation, MoonIllumination, MoonPosition};
use soluna_frames::HorizontalCoords;
use soluna_search::{DEFAULT_SUN_TIMES, MoonTimes, MoonTimesConfig, SunTimeSpec, SunTimes};
use soluna_time::to_days_since_j2000;

use crate::error::SolunaError;

/// Validated observer location from degree inputs.
fn location(lat_deg: f64, lon_deg: f64, height_m: f64) -> Result<GeoLocation, SolunaError> {
    GeoLocation::try_new(lat_deg, lon_deg, height_m).map_err(|err| {
        log::debug!("rejected location ({lat_deg}, {lon_deg}, {height_m} m): {err}");
        err.into()
    })
}

/// Sun azimuth and altitude in radians at `instant`.
///
/// Azimuth is measured from south, westward positive.
pub fn sun_position<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    lat_deg: f64,
    lon_deg: f64,
) -> Result<HorizontalCoords, SolunaError> {
    let loc = location(lat_deg, lon_deg, 0.0)?;
    Ok(soluna_core::sun_position(to_days_since_j2000(instant), &loc))
}

/// Sun times for the standard thresholds.
///
/// Shorthand for [`sun_times_with`] with [`DEFAULT_SUN_TIMES`].
pub fn sun_times<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    lat_deg: f64,
    lon_deg: f64,
    height_m: f64,
) -> Result<SunTimes, SolunaError> {
    sun_times_with(instant, lat_deg, lon_deg, height_m, &DEFAULT_SUN_TIMES)
}

/// Sun times for a caller-supplied threshold table.
pub fn sun_times_with<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    lat_deg: f64,
    lon_deg: f64,
    height_m: f64,
    table: &[SunTimeSpec],
) -> Result<SunTimes, SolunaError> {
    let loc = location(lat_deg, lon_deg, height_m)?;
    Ok(soluna_search::sun_times(instant, &loc, table)?)
}

/// Moon position at `instant`, refraction included in the altitude.
pub fn moon_position<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    lat_deg: f64,
    lon_deg: f64,
) -> Result<MoonPosition, SolunaError> {
    let loc = location(lat_deg, lon_deg, 0.0)?;
    Ok(soluna_core::moon_position(to_days_since_j2000(instant), &loc))
}

/// Moon illumination at `instant`. Needs no location.
pub fn moon_illumination<Tz: TimeZone>(instant: &DateTime<Tz>) -> MoonIllumination {
    soluna_core::moon_illumination(to_days_since_j2000(instant))
}

/// Moon illumination at the current system time.
pub fn moon_illumination_now() -> MoonIllumination {
    moon_illumination(&Utc::now())
}

/// Moon rise/set on the calendar day of `day`, in `day`'s time zone.
pub fn moon_times<Tz: TimeZone>(
    day: &DateTime<Tz>,
    lat_deg: f64,
    lon_deg: f64,
) -> Result<MoonTimes<Tz>, SolunaError> {
    let loc = location(lat_deg, lon_deg, 0.0)?;
    Ok(soluna_search::moon_times(day, &loc, &MoonTimesConfig::default())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap()
    }

    #[test]
    fn invalid_latitude_rejected() {
        let err = sun_position(&reference(), 91.0, 0.0).unwrap_err();
        assert!(matches!(err, SolunaError::Core(_)), "{err:?}");
    }

    #[test]
    fn negative_height_rejected() {
        assert!(sun_times(&reference(), 50.0, 30.0, -1.0).is_err());
    }

    #[test]
    fn non_finite_longitude_rejected() {
        assert!(moon_times(&reference(), 50.0, f64::INFINITY).is_err());
        assert!(moon_position(&reference(), 50.0, f64::NAN).is_err());
    }

    #[test]
    fn illumination_now_is_in_range() {
        let ill = moon_illumination_now();
        assert!((0.0..=1.0).contains(&ill.fraction));
        assert!((0.0..=1.0).contains(&ill.phase));
    }
}
