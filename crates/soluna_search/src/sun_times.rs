//! Sun threshold crossings: sunrise/sunset, twilights and golden hour.
//!
//! Closed-form approximation around solar transit. The day's transit is
//! located from the nearest whole solar cycle, the equation of time is
//! folded in with two periodic terms, and each threshold's evening crossing
//! follows from the spherical hour-angle formula. Morning crossings are the
//! mirror image about transit.

use std::f64::consts::TAU;

use chrono::{DateTime, TimeZone};
use soluna_core::{GeoLocation, ecliptic_longitude, solar_mean_anomaly};
use soluna_frames::declination;
use soluna_time::{J2000_JD, from_julian_day, to_days_since_j2000};

use crate::error::SearchError;
use crate::sun_times_types::{DayPhase, SolarCrossing, SolarDay, SunTimeEvent, SunTimeSpec, SunTimes};

/// Fractional-day offset between the mean and the apparent transit model.
const J0: f64 = 0.0009;

/// Whole number of solar cycles since J2000.0 nearest to `days`.
///
/// Rounds half up, so a value exactly between two cycles picks the later one.
pub fn julian_cycle(days: f64, west_longitude_rad: f64) -> f64 {
    (days - J0 - west_longitude_rad / TAU + 0.5).floor()
}

/// Approximate day count (since J2000.0) at which the Sun reaches `hour_angle`.
pub fn approx_transit(hour_angle: f64, west_longitude_rad: f64, cycle: f64) -> f64 {
    J0 + (hour_angle + west_longitude_rad) / TAU + cycle
}

/// Julian Date of a transit-relative instant with the equation-of-time terms.
///
/// `J = J2000 + ds + 0.0053·sin M − 0.0069·sin 2L`
pub fn solar_transit_jd(ds: f64, mean_anomaly: f64, ecliptic_longitude: f64) -> f64 {
    J2000_JD + ds + 0.0053 * mean_anomaly.sin() - 0.0069 * (2.0 * ecliptic_longitude).sin()
}

/// Dip of the horizon in degrees for an observer `height_m` meters up.
pub fn observer_angle_deg(height_m: f64) -> f64 {
    -2.076 * height_m.sqrt() / 60.0
}

/// Hour angle (radians) at which a body of declination `dec` has altitude `h`.
///
/// NaN when the body never reaches that altitude at latitude `phi`.
pub fn hour_angle(h: f64, phi: f64, dec: f64) -> f64 {
    ((h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos()
}

/// Sun parameters frozen at one day's transit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTransit {
    /// Observer longitude in radians, west positive.
    pub west_longitude_rad: f64,
    /// Observer latitude `φ` in radians.
    pub latitude_rad: f64,
    /// Solar cycle number `n`.
    pub cycle: f64,
    /// Mean anomaly `M` at transit.
    pub mean_anomaly: f64,
    /// Ecliptic longitude `L` at transit.
    pub ecliptic_longitude: f64,
    /// Declination at transit.
    pub declination: f64,
    /// Julian Date of transit (solar noon).
    pub noon_jd: f64,
}

impl SolarTransit {
    /// Transit nearest to `days` (since J2000.0) for `location`.
    pub fn nearest(days: f64, location: &GeoLocation) -> Self {
        let lw = location.west_longitude_rad();
        let cycle = julian_cycle(days, lw);
        let ds = approx_transit(0.0, lw, cycle);
        let m = solar_mean_anomaly(ds);
        let l = ecliptic_longitude(m);
        Self {
            west_longitude_rad: lw,
            latitude_rad: location.latitude_rad(),
            cycle,
            mean_anomaly: m,
            ecliptic_longitude: l,
            declination: declination(l, 0.0),
            noon_jd: solar_transit_jd(ds, m, l),
        }
    }

    /// Evening crossing of altitude `h0` (radians) as a Julian Date.
    ///
    /// `None` when the Sun does not reach `h0` this day.
    pub fn set_jd(&self, h0: f64) -> Option<f64> {
        let w = hour_angle(h0, self.latitude_rad, self.declination);
        let a = approx_transit(w, self.west_longitude_rad, self.cycle);
        let jd = solar_transit_jd(a, self.mean_anomaly, self.ecliptic_longitude);
        (!jd.is_nan()).then_some(jd)
    }

    /// Morning crossing mirrored from an evening crossing.
    pub fn rise_jd(&self, set_jd: f64) -> f64 {
        self.noon_jd - (set_jd - self.noon_jd)
    }
}

/// Noon, nadir and every threshold crossing of the day nearest `days`.
///
/// Observer height lowers every threshold by the dip of the horizon.
pub fn solar_day(days: f64, location: &GeoLocation, table: &[SunTimeSpec]) -> SolarDay {
    let transit = SolarTransit::nearest(days, location);
    let dip = observer_angle_deg(location.altitude_m);

    let crossings = table
        .iter()
        .map(|spec| {
            let h0 = (spec.angle_deg + dip).to_radians();
            let set_jd = transit.set_jd(h0);
            if set_jd.is_none() {
                log::debug!(
                    "sun does not reach {}° at latitude {}°",
                    spec.angle_deg,
                    location.latitude_deg
                );
            }
            SolarCrossing {
                angle_deg: spec.angle_deg,
                rise_jd: set_jd.map(|jd| transit.rise_jd(jd)),
                set_jd,
            }
        })
        .collect();

    SolarDay {
        noon_jd: transit.noon_jd,
        nadir_jd: transit.noon_jd - 0.5,
        crossings,
    }
}

/// Sun times for the solar day nearest `instant`.
///
/// # Returns
/// Solar noon, nadir, and a morning and an evening event per `table` entry.
/// Thresholds the Sun never reaches (polar day/night) have `time: None`.
pub fn sun_times<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    location: &GeoLocation,
    table: &[SunTimeSpec],
) -> Result<SunTimes, SearchError> {
    let day = solar_day(to_days_since_j2000(instant), location, table);

    let mut events = Vec::with_capacity(table.len() * 2);
    for (spec, crossing) in table.iter().zip(&day.crossings) {
        events.push(SunTimeEvent {
            name: spec.morning.clone(),
            angle_deg: spec.angle_deg,
            phase: DayPhase::Morning,
            time: crossing.rise_jd.map(from_julian_day).transpose()?,
        });
        events.push(SunTimeEvent {
            name: spec.evening.clone(),
            angle_deg: spec.angle_deg,
            phase: DayPhase::Evening,
            time: crossing.set_jd.map(from_julian_day).transpose()?,
        });
    }

    Ok(SunTimes {
        solar_noon: from_julian_day(day.noon_jd)?,
        nadir: from_julian_day(day.nadir_jd)?,
        events,
    })
}
