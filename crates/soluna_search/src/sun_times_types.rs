//! Types for Sun threshold-crossing calculations.
//!
//! Provides the threshold table entry, the default table, and the
//! Julian-date and calendar result types used by the sun-times module.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One Sun altitude threshold with the names of its two daily crossings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTimeSpec {
    /// Sun altitude in degrees; negative is below the horizon.
    pub angle_deg: f64,
    /// Name of the morning (rising) crossing.
    pub morning: Cow<'static, str>,
    /// Name of the evening (setting) crossing.
    pub evening: Cow<'static, str>,
}

impl SunTimeSpec {
    /// Threshold with static names, usable in constants.
    pub const fn new(angle_deg: f64, morning: &'static str, evening: &'static str) -> Self {
        Self {
            angle_deg,
            morning: Cow::Borrowed(morning),
            evening: Cow::Borrowed(evening),
        }
    }

    /// Threshold with names chosen at runtime.
    pub fn custom(angle_deg: f64, morning: impl Into<String>, evening: impl Into<String>) -> Self {
        Self {
            angle_deg,
            morning: Cow::Owned(morning.into()),
            evening: Cow::Owned(evening.into()),
        }
    }
}

/// Standard twilight and golden-hour thresholds.
///
/// -0.833° is the upper limb at the horizon with standard refraction;
/// -0.3° the lower limb; -6/-12/-18° civil, nautical and astronomical
/// twilight; +6° the golden hour.
pub const DEFAULT_SUN_TIMES: [SunTimeSpec; 6] = [
    SunTimeSpec::new(-0.833, "sunrise", "sunset"),
    SunTimeSpec::new(-0.3, "sunriseEnd", "sunsetStart"),
    SunTimeSpec::new(-6.0, "dawn", "dusk"),
    SunTimeSpec::new(-12.0, "nauticalDawn", "nauticalDusk"),
    SunTimeSpec::new(-18.0, "nightEnd", "night"),
    SunTimeSpec::new(6.0, "goldenHourEnd", "goldenHour"),
];

/// Which side of solar noon a crossing falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    Morning,
    Evening,
}

/// Crossings of one threshold, as Julian Dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarCrossing {
    /// Threshold altitude in degrees (before the observer-height correction).
    pub angle_deg: f64,
    /// Morning crossing; `None` when the Sun never reaches the threshold.
    pub rise_jd: Option<f64>,
    /// Evening crossing; `None` when the Sun never reaches the threshold.
    pub set_jd: Option<f64>,
}

/// One solar day at Julian-date level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarDay {
    /// Solar transit (noon).
    pub noon_jd: f64,
    /// Half a day before transit.
    pub nadir_jd: f64,
    /// One entry per threshold, in table order.
    pub crossings: Vec<SolarCrossing>,
}

/// A named crossing converted to a calendar instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTimeEvent {
    pub name: Cow<'static, str>,
    pub angle_deg: f64,
    pub phase: DayPhase,
    /// `None` when the event does not occur on this day.
    pub time: Option<DateTime<Utc>>,
}

/// Sun times for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub solar_noon: DateTime<Utc>,
    pub nadir: DateTime<Utc>,
    /// Morning then evening event for each threshold, in table order.
    pub events: Vec<SunTimeEvent>,
}

impl SunTimes {
    /// Look up an event by name.
    pub fn event(&self, name: &str) -> Option<&SunTimeEvent> {
        self.events.iter().find(|e| e.name == name)
    }

    /// Instant of a named event; `None` if unknown or not occurring.
    ///
    /// `"solarNoon"` and `"nadir"` are also accepted.
    pub fn get(&self, name: &str) -> Option<DateTime<Utc>> {
        match name {
            "solarNoon" => Some(self.solar_noon),
            "nadir" => Some(self.nadir),
            _ => self.event(name).and_then(|e| e.time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_order() {
        let angles: Vec<f64> = DEFAULT_SUN_TIMES.iter().map(|s| s.angle_deg).collect();
        assert_eq!(angles, vec![-0.833, -0.3, -6.0, -12.0, -18.0, 6.0]);
        assert_eq!(DEFAULT_SUN_TIMES[0].morning, "sunrise");
        assert_eq!(DEFAULT_SUN_TIMES[4].evening, "night");
    }

    #[test]
    fn custom_names_are_owned() {
        let spec = SunTimeSpec::custom(-4.0, "blueHourEnd", "blueHour");
        assert!(matches!(spec.morning, Cow::Owned(_)));
        assert_eq!(spec.evening, "blueHour");
    }

    #[test]
    fn table_from_json() {
        let json = r#"[
            {"angle_deg": -0.833, "morning": "sunrise", "evening": "sunset"},
            {"angle_deg": -4.0, "morning": "blueHourEnd", "evening": "blueHour"}
        ]"#;
        let table: Vec<SunTimeSpec> = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0], DEFAULT_SUN_TIMES[0]);
        assert_eq!(table[1].angle_deg, -4.0);
    }

    #[test]
    fn lookup_by_name() {
        let noon = DateTime::from_timestamp_millis(1_362_478_257_158).unwrap();
        let times = SunTimes {
            solar_noon: noon,
            nadir: noon,
            events: vec![
                SunTimeEvent {
                    name: "sunrise".into(),
                    angle_deg: -0.833,
                    phase: DayPhase::Morning,
                    time: Some(noon),
                },
                SunTimeEvent {
                    name: "sunset".into(),
                    angle_deg: -0.833,
                    phase: DayPhase::Evening,
                    time: None,
                },
            ],
        };
        assert_eq!(times.get("sunrise"), Some(noon));
        assert_eq!(times.get("sunset"), None);
        assert_eq!(times.get("solarNoon"), Some(noon));
        assert_eq!(times.get("unknown"), None);
        assert_eq!(times.event("sunset").map(|e| e.phase), Some(DayPhase::Evening));
    }
}
