//! Types for Moon rise/set calculations.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Configurable parameters for the Moon rise/set scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonTimesConfig {
    /// Subtracted from every sampled altitude, in degrees: mean angular
    /// radius of the Moon less its horizontal parallax. Default: 0.133.
    pub horizon_correction_deg: f64,
}

impl Default for MoonTimesConfig {
    fn default() -> Self {
        Self {
            horizon_correction_deg: 0.133,
        }
    }
}

/// What one 2-hour window contributed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    NoEvent,
    Rise(f64),
    Set(f64),
    Both { rise: f64, set: f64 },
}

/// Outcome of a day's Moon scan.
///
/// `T` is an hour offset from midnight (`f64`) inside the solver and an
/// instant ([`MoonTimes`]) at the API boundary. A day with neither crossing
/// is always exactly one of `AlwaysUp`/`AlwaysDown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoonDay<T> {
    Rise(T),
    Set(T),
    RiseAndSet { rise: T, set: T },
    AlwaysUp,
    AlwaysDown,
}

/// Moon rise/set instants for a calendar day.
pub type MoonTimes<Tz> = MoonDay<DateTime<Tz>>;

impl<T> MoonDay<T> {
    pub fn rise(&self) -> Option<&T> {
        match self {
            Self::Rise(rise) | Self::RiseAndSet { rise, .. } => Some(rise),
            _ => None,
        }
    }

    pub fn set(&self) -> Option<&T> {
        match self {
            Self::Set(set) | Self::RiseAndSet { set, .. } => Some(set),
            _ => None,
        }
    }

    pub fn is_always_up(&self) -> bool {
        matches!(self, Self::AlwaysUp)
    }

    pub fn is_always_down(&self) -> bool {
        matches!(self, Self::AlwaysDown)
    }

    /// Convert every contained value, stopping at the first error.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<MoonDay<U>, E> {
        Ok(match self {
            Self::Rise(rise) => MoonDay::Rise(f(rise)?),
            Self::Set(set) => MoonDay::Set(f(set)?),
            Self::RiseAndSet { rise, set } => MoonDay::RiseAndSet {
                rise: f(rise)?,
                set: f(set)?,
            },
            Self::AlwaysUp => MoonDay::AlwaysUp,
            Self::AlwaysDown => MoonDay::AlwaysDown,
        })
    }
}

impl<Tz: TimeZone> MoonDay<DateTime<Tz>> {
    /// The same instants expressed in another time zone.
    pub fn with_timezone<Tz2: TimeZone>(&self, tz: &Tz2) -> MoonDay<DateTime<Tz2>> {
        match self {
            Self::Rise(rise) => MoonDay::Rise(rise.with_timezone(tz)),
            Self::Set(set) => MoonDay::Set(set.with_timezone(tz)),
            Self::RiseAndSet { rise, set } => MoonDay::RiseAndSet {
                rise: rise.with_timezone(tz),
                set: set.with_timezone(tz),
            },
            Self::AlwaysUp => MoonDay::AlwaysUp,
            Self::AlwaysDown => MoonDay::AlwaysDown,
        }
    }
}
