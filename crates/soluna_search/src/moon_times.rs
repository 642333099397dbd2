//! Moon rise/set for a calendar day.
//!
//! The Moon moves too fast for a single transit approximation, so the day is
//! scanned instead. Altitude is sampled every hour; each 2-hour window
//! `[i-1, i+1]` gets the parabola through its three samples, and the
//! parabola's roots inside the window are horizon crossings. The first
//! window whose start is below the horizon and which has one root is a rise;
//! above the horizon, a set. Two roots in one window are ordered by the
//! sign of the vertex.

use std::ops::ControlFlow;

use chrono::{DateTime, TimeZone};
use soluna_core::{GeoLocation, moon_position};
use soluna_time::{add_hours, start_of_day, to_days_since_j2000};

use crate::error::SearchError;
use crate::moon_times_types::{MoonDay, MoonTimes, MoonTimesConfig, WindowEvent};

/// Parabola `y(x) = a·x² + b·x + c` through `(-1, h0)`, `(0, h1)`, `(1, h2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFit {
    pub a: f64,
    pub b: f64,
    /// Value at `x = 0`, the middle sample.
    pub c: f64,
    /// Abscissa of the vertex, `-b / 2a`.
    pub vertex_x: f64,
    /// Value at the vertex.
    pub vertex_y: f64,
    /// `b² - 4ac`.
    pub discriminant: f64,
}

/// Roots of a window's parabola that fall inside `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowRoots {
    None,
    /// A single in-window root.
    One(f64),
    /// Two in-window roots, ascending.
    Two(f64, f64),
}

impl QuadraticFit {
    pub fn through(h0: f64, h1: f64, h2: f64) -> Self {
        let a = (h0 + h2) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;
        let vertex_x = -b / (2.0 * a);
        Self {
            a,
            b,
            c: h1,
            vertex_x,
            vertex_y: (a * vertex_x + b) * vertex_x + h1,
            discriminant: b * b - 4.0 * a * h1,
        }
    }

    /// In-window roots.
    ///
    /// When only the upper root is inside, it is reported as the single root
    /// even though the lower root is the smaller one.
    pub fn roots(&self) -> WindowRoots {
        if self.discriminant.is_nan() || self.discriminant < 0.0 {
            return WindowRoots::None;
        }
        let dx = self.discriminant.sqrt() / (self.a.abs() * 2.0);
        let mut x1 = self.vertex_x - dx;
        let x2 = self.vertex_x + dx;
        let count = u8::from(x1.abs() <= 1.0) + u8::from(x2.abs() <= 1.0);
        if x1 < -1.0 {
            x1 = x2;
        }
        match count {
            1 => WindowRoots::One(x1),
            2 => WindowRoots::Two(x1, x2),
            _ => WindowRoots::None,
        }
    }

    /// Crossings in the window centred on `hour`, whose first sample is `h0`.
    pub fn window_event(&self, hour: f64, h0: f64) -> WindowEvent {
        match self.roots() {
            WindowRoots::None => WindowEvent::NoEvent,
            WindowRoots::One(x) if h0 < 0.0 => WindowEvent::Rise(hour + x),
            WindowRoots::One(x) => WindowEvent::Set(hour + x),
            WindowRoots::Two(x1, x2) if self.vertex_y < 0.0 => WindowEvent::Both {
                rise: hour + x2,
                set: hour + x1,
            },
            WindowRoots::Two(x1, x2) => WindowEvent::Both {
                rise: hour + x1,
                set: hour + x2,
            },
        }
    }
}

/// Running state of the scan.
#[derive(Debug, Clone, Copy)]
struct Scan {
    /// Altitude at the start of the next window.
    h0: f64,
    rise: Option<f64>,
    set: Option<f64>,
    /// Vertex value of the last fitted window.
    vertex_y: f64,
}

impl Scan {
    fn absorb(mut self, event: WindowEvent) -> Self {
        match event {
            WindowEvent::NoEvent => {}
            WindowEvent::Rise(rise) => self.rise = Some(rise),
            WindowEvent::Set(set) => self.set = Some(set),
            WindowEvent::Both { rise, set } => {
                self.rise = Some(rise);
                self.set = Some(set);
            }
        }
        self
    }
}

/// Rise/set hour offsets from a day's altitude curve.
///
/// `altitude_at(hours)` returns the horizon-corrected altitude (radians,
/// positive above) `hours` after midnight; it is called for 0, 1, …, 24.
pub fn moon_crossing_hours(altitude_at: impl Fn(f64) -> f64) -> MoonDay<f64> {
    let start = Scan {
        h0: altitude_at(0.0),
        rise: None,
        set: None,
        vertex_y: f64::NAN,
    };

    let scan = (1..=23u32).step_by(2).try_fold(start, |scan, i| {
        let hour = f64::from(i);
        let h1 = altitude_at(hour);
        let h2 = altitude_at(hour + 1.0);
        let fit = QuadraticFit::through(scan.h0, h1, h2);
        let event = fit.window_event(hour, scan.h0);
        log::trace!("moon window {hour}h: {fit:?} -> {event:?}");

        let scan = Scan {
            h0: h2,
            vertex_y: fit.vertex_y,
            ..scan.absorb(event)
        };
        if scan.rise.is_some() && scan.set.is_some() {
            ControlFlow::Break(scan)
        } else {
            ControlFlow::Continue(scan)
        }
    });
    let (ControlFlow::Continue(scan) | ControlFlow::Break(scan)) = scan;

    match (scan.rise, scan.set) {
        (Some(rise), Some(set)) => MoonDay::RiseAndSet { rise, set },
        (Some(rise), None) => MoonDay::Rise(rise),
        (None, Some(set)) => MoonDay::Set(set),
        (None, None) if scan.vertex_y > 0.0 => MoonDay::AlwaysUp,
        (None, None) => MoonDay::AlwaysDown,
    }
}

/// Moon rise and set on the calendar day of `day`, in `day`'s time zone.
///
/// The scan starts at local midnight (see [`start_of_day`]); pass a
/// `DateTime<Utc>` to scan the UTC day.
///
/// # Returns
/// * `Rise`/`Set`/`RiseAndSet` with instants in `day`'s time zone
/// * `AlwaysUp`/`AlwaysDown` when the Moon does not cross the horizon that day
pub fn moon_times<Tz: TimeZone>(
    day: &DateTime<Tz>,
    location: &GeoLocation,
    config: &MoonTimesConfig,
) -> Result<MoonTimes<Tz>, SearchError> {
    let midnight = start_of_day(day);
    let days0 = to_days_since_j2000(&midnight);
    let hc = config.horizon_correction_deg.to_radians();

    let offsets =
        moon_crossing_hours(|hours| moon_position(days0 + hours / 24.0, location).altitude - hc);
    if offsets.is_always_up() || offsets.is_always_down() {
        log::debug!(
            "moon does not cross the horizon on {} at latitude {}°: {offsets:?}",
            midnight.date_naive(),
            location.latitude_deg
        );
    }

    Ok(offsets.try_map(|hours| add_hours(&midnight, hours))?)
}
