//! Moon illumination: lit fraction, phase and bright-limb angle.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use soluna_frames::EquatorialCoords;

use crate::moon::{MoonCoords, moon_coordinates};
use crate::sun::sun_coordinates;

/// Mean Earth–Sun distance in km used by the phase-angle formula.
pub const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Illuminated state of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disk, in [0, 1].
    pub fraction: f64,
    /// Phase in [0, 1): 0 new, 0.25 first quarter, 0.5 full, 0.75 last quarter.
    pub phase: f64,
    /// Midpoint angle of the bright limb in radians (from north, eastward).
    pub angle: f64,
}

impl MoonIllumination {
    /// Named phase for display.
    pub fn phase_name(&self) -> LunarPhaseName {
        LunarPhaseName::from_phase(self.phase)
    }
}

/// The eight conventional named lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl LunarPhaseName {
    const ALL: [Self; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Name for a phase value; each name covers 1/8 of the cycle centred on `k/8`.
    pub fn from_phase(phase: f64) -> Self {
        let index = (phase * 8.0).round().rem_euclid(8.0) as usize;
        Self::ALL[index % 8]
    }
}

/// Illumination from Sun and Moon coordinates at the same instant.
pub fn illumination_from_coords(sun: &EquatorialCoords, moon: &MoonCoords) -> MoonIllumination {
    let d_ra = sun.right_ascension - moon.right_ascension;
    let (sin_ds, cos_ds) = sun.declination.sin_cos();
    let (sin_dm, cos_dm) = moon.declination.sin_cos();

    // Geocentric elongation.
    let phi = (sin_ds * sin_dm + cos_ds * cos_dm * d_ra.cos()).acos();
    // Selenocentric Sun–Earth angle.
    let inc = (SUN_DISTANCE_KM * phi.sin()).atan2(moon.distance_km - SUN_DISTANCE_KM * phi.cos());
    let angle = (cos_ds * d_ra.sin()).atan2(sin_ds * cos_dm - cos_ds * sin_dm * d_ra.cos());
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };

    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * sign / PI,
        angle,
    }
}

/// Moon illumination `days` after J2000.0.
pub fn moon_illumination(days: f64) -> MoonIllumination {
    illumination_from_coords(&sun_coordinates(days), &moon_coordinates(days))
}
