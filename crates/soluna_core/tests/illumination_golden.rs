//! Moon illumination against published phase instants (January/February 2024).
//!
//! The model is good to a few percent in fraction and a few hours in phase.

use soluna_core::{LunarPhaseName, moon_illumination};
use soluna_time::{J2000_JD, millis_to_julian_day};

fn days(ms: i64) -> f64 {
    millis_to_julian_day(ms) - J2000_JD
}

/// New Moon 2024-01-11 11:57 UTC
#[test]
fn new_moon_is_dark() {
    let ill = moon_illumination(days(1_704_974_220_000));
    assert!(ill.fraction < 0.01, "fraction {}", ill.fraction);
    assert!(ill.phase < 0.03, "phase {}", ill.phase);
    assert_eq!(ill.phase_name(), LunarPhaseName::NewMoon);
}

/// First quarter 2024-01-18 03:52 UTC
#[test]
fn first_quarter_is_half_lit() {
    let ill = moon_illumination(days(1_705_549_920_000));
    assert!((ill.fraction - 0.5).abs() < 0.03, "fraction {}", ill.fraction);
    assert!((ill.phase - 0.25).abs() < 0.01, "phase {}", ill.phase);
    assert_eq!(ill.phase_name(), LunarPhaseName::FirstQuarter);
}

/// Full Moon 2024-01-25 17:54 UTC
#[test]
fn full_moon_is_lit() {
    let ill = moon_illumination(days(1_706_205_240_000));
    assert!(ill.fraction > 0.99, "fraction {}", ill.fraction);
    assert!((ill.phase - 0.5).abs() < 0.03, "phase {}", ill.phase);
    assert_eq!(ill.phase_name(), LunarPhaseName::FullMoon);
}

/// Last quarter 2024-02-02 23:18 UTC
#[test]
fn last_quarter_is_waning() {
    let ill = moon_illumination(days(1_706_915_880_000));
    assert!((ill.fraction - 0.5).abs() < 0.03, "fraction {}", ill.fraction);
    assert!((ill.phase - 0.75).abs() < 0.01, "phase {}", ill.phase);
    assert!(ill.angle > 0.0, "waning limb angle {}", ill.angle);
}

#[test]
fn waxing_fraction_grows() {
    let start = days(1_704_974_220_000);
    let mut prev = moon_illumination(start).fraction;
    for step in 1..=26 {
        let f = moon_illumination(start + f64::from(step) * 0.5).fraction;
        assert!(f > prev, "step {step}: {f} <= {prev}");
        prev = f;
    }
}
