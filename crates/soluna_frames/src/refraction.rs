//! Empirical atmospheric refraction near the horizon.

use serde::{Deserialize, Serialize};

/// Marker emitted when a negative altitude was clamped to the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefractionClamped {
    /// The altitude (radians) that was passed in before clamping.
    pub altitude_rad: f64,
}

/// Refraction correction plus the clamp notice, if any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Refraction {
    /// Amount (radians) to add to the geometric altitude.
    pub correction_rad: f64,
    /// Set when the input was below the horizon and evaluated at `h = 0`.
    pub clamped: Option<RefractionClamped>,
}

/// Atmospheric refraction for a geometric altitude `h` in radians.
///
/// `R = 0.0002967 / tan(h + 0.00312536 / (h + 0.08901179))`
///
/// The formula is singular a little below the horizon, so negative altitudes
/// are evaluated at `h = 0` and reported through [`Refraction::clamped`].
pub fn astronomical_refraction(h: f64) -> Refraction {
    let (h, clamped) = if h < 0.0 {
        log::debug!("clipping refraction altitude {h} rad to 0");
        (0.0, Some(RefractionClamped { altitude_rad: h }))
    } else {
        (h, None)
    };
    Refraction {
        correction_rad: 0.0002967 / (h + 0.00312536 / (h + 0.08901179)).tan(),
        clamped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ones() {
        let r = astronomical_refraction(1.0);
        assert!((r.correction_rad - 0.00018930852787807327).abs() < 1e-15);
        assert!(r.clamped.is_none());
    }

    #[test]
    fn negative_altitude_clamps_to_horizon() {
        let _ = env_logger::builder().is_test(true).try_init();
        let r = astronomical_refraction(-1.0);
        assert!((r.correction_rad - 0.008446689093277518).abs() < 1e-15);
        assert_eq!(r.clamped, Some(RefractionClamped { altitude_rad: -1.0 }));
    }

    #[test]
    fn horizon_is_not_clamped() {
        let r = astronomical_refraction(0.0);
        assert!(r.clamped.is_none());
        assert_eq!(r.correction_rad, astronomical_refraction(-0.3).correction_rad);
    }

    #[test]
    fn about_half_a_degree_at_horizon() {
        let deg = astronomical_refraction(0.0).correction_rad.to_degrees();
        assert!((deg - 0.48).abs() < 0.05, "horizon refraction {deg}°");
    }

    #[test]
    fn decreases_with_altitude() {
        let low = astronomical_refraction(0.05).correction_rad;
        let high = astronomical_refraction(0.5).correction_rad;
        assert!(low > high);
    }
}
