//! Observer location.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Geographic location of an observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Taken modulo 360.
    pub longitude_deg: f64,
    /// Observer height above the horizon plane in meters.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a location without validation.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Create a location, rejecting values the models cannot interpret.
    pub fn try_new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Self, CoreError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(CoreError::InvalidLocation(
                "latitude must be finite and within [-90, 90] degrees",
            ));
        }
        if !longitude_deg.is_finite() {
            return Err(CoreError::InvalidLocation("longitude must be finite"));
        }
        if !altitude_m.is_finite() || altitude_m < 0.0 {
            return Err(CoreError::InvalidLocation(
                "observer height must be finite and non-negative",
            ));
        }
        Ok(Self::new(latitude_deg, longitude_deg, altitude_m))
    }

    /// Latitude `φ` in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians with west positive (`lw` in the hour-angle formulas).
    pub fn west_longitude_rad(&self) -> f64 {
        (-self.longitude_deg).to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radians() {
        let loc = GeoLocation::new(50.5, 30.5, 0.0);
        assert!((loc.latitude_rad() - 50.5_f64.to_radians()).abs() < 1e-15);
        assert!((loc.west_longitude_rad() + 30.5_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn try_new_accepts_poles() {
        assert!(GeoLocation::try_new(90.0, 0.0, 0.0).is_ok());
        assert!(GeoLocation::try_new(-90.0, 540.0, 10.0).is_ok());
    }

    #[test]
    fn try_new_rejects_bad_latitude() {
        let err = GeoLocation::try_new(90.5, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidLocation(_)));
        assert!(GeoLocation::try_new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn try_new_rejects_bad_longitude_and_height() {
        assert!(GeoLocation::try_new(0.0, f64::INFINITY, 0.0).is_err());
        assert!(GeoLocation::try_new(0.0, 0.0, -1.0).is_err());
    }

    #[test]
    fn height_defaults_when_deserialized() {
        let loc: GeoLocation =
            serde_json::from_str(r#"{"latitude_deg": 51.5, "longitude_deg": -0.1}"#).unwrap();
        assert_eq!(loc, GeoLocation::new(51.5, -0.1, 0.0));
    }
}
