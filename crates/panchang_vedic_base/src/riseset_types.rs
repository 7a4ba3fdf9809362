//! Types for sunrise/sunset calculations.
//!
//! Observer position, the disc convention, configuration and the resulting
//! pair of events.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use panchang_time::Moment;

use crate::error::VedicError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Equatorial horizontal parallax of the Sun at 1 AU, arcseconds.
const SOLAR_PARALLAX_ARCSEC: f64 = 8.794;

/// Solar angular semidiameter at 1 AU, arcseconds.
const SOLAR_SEMIDIAMETER_ARCSEC: f64 = 959.63;

/// Observer on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Elevation above mean sea level in meters.
    pub elevation_m: f64,
}

impl GeoPosition {
    /// Validated observer position.
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        if !elevation_m.is_finite() {
            return Err(VedicError::InvalidLocation("elevation must be finite"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        })
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Which point of the solar disc defines rise and set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SunLimb {
    /// Centre of the disc touches the refracted horizon.
    #[default]
    Center,
    /// Upper limb touches the refracted horizon (almanac convention).
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiseSetEvent {
    Sunrise,
    Sunset,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Disc convention. Default: centre.
    pub limb: SunLimb,
    /// Whether to apply geometric dip for observer elevation.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            limb: SunLimb::Center,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Same parameters with the upper-limb convention.
    pub fn upper_limb(self) -> Self {
        Self {
            limb: SunLimb::Upper,
            ..self
        }
    }

    /// Geocentric altitude of the Sun's centre at the event, in degrees.
    ///
    /// `h0 = -refraction + parallax - semidiameter (upper limb) - dip`
    pub fn target_altitude_deg(&self, distance_au: f64, elevation_m: f64) -> f64 {
        let r = if distance_au > 0.0 { distance_au } else { 1.0 };
        let mut h0 = -self.refraction_arcmin / 60.0 + SOLAR_PARALLAX_ARCSEC / 3600.0 / r;
        if self.limb == SunLimb::Upper {
            h0 -= SOLAR_SEMIDIAMETER_ARCSEC / 3600.0 / r;
        }
        if self.altitude_correction && elevation_m > 0.0 {
            h0 -= (2.0 * elevation_m / EARTH_RADIUS_M).sqrt().to_degrees();
        }
        h0
    }
}

/// Sunrise and sunset of one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunEvents {
    pub sunrise: Moment,
    pub sunset: Moment,
}

impl SunEvents {
    /// Daylight length in days.
    pub fn day_length_days(&self) -> f64 {
        self.sunset.jd_ut() - self.sunrise.jd_ut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_latitude() {
        assert!(matches!(
            GeoPosition::new(91.0, 0.0, 0.0),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(GeoPosition::new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn rejects_bad_longitude() {
        assert!(GeoPosition::new(0.0, -180.5, 0.0).is_err());
        assert!(GeoPosition::new(0.0, 180.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_infinite_elevation() {
        assert!(GeoPosition::new(10.0, 78.0, f64::INFINITY).is_err());
    }

    #[test]
    fn default_config() {
        let c = RiseSetConfig::default();
        assert_eq!(c.refraction_arcmin, 34.0);
        assert_eq!(c.limb, SunLimb::Center);
        assert!(c.altitude_correction);
    }

    #[test]
    fn centre_altitude_sea_level() {
        let h0 = RiseSetConfig::default().target_altitude_deg(1.0, 0.0);
        let expected = -34.0 / 60.0 + 8.794 / 3600.0;
        assert!((h0 - expected).abs() < 1e-12, "h0 = {h0}");
    }

    #[test]
    fn upper_limb_is_lower() {
        let c = RiseSetConfig::default();
        let centre = c.target_altitude_deg(1.0, 0.0);
        let upper = c.upper_limb().target_altitude_deg(1.0, 0.0);
        // about 16 arcminutes
        assert!(((centre - upper) * 60.0 - 15.99).abs() < 0.01);
    }

    #[test]
    fn elevation_adds_dip() {
        let c = RiseSetConfig::default();
        let sea = c.target_altitude_deg(1.0, 0.0);
        let hill = c.target_altitude_deg(1.0, 100.0);
        // sqrt(200/6371000) rad = 0.321 deg
        assert!(((sea - hill) - 0.321).abs() < 0.001);
    }

    #[test]
    fn dip_can_be_disabled() {
        let c = RiseSetConfig {
            altitude_correction: false,
            ..RiseSetConfig::default()
        };
        assert_eq!(c.target_altitude_deg(1.0, 500.0), c.target_altitude_deg(1.0, 0.0));
    }

    #[test]
    fn is_rising_correct() {
        assert!(RiseSetEvent::Sunrise.is_rising());
        assert!(!RiseSetEvent::Sunset.is_rising());
    }
}
