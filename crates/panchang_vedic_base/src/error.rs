//! Error types for Vedic calculations.

use panchang_core::EphemerisError;
use panchang_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris provider.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// Error from time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// The Sun does not reach the rise altitude on this day (polar night).
    #[error("sun does not rise on the day of JD {jd_noon:.1}")]
    NoSunrise { jd_noon: f64 },
    /// The Sun does not drop to the set altitude on this day (midnight sun).
    #[error("sun does not set on the day of JD {jd_noon:.1}")]
    NoSunset { jd_noon: f64 },
    /// Sunset at or before sunrise.
    #[error("empty daylight interval: sunrise {sunrise} >= sunset {sunset}")]
    InvalidInterval { sunrise: f64, sunset: f64 },
    /// Two inauspicious periods fall on the same segment of a weekday.
    #[error("muhurta table assigns segment {segment} twice on weekday {weekday}")]
    MuhurtaCollision { weekday: u8, segment: u8 },
    /// Iterative algorithm did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}

impl VedicError {
    /// True for the polar-geometry failures of sunrise/sunset.
    pub fn is_polar(&self) -> bool {
        matches!(self, Self::NoSunrise { .. } | Self::NoSunset { .. })
    }
}
