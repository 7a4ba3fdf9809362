//! Types for panchang results.

use chrono::{DateTime, FixedOffset, NaiveDate};
#[cfg(feature = "serde")]
use serde::Serialize;

use panchang_core::AyanamshaSystem;
use panchang_time::Moment;
use panchang_vedic_base::{
    GeoPosition, Karana, Masa, MuhurtaWindows, Nakshatra, Paksha, Rashi, SunEvents, Tithi, Vaar,
    VedicError, Yoga,
};

/// Tithi (lunar day) with its boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TithiValue {
    pub tithi: Tithi,
    /// 1-based tithi index (1..=30).
    pub index: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Elapsed fraction at the request moment [0, 1).
    pub fraction: f64,
    pub start: Moment,
    pub end: Moment,
}

/// Moon's nakshatra with its boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NakshatraValue {
    pub nakshatra: Nakshatra,
    /// 1-based index (1=Ashwini .. 27=Revati).
    pub index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    pub fraction: f64,
    pub start: Moment,
    pub end: Moment,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct YogaValue {
    pub yoga: Yoga,
    /// 1-based index (1..=27).
    pub index: u8,
    pub fraction: f64,
    pub start: Moment,
    pub end: Moment,
}

/// Karana (half-tithi) with its boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct KaranaValue {
    pub karana: Karana,
    /// 1-based half-tithi index within the synodic month (1..=60).
    pub index: u8,
    pub fraction: f64,
    pub start: Moment,
    pub end: Moment,
}

/// Sun's sidereal sign; `start`/`end` are the sankrantis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RashiValue {
    pub rashi: Rashi,
    /// 1-based index (1=Mesha .. 12=Meena).
    pub index: u8,
    pub fraction: f64,
    pub degrees_in_rashi: f64,
    pub start: Moment,
    pub end: Moment,
}

/// Masa (lunar month, Amanta) classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MasaValue {
    pub masa: Masa,
    /// Whether this is an adhika (intercalary) month.
    pub adhika: bool,
    /// Opening new moon.
    pub start: Moment,
    /// Closing new moon.
    pub end: Moment,
}

/// Why a result carries no sunrise/sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SunAbsence {
    /// Polar night.
    NoSunrise,
    /// Midnight sun.
    NoSunset,
}

impl SunAbsence {
    pub(crate) fn from_error(err: &VedicError) -> Option<Self> {
        match err {
            VedicError::NoSunrise { .. } => Some(Self::NoSunrise),
            VedicError::NoSunset { .. } => Some(Self::NoSunset),
            _ => None,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::NoSunrise => "sun does not rise (polar night)",
            Self::NoSunset => "sun does not set (midnight sun)",
        }
    }
}

/// Full panchang for one moment and place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PanchangResult {
    pub moment: Moment,
    /// The moment rendered in the configured UTC offset.
    pub civil: DateTime<FixedOffset>,
    /// Civil date at the configured offset; sunrise, sunset and vaar
    /// belong to this date.
    pub date: NaiveDate,
    pub utc_offset_minutes: i32,
    pub vaar: Vaar,
    pub location: GeoPosition,
    pub ayanamsha_system: AyanamshaSystem,
    pub ayanamsa_deg: f64,
    pub sun_sidereal_deg: f64,
    pub moon_sidereal_deg: f64,
    pub tithi: TithiValue,
    pub nakshatra: NakshatraValue,
    pub yoga: YogaValue,
    pub karana: KaranaValue,
    pub rashi: RashiValue,
    /// Present when `include_masa` is set.
    pub masa: Option<MasaValue>,
    pub sun_events: Option<SunEvents>,
    pub muhurta: Option<MuhurtaWindows>,
    /// Set exactly when `sun_events` is `None`.
    pub sun_absence: Option<SunAbsence>,
}
