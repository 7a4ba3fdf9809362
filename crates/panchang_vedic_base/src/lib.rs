//! Panchang elements, sunrise/sunset and muhurta windows.
//!
//! This crate provides:
//! - Sidereal Sun/Moon longitudes (the single ayanamsha correction point)
//! - Tithi, nakshatra, yoga, karana and rashi from those longitudes
//! - Masa and vaar naming
//! - Sunrise/sunset for an observer
//! - Rahu Kaal, Yamaganda and Gulika windows
//!
//! Nothing here searches in time; element boundaries live in
//! `panchang_search`.

pub mod elements;
pub mod error;
pub mod karana;
pub mod masa;
pub mod muhurta;
pub mod nakshatra;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod sidereal;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use elements::{Element, ElementSnapshot, elements_at, elements_at_jd};
pub use error::VedicError;
pub use karana::{
    KARANA_COUNT, KARANA_SEGMENT_DEG, Karana, KaranaPosition, MOVABLE_KARANAS,
    karana_from_elongation,
};
pub use masa::{ALL_MASAS, Masa, amanta_masa, masa_from_rashi_number};
pub use muhurta::{
    DAY_SEGMENTS, GulikaTable, MuhurtaKind, MuhurtaTable, MuhurtaWindow, MuhurtaWindows,
    muhurta_windows,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_COUNT, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraPosition,
    PADA_SPAN_DEG, nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_COUNT, RASHI_SPAN_DEG, Rashi, RashiPosition, deg_to_dms,
    rashi_from_longitude,
};
pub use riseset::{approximate_local_noon_jd, compute_rise_set, sun_events};
pub use riseset_types::{GeoPosition, RiseSetConfig, RiseSetEvent, SunEvents, SunLimb};
pub use sidereal::{SiderealCalculator, SiderealPositions};
pub use tithi::{
    ALL_TITHIS, Paksha, TITHI_COUNT, TITHI_SEGMENT_DEG, Tithi, TithiPosition,
    tithi_from_elongation,
};
pub use util::{normalize_360, segment_position};
pub use vaar::{ALL_VAARS, Vaar};
pub use yoga::{ALL_YOGAS, YOGA_COUNT, YOGA_SEGMENT_DEG, Yoga, YogaPosition, yoga_from_sum};
