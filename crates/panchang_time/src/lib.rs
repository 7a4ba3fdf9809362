//! Time conversions for the panchang engine.
//!
//! This crate provides:
//! - Julian Day ↔ Gregorian calendar conversion
//! - Civil date-time (fixed UTC offset) ↔ Julian Day (UT), via `chrono`
//! - ΔT and the UT → TT step used by the ephemeris
//! - Greenwich mean/apparent sidereal time

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    Moment, civil_date_at, local_midnight_jd, offset_from_minutes, parse_civil, to_civil,
    to_julian_day, weekday_index,
};
pub use delta_t::{delta_t_seconds, ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
    julian_centuries,
};
pub use sidereal::{SIDEREAL_RATE, gast_rad, gmst_rad, local_sidereal_time_rad};
