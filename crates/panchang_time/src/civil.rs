//! Civil date-time ↔ Julian Day (UT) conversion.
//!
//! Civil moments are `chrono::DateTime<FixedOffset>`; UT is treated as
//! UTC (leap seconds are ignored). Conversions are exact to the
//! millisecond in both directions.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// Naive formats accepted by [`parse_civil`] when no offset is given.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// A point in time as a Julian Day in UT.
///
/// Ordered, `Copy`, and the only time coordinate the calculation layers see.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Moment(f64);

impl Moment {
    /// Wrap a Julian Day (UT).
    pub const fn from_jd_ut(jd_ut: f64) -> Self {
        Self(jd_ut)
    }

    /// Moment of a civil date-time.
    pub fn from_civil(dt: &DateTime<FixedOffset>) -> Self {
        Self(to_julian_day(dt))
    }

    /// Julian Day (UT).
    pub const fn jd_ut(self) -> f64 {
        self.0
    }

    /// Civil rendering in the given offset.
    pub fn to_civil(self, offset: FixedOffset) -> Result<DateTime<FixedOffset>, TimeError> {
        to_civil(self.0, offset)
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }
}

/// Julian Day (UT) of a civil date-time.
pub fn to_julian_day(dt: &DateTime<FixedOffset>) -> f64 {
    UNIX_EPOCH_JD + dt.timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// Civil date-time of a Julian Day (UT) in the given offset.
pub fn to_civil(jd_ut: f64, offset: FixedOffset) -> Result<DateTime<FixedOffset>, TimeError> {
    if !jd_ut.is_finite() {
        return Err(TimeError::Unrepresentable { jd: jd_ut });
    }
    let millis = ((jd_ut - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(TimeError::Unrepresentable { jd: jd_ut });
    }
    let utc: DateTime<Utc> = DateTime::from_timestamp_millis(millis as i64)
        .ok_or(TimeError::Unrepresentable { jd: jd_ut })?;
    Ok(utc.with_timezone(&offset))
}

/// Fixed offset from whole minutes east of UTC.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, TimeError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(TimeError::InvalidOffset { minutes })
}

/// Civil calendar date containing a Julian Day in the given offset.
pub fn civil_date_at(jd_ut: f64, offset: FixedOffset) -> Result<NaiveDate, TimeError> {
    Ok(to_civil(jd_ut, offset)?.date_naive())
}

/// Weekday of a civil date, Sunday = 0 … Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Julian Day (UT) of local midnight starting `date` in `offset`.
pub fn local_midnight_jd(date: NaiveDate, offset: FixedOffset) -> Result<f64, TimeError> {
    let midnight = date.and_hms_opt(0, 0, 0).ok_or(TimeError::InvalidDate {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })?;
    let local = offset
        .from_local_datetime(&midnight)
        .single()
        .ok_or(TimeError::InvalidDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })?;
    Ok(to_julian_day(&local))
}

/// Parse a civil date-time.
///
/// Accepts RFC 3339 with an explicit offset (`2025-11-25T06:00:00+05:30`);
/// a naive date-time (`2025-11-25T06:00:00`, `2025-11-25T06:00`) or a bare
/// date (`2025-11-25`, read as local midnight) is placed in
/// `default_offset`.
pub fn parse_civil(
    input: &str,
    default_offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, TimeError> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            TimeError::parse(input, "expected RFC 3339, YYYY-MM-DDThh:mm[:ss] or YYYY-MM-DD")
        })?;
    default_offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| TimeError::parse(input, "ambiguous local time"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ist() -> FixedOffset {
        offset_from_minutes(330).unwrap()
    }

    #[test]
    fn unix_epoch() {
        let dt = DateTime::parse_from_rfc3339("1970-01-01T00:00:00Z").unwrap();
        assert_eq!(to_julian_day(&dt), UNIX_EPOCH_JD);
    }

    #[test]
    fn ist_midnight_is_previous_utc_evening() {
        let dt = parse_civil("2025-11-25", ist()).unwrap();
        let jd = to_julian_day(&dt);
        // 2025-11-24T18:30Z
        assert!((jd - (2_461_004.5 - 5.5 / 24.0)).abs() < 1e-8, "jd = {jd}");
    }

    #[test]
    fn explicit_offset_wins_over_default() {
        let dt = parse_civil("2025-11-25T00:00:00Z", ist()).unwrap();
        assert_eq!(to_julian_day(&dt), 2_461_004.5);
    }

    #[test]
    fn round_trip_within_millisecond() {
        let dt = parse_civil("2024-03-20T06:12:48.250+05:30", ist()).unwrap();
        let back = to_civil(to_julian_day(&dt), ist()).unwrap();
        assert_eq!(back, dt);
    }

    #[test]
    fn non_finite_jd_rejected() {
        assert!(matches!(
            to_civil(f64::NAN, ist()),
            Err(TimeError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn offset_out_of_range() {
        assert_eq!(
            offset_from_minutes(24 * 60),
            Err(TimeError::InvalidOffset { minutes: 1440 })
        );
    }

    #[test]
    fn garbage_input_is_parse_error() {
        assert!(matches!(
            parse_civil("25/11/2025", ist()),
            Err(TimeError::Parse { .. })
        ));
    }

    #[test]
    fn weekday_of_known_date() {
        // 2025-11-25 is a Tuesday
        let d = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
        assert_eq!(weekday_index(d), 2);
    }

    #[test]
    fn civil_date_follows_offset() {
        // 2025-11-24T20:00Z is already the 25th in IST
        let jd = 2_461_004.5 - 4.0 / 24.0;
        let d = civil_date_at(jd, ist()).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 11, 25).unwrap());
        let utc = offset_from_minutes(0).unwrap();
        assert_eq!(
            civil_date_at(jd, utc).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 24).unwrap()
        );
    }

    #[test]
    fn moment_orders_by_jd() {
        let a = Moment::from_jd_ut(2_461_004.5);
        let b = a.add_days(0.25);
        assert!(a < b);
        assert_eq!(b.jd_ut(), 2_461_004.75);
    }
}
