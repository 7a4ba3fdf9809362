//! Sunrise/sunset computation.
//!
//! Iterative algorithm based on standard spherical astronomy formulas
//! (Meeus ch. 15, Montenbruck & Pfleger). Starting from approximate local
//! noon, the transit is located from the Sun's hour angle, the semi-diurnal
//! arc gives a first estimate, and each iteration re-reads the Sun's
//! apparent RA/Dec at the estimate and corrects by the hour-angle residual.

use std::f64::consts::{PI, TAU};

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use panchang_core::Ephemeris;
use panchang_time::{Moment, SIDEREAL_RATE, calendar_to_jd};

use crate::error::VedicError;
use crate::riseset_types::{GeoPosition, RiseSetConfig, RiseSetEvent, SunEvents};

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Hour angle advance in radians per day.
const HOUR_ANGLE_RATE: f64 = TAU * SIDEREAL_RATE;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Wrap an angle to [-pi, pi].
fn wrap_pi(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r > PI { r - TAU } else { r }
}

/// Hour angle of the Sun in radians, [-pi, pi].
fn sun_hour_angle<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    geo: &GeoPosition,
    jd_ut: f64,
    ra_rad: f64,
) -> Result<f64, VedicError> {
    let gast = ephemeris.sidereal_time_rad(jd_ut)?;
    Ok(wrap_pi(gast + geo.longitude_rad() - ra_rad))
}

/// Semi-diurnal arc for the target altitude, or the polar failure.
fn semi_diurnal_arc(
    phi: f64,
    dec: f64,
    h0_deg: f64,
    jd_noon: f64,
) -> Result<f64, VedicError> {
    let cos_h = (h0_deg.to_radians().sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h > 1.0 {
        return Err(VedicError::NoSunrise { jd_noon });
    }
    if cos_h < -1.0 {
        return Err(VedicError::NoSunset { jd_noon });
    }
    Ok(cos_h.acos())
}

/// Compute a single rise or set of the Sun.
///
/// `jd_ut_noon` is approximate local noon on the desired day; use
/// [`approximate_local_noon_jd`]. Returns the event as a Julian Day (UT).
///
/// Fails with [`VedicError::NoSunrise`] when the Sun stays below the target
/// altitude all day (polar night) and [`VedicError::NoSunset`] when it stays
/// above (midnight sun).
pub fn compute_rise_set<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    geo: &GeoPosition,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<f64, VedicError> {
    let phi = geo.latitude_rad();

    let sun = ephemeris.sun_equatorial(jd_ut_noon)?;
    let h0_deg = config.target_altitude_deg(sun.distance_au, geo.elevation_m);
    let arc = semi_diurnal_arc(phi, sun.dec_rad, h0_deg, jd_ut_noon)?;

    // Transit: HA = 0
    let ha_noon = sun_hour_angle(ephemeris, geo, jd_ut_noon, sun.ra_rad)?;
    let jd_transit = jd_ut_noon - ha_noon / HOUR_ANGLE_RATE;

    let arc_days = arc / HOUR_ANGLE_RATE;
    let mut jd_event = if event.is_rising() {
        jd_transit - arc_days
    } else {
        jd_transit + arc_days
    };

    for iteration in 0..MAX_ITERATIONS {
        let sun_i = ephemeris.sun_equatorial(jd_event)?;
        let h0_i = config.target_altitude_deg(sun_i.distance_au, geo.elevation_m);
        let arc_i = semi_diurnal_arc(phi, sun_i.dec_rad, h0_i, jd_ut_noon)?;
        let ha_target = if event.is_rising() { -arc_i } else { arc_i };
        let ha_actual = sun_hour_angle(ephemeris, geo, jd_event, sun_i.ra_rad)?;

        let correction = wrap_pi(ha_target - ha_actual) / HOUR_ANGLE_RATE;
        jd_event += correction;
        trace!(?event, iteration, jd_event, correction, "rise/set refinement");

        if correction.abs() < CONVERGENCE_DAYS {
            return Ok(jd_event);
        }
    }

    Err(VedicError::NoConvergence("sunrise/sunset refinement"))
}

/// Sunrise and sunset for a civil date at an observer.
///
/// The day is anchored on local apparent noon of `date`, so the pair
/// belongs to the same solar day whatever the observer's time zone.
pub fn sun_events<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    date: NaiveDate,
    geo: &GeoPosition,
    config: &RiseSetConfig,
) -> Result<SunEvents, VedicError> {
    let jd_0h = calendar_to_jd(date.year(), date.month(), f64::from(date.day()));
    let jd_noon = approximate_local_noon_jd(jd_0h, geo.longitude_deg);

    let sunrise = compute_rise_set(ephemeris, geo, RiseSetEvent::Sunrise, jd_noon, config)?;
    let sunset = compute_rise_set(ephemeris, geo, RiseSetEvent::Sunset, jd_noon, config)?;
    if sunset <= sunrise {
        return Err(VedicError::InvalidInterval { sunrise, sunset });
    }
    Ok(SunEvents {
        sunrise: Moment::from_jd_ut(sunrise),
        sunset: Moment::from_jd_ut(sunset),
    })
}
