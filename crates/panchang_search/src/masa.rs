//! New-moon search and Amanta masa determination.

use tracing::debug;

use panchang_core::{Body, Ephemeris};
use panchang_time::Moment;
use panchang_vedic_base::{SiderealCalculator, amanta_masa, rashi_from_longitude};

use crate::error::SearchError;
use crate::panchang_types::MasaValue;
use crate::transition::{SearchDirection, TransitionConfig, find_angle_crossing};

/// Elongation grows about 12°/day; one-day steps never skip a new moon.
const NEW_MOON_STEP_DAYS: f64 = 1.0;

/// Nearest new moon (sidereal elongation 0°) from `jd_ut` in `direction`.
///
/// Backward from a moment exactly at conjunction returns that moment.
pub fn find_new_moon<E: Ephemeris>(
    calc: &SiderealCalculator<E>,
    jd_ut: f64,
    direction: SearchDirection,
    config: &TransitionConfig,
) -> Result<f64, SearchError> {
    let elongation = |jd: f64| -> Result<f64, SearchError> { Ok(calc.elongation(jd)?) };
    find_angle_crossing(jd_ut, elongation, 0.0, direction, NEW_MOON_STEP_DAYS, config)
        .map_err(|e| e.labelled("new moon"))
}

/// Sun's sidereal rashi number (1..=12) at `jd_ut`.
fn sun_rashi_number<E: Ephemeris>(
    calc: &SiderealCalculator<E>,
    jd_ut: f64,
) -> Result<u8, SearchError> {
    let sun = calc.sidereal_longitude(jd_ut, Body::Sun)?;
    Ok(rashi_from_longitude(sun).index)
}

/// Amanta lunar month containing `jd_ut`.
///
/// Month boundaries are the bracketing new moons. The month is named from
/// the Sun's rashi at the closing new moon; with no rashi change between
/// the two it is adhika. Kshaya months are not detected.
pub fn masa_for_moment<E: Ephemeris>(
    calc: &SiderealCalculator<E>,
    jd_ut: f64,
    config: &TransitionConfig,
) -> Result<MasaValue, SearchError> {
    let start = find_new_moon(calc, jd_ut, SearchDirection::Backward, config)?;
    let mut end = find_new_moon(calc, jd_ut, SearchDirection::Forward, config)?;
    if end <= start {
        // jd_ut sits on the conjunction itself: the month starts here
        end = find_new_moon(calc, start + NEW_MOON_STEP_DAYS, SearchDirection::Forward, config)?;
    }

    let rashi_at_start = sun_rashi_number(calc, start)?;
    let rashi_at_end = sun_rashi_number(calc, end)?;
    let (masa, adhika) = amanta_masa(rashi_at_start, rashi_at_end);
    debug!(
        masa = masa.name(),
        adhika, start, end, rashi_at_start, rashi_at_end, "masa"
    );

    Ok(MasaValue {
        masa,
        adhika,
        start: Moment::from_jd_ut(start),
        end: Moment::from_jd_ut(end),
    })
}
