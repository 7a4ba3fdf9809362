//! Panchang assembly: elements with boundaries, masa, sunrise/sunset and
//! muhurta windows for one moment and place.
//!
//! Every function here is a pure function of its inputs. Sunrise, sunset
//! and the weekday belong to the civil date of the moment in the configured
//! UTC offset.

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use panchang_core::Ephemeris;
use panchang_time::Moment;
use panchang_vedic_base::{
    Element, GeoPosition, MuhurtaWindows, SiderealCalculator, SunEvents, Vaar, elements_at_jd,
    muhurta_windows, sun_events,
};

use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::masa::masa_for_moment;
use crate::panchang_types::{
    KaranaValue, NakshatraValue, PanchangResult, RashiValue, SunAbsence, TithiValue, YogaValue,
};
use crate::transition::{TransitionConfig, find_element_start, find_transition};

/// Start and end of the `element` segment with `index` that contains `jd_ut`.
pub fn element_bounds<E: Ephemeris>(
    calc: &SiderealCalculator<E>,
    jd_ut: f64,
    element: Element,
    index: u8,
    config: &TransitionConfig,
) -> Result<(Moment, Moment), SearchError> {
    let angle_fn = |jd: f64| -> Result<f64, SearchError> { Ok(element.angle(&calc.positions(jd)?)) };
    let start = find_element_start(jd_ut, element, &angle_fn, index, config)?;
    let end = find_transition(jd_ut, element, &angle_fn, index, config)?;
    Ok((Moment::from_jd_ut(start), Moment::from_jd_ut(end)))
}

/// Sunrise/sunset and muhurta windows, or the polar reason they are absent.
fn day_events<E: Ephemeris>(
    ephemeris: &E,
    civil: &DateTime<FixedOffset>,
    vaar: Vaar,
    geo: &GeoPosition,
    config: &PanchangConfig,
) -> Result<(Option<SunEvents>, Option<MuhurtaWindows>, Option<SunAbsence>), SearchError> {
    let events = match sun_events(ephemeris, civil.date_naive(), geo, &config.riseset) {
        Ok(events) => events,
        Err(err) => match SunAbsence::from_error(&err) {
            Some(absence) => {
                warn!(
                    date = %civil.date_naive(),
                    latitude = geo.latitude_deg,
                    "{}; sunrise, sunset and muhurta omitted",
                    absence.description()
                );
                return Ok((None, None, Some(absence)));
            }
            None => return Err(err.into()),
        },
    };

    let table = config.muhurta_table();
    for (weekday, segment) in table.collisions() {
        if weekday == vaar.index() {
            warn!(
                vaar = vaar.name(),
                segment, "muhurta table assigns one segment to two periods"
            );
        }
    }
    let muhurta = muhurta_windows(events.sunrise, events.sunset, vaar, &table)?;
    Ok((Some(events), Some(muhurta), None))
}

/// Full panchang for `moment` at `geo`.
///
/// The ayanamsha comes from `ephemeris`; `config.ayanamsha_system` is
/// recorded in the result, so build the ephemeris from the same config
/// (see [`PanchangConfig::ephemeris`]).
///
/// A location without sunrise or sunset on the day is not an error: the
/// result has `sun_events` and `muhurta` set to `None` and `sun_absence`
/// names the reason. Every other failure propagates.
pub fn panchang_for_moment<E: Ephemeris>(
    ephemeris: &E,
    moment: Moment,
    geo: &GeoPosition,
    config: &PanchangConfig,
) -> Result<PanchangResult, SearchError> {
    config.validate()?;
    let geo = GeoPosition::new(geo.latitude_deg, geo.longitude_deg, geo.elevation_m)?;
    let offset = config.utc_offset()?;
    let civil = moment.to_civil(offset)?;
    let vaar = Vaar::from_date(civil.date_naive());
    let jd = moment.jd_ut();

    let calc = SiderealCalculator::new(ephemeris);
    let (positions, snap) = elements_at_jd(&calc, jd)?;
    let tc = &config.transition;

    let (start, end) = element_bounds(&calc, jd, Element::Tithi, snap.tithi.index, tc)?;
    let tithi = TithiValue {
        tithi: snap.tithi.tithi,
        index: snap.tithi.index,
        paksha: snap.tithi.paksha,
        tithi_in_paksha: snap.tithi.tithi_in_paksha,
        fraction: snap.tithi.fraction,
        start,
        end,
    };

    let (start, end) = element_bounds(&calc, jd, Element::Nakshatra, snap.nakshatra.index, tc)?;
    let nakshatra = NakshatraValue {
        nakshatra: snap.nakshatra.nakshatra,
        index: snap.nakshatra.index,
        pada: snap.nakshatra.pada,
        fraction: snap.nakshatra.fraction,
        start,
        end,
    };

    let (start, end) = element_bounds(&calc, jd, Element::Yoga, snap.yoga.index, tc)?;
    let yoga = YogaValue {
        yoga: snap.yoga.yoga,
        index: snap.yoga.index,
        fraction: snap.yoga.fraction,
        start,
        end,
    };

    let (start, end) = element_bounds(&calc, jd, Element::Karana, snap.karana.index, tc)?;
    let karana = KaranaValue {
        karana: snap.karana.karana,
        index: snap.karana.index,
        fraction: snap.karana.fraction,
        start,
        end,
    };

    let (start, end) = element_bounds(&calc, jd, Element::Rashi, snap.rashi.index, tc)?;
    let rashi = RashiValue {
        rashi: snap.rashi.rashi,
        index: snap.rashi.index,
        fraction: snap.rashi.fraction,
        degrees_in_rashi: snap.rashi.degrees_in_rashi,
        start,
        end,
    };

    let masa = if config.include_masa {
        Some(masa_for_moment(&calc, jd, tc)?)
    } else {
        None
    };

    let (sun_events, muhurta, sun_absence) = day_events(ephemeris, &civil, vaar, &geo, config)?;

    debug!(
        jd,
        civil = %civil.to_rfc3339(),
        tithi = tithi.index,
        nakshatra = nakshatra.index,
        yoga = yoga.index,
        karana = karana.index,
        rashi = rashi.index,
        vaar = vaar.name(),
        "panchang"
    );

    Ok(PanchangResult {
        moment,
        civil,
        date: civil.date_naive(),
        utc_offset_minutes: config.utc_offset_minutes,
        vaar,
        location: geo,
        ayanamsha_system: config.ayanamsha_system,
        ayanamsa_deg: positions.ayanamsa_deg,
        sun_sidereal_deg: positions.sun_deg,
        moon_sidereal_deg: positions.moon_deg,
        tithi,
        nakshatra,
        yoga,
        karana,
        rashi,
        masa,
        sun_events,
        muhurta,
        sun_absence,
    })
}

/// Panchang at the configured default location.
pub fn panchang_at_default_location<E: Ephemeris>(
    ephemeris: &E,
    moment: Moment,
    config: &PanchangConfig,
) -> Result<PanchangResult, SearchError> {
    panchang_for_moment(ephemeris, moment, &config.location, config)
}

/// Panchang for a civil date-time; the result is still rendered in the
/// configured offset.
pub fn panchang_for_civil<E: Ephemeris>(
    ephemeris: &E,
    civil: &DateTime<FixedOffset>,
    geo: &GeoPosition,
    config: &PanchangConfig,
) -> Result<PanchangResult, SearchError> {
    panchang_for_moment(ephemeris, Moment::from_civil(civil), geo, config)
}
