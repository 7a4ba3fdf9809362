//! Golden-value integration tests for the panchang pipeline.
//!
//! Reference times come from an independent evaluation of the same
//! analytic theory; civil times are quoted in IST.

use panchang_core::AnalyticEphemeris;
use panchang_search::{
    PanchangConfig, PanchangResult, SearchDirection, SunAbsence, TransitionConfig,
    find_new_moon, masa_for_moment, panchang_at_default_location, panchang_for_civil,
    panchang_for_moment,
};
use panchang_time::{Moment, calendar_to_jd, parse_civil};
use panchang_vedic_base::{
    GeoPosition, GulikaTable, Karana, Masa, Nakshatra, Paksha, Rashi, SiderealCalculator, Tithi,
    Vaar, Yoga,
};

/// Two minutes, in days.
const TWO_MIN: f64 = 2.0 / 1440.0;

/// 2025-11-25 00:00 IST.
fn nov_25_2025() -> Moment {
    Moment::from_jd_ut(calendar_to_jd(2025, 11, 25.0) - 5.5 / 24.0)
}

fn default_panchang(moment: Moment) -> PanchangResult {
    let config = PanchangConfig::default();
    panchang_at_default_location(&config.ephemeris(), moment, &config).unwrap()
}

fn assert_jd(label: &str, got: Moment, expected: f64) {
    let diff = got.jd_ut() - expected;
    assert!(
        diff.abs() <= TWO_MIN,
        "{label}: got JD {:.5}, expected {expected:.5} ({:+.1} min)",
        got.jd_ut(),
        diff * 1440.0
    );
}

#[test]
fn srirangam_late_november_2025_elements() {
    let p = default_panchang(nov_25_2025());

    assert_eq!(p.tithi.tithi, Tithi::ShuklaPanchami);
    assert_eq!(p.tithi.index, 5);
    assert_eq!(p.tithi.paksha, Paksha::Shukla);
    assert_jd("tithi start", p.tithi.start, 2_461_004.161_47);
    // 22:57:21 IST
    assert_jd("tithi end", p.tithi.end, 2_461_005.227_33);

    assert_eq!(p.nakshatra.nakshatra, Nakshatra::UttaraAshadha);
    assert_jd("nakshatra start", p.nakshatra.start, 2_461_004.183_13);
    assert_jd("nakshatra end", p.nakshatra.end, 2_461_005.269_28);

    assert_eq!(p.yoga.yoga, Yoga::Ganda);
    assert_jd("yoga start", p.yoga.start, 2_461_003.796_38);
    assert_jd("yoga end", p.yoga.end, 2_461_004.805_43);

    assert_eq!(p.karana.karana, Karana::Bava);
    assert_eq!(p.karana.index, 9);
    assert_eq!(p.karana.start, p.tithi.start);
    assert_jd("karana end", p.karana.end, 2_461_004.696_68);

    assert_eq!(p.rashi.rashi, Rashi::Vrischika);
    assert_jd("sankranti", p.rashi.start, 2_460_995.837_17);
    assert_jd("next sankranti", p.rashi.end, 2_461_025.448_18);
}

#[test]
fn srirangam_late_november_2025_calendar_and_day() {
    let p = default_panchang(nov_25_2025());

    let masa = p.masa.unwrap();
    assert_eq!(masa.masa, Masa::Margashirsha);
    assert!(!masa.adhika);
    assert_jd("masa start", masa.start, 2_460_999.782_78);
    assert_jd("masa end", masa.end, 2_461_029.571_80);

    assert_eq!(p.vaar, Vaar::Mangalavara);
    assert_eq!(p.date.to_string(), "2025-11-25");
    assert_eq!(p.utc_offset_minutes, 330);

    let ev = p.sun_events.unwrap();
    // 06:15:11 / 17:49:10 IST, centre of disc at 70 m
    assert!((ev.sunrise.jd_ut() - 2_461_004.531_39).abs() < 0.5 / 1440.0);
    assert!((ev.sunset.jd_ut() - 2_461_005.013_31).abs() < 0.5 / 1440.0);
    assert!(p.sun_absence.is_none());

    let m = p.muhurta.unwrap();
    assert_eq!(m.rahu_kaal.segment, 6);
    assert_eq!(m.yamaganda.segment, 2);
    assert_eq!(m.gulika.segment, 4);
    let seg = (ev.sunset.jd_ut() - ev.sunrise.jd_ut()) / 8.0;
    assert!((m.rahu_kaal.start.jd_ut() - (ev.sunrise.jd_ut() + 6.0 * seg)).abs() < 1e-9);
}

#[test]
fn sidereal_values_reported() {
    let p = default_panchang(nov_25_2025());
    assert!((p.sun_sidereal_deg - 218.5135).abs() < 0.01);
    assert!((p.moon_sidereal_deg - 267.7357).abs() < 0.01);
    assert!((p.ayanamsa_deg - 24.2199).abs() < 0.002);
}

#[test]
fn elements_hold_through_the_day() {
    // Tithi 5 runs from 21:22 IST the evening before to 22:57 IST.
    for hour in 0..23 {
        let m = nov_25_2025().add_days(hour as f64 / 24.0);
        let p = default_panchang(m);
        assert_eq!(p.tithi.index, 5, "hour {hour}");
        assert!(p.tithi.start <= m && m < p.tithi.end);
    }
}

#[test]
fn identical_inputs_identical_results() {
    let a = default_panchang(nov_25_2025());
    let b = default_panchang(nov_25_2025());
    assert_eq!(a, b);
}

#[test]
fn civil_entry_point_matches_moment() {
    let config = PanchangConfig::default();
    let eph = config.ephemeris();
    let civil = parse_civil("2025-11-25T00:00:00+05:30", config.utc_offset().unwrap()).unwrap();
    let a = panchang_for_civil(&eph, &civil, &config.location, &config).unwrap();
    let b = default_panchang(nov_25_2025());
    assert!((a.moment.jd_ut() - b.moment.jd_ut()).abs() < 1e-8);
    assert_eq!(a.tithi.index, b.tithi.index);
    assert_eq!(a.civil.to_rfc3339(), "2025-11-25T00:00:00+05:30");
}

#[test]
fn masa_known_months() {
    let eph = AnalyticEphemeris::default();
    let calc = SiderealCalculator::new(&eph);
    let tc = TransitionConfig::default();
    let cases = [
        ((2024, 1, 15.5), Masa::Pausha, false),
        ((2024, 4, 15.5), Masa::Chaitra, false),
        ((2024, 10, 10.5), Masa::Ashvina, false),
        ((2023, 8, 1.5), Masa::Shravana, true),
        ((2026, 5, 1.5), Masa::Vaishakha, false),
        ((2026, 6, 1.5), Masa::Jyeshtha, true),
    ];
    for ((y, m, d), masa, adhika) in cases {
        let jd = calendar_to_jd(y, m, d);
        let info = masa_for_moment(&calc, jd, &tc).unwrap();
        assert_eq!(info.masa, masa, "{y}-{m}-{d}: got {}", info.masa.name());
        assert_eq!(info.adhika, adhika, "{y}-{m}-{d}");
        assert!(info.start.jd_ut() <= jd && jd < info.end.jd_ut());
    }
}

#[test]
fn new_moons_are_a_synodic_month_apart() {
    let eph = AnalyticEphemeris::default();
    let calc = SiderealCalculator::new(&eph);
    let tc = TransitionConfig::default();
    let jd = calendar_to_jd(2025, 11, 25.0);
    let prev = find_new_moon(&calc, jd, SearchDirection::Backward, &tc).unwrap();
    let next = find_new_moon(&calc, jd, SearchDirection::Forward, &tc).unwrap();
    let month = next - prev;
    assert!((29.2..29.9).contains(&month), "month length {month}");
    // 2025-11-20 06:47 UT
    assert!((prev - 2_460_999.782_78).abs() < TWO_MIN);
}

#[test]
fn polar_night_is_not_fatal() {
    let config = PanchangConfig::default().with_utc_offset_minutes(60);
    let tromso = GeoPosition::new(69.6496, 18.956, 0.0).unwrap();
    let moment = Moment::from_jd_ut(calendar_to_jd(2025, 12, 21.5));
    let p = panchang_for_moment(&config.ephemeris(), moment, &tromso, &config).unwrap();
    assert_eq!(p.sun_events, None);
    assert_eq!(p.muhurta, None);
    assert_eq!(p.sun_absence, Some(SunAbsence::NoSunrise));
    // elements are unaffected
    assert!((1..=30).contains(&p.tithi.index));
}

#[test]
fn midnight_sun_is_not_fatal() {
    let config = PanchangConfig::default().with_utc_offset_minutes(120);
    let tromso = GeoPosition::new(69.6496, 18.956, 0.0).unwrap();
    let moment = Moment::from_jd_ut(calendar_to_jd(2025, 6, 21.5));
    let p = panchang_for_moment(&config.ephemeris(), moment, &tromso, &config).unwrap();
    assert_eq!(p.sun_absence, Some(SunAbsence::NoSunset));
    assert!(p.sun_events.is_none());
}

#[test]
fn legacy_gulika_collides_on_friday() {
    let config = PanchangConfig {
        gulika_table: GulikaTable::LegacySource,
        ..PanchangConfig::default()
    };
    // Friday 2025-11-28, 12:00 IST
    let moment = Moment::from_jd_ut(calendar_to_jd(2025, 11, 28.5) - 5.5 / 24.0);
    let p = panchang_at_default_location(&config.ephemeris(), moment, &config).unwrap();
    assert_eq!(p.vaar, Vaar::Shukravara);
    let m = p.muhurta.unwrap();
    assert_eq!(m.rahu_kaal.segment, 3);
    assert_eq!(m.gulika.segment, 3);
    assert_eq!(m.rahu_kaal, m.gulika);
}

#[test]
fn out_of_range_moment_is_an_error() {
    let config = PanchangConfig::default();
    let moment = Moment::from_jd_ut(calendar_to_jd(2400, 1, 1.0));
    assert!(panchang_at_default_location(&config.ephemeris(), moment, &config).is_err());
}

#[test]
fn invalid_location_rejected() {
    let config = PanchangConfig::default();
    let bad = GeoPosition {
        latitude_deg: 100.0,
        longitude_deg: 0.0,
        elevation_m: 0.0,
    };
    assert!(panchang_for_moment(&config.ephemeris(), nov_25_2025(), &bad, &config).is_err());
}
