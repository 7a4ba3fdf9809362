//! Greenwich sidereal time.
//!
//! Provides the mean and apparent sidereal time needed to turn a body's
//! right ascension into a local hour angle.
//!
//! Sources:
//! - GMST: IAU 1982 expression as given by Meeus, eq. 12.4.
//! - Equation of the equinoxes: Δψ·cos ε (Meeus ch. 12).

use std::f64::consts::TAU;

use crate::julian::{J2000_JD, julian_centuries};

/// Ratio of sidereal to solar day rotation rate.
pub const SIDEREAL_RATE: f64 = 1.002_737_811_911_35;

/// Greenwich Mean Sidereal Time at a Julian Day (UT).
///
/// θ₀ = 280.46061837° + 360.98564736629°·d + 0.000387933°·T² − T³/38710000
///
/// Returns radians in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = julian_centuries(jd_ut);
    let deg = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    deg.to_radians().rem_euclid(TAU)
}

/// Greenwich Apparent Sidereal Time from GMST and nutation terms.
///
/// GAST = GMST + Δψ·cos ε, with `nutation_lon_rad` = Δψ and
/// `true_obliquity_rad` = ε. Returns radians in [0, 2π).
pub fn gast_rad(gmst: f64, nutation_lon_rad: f64, true_obliquity_rad: f64) -> f64 {
    (gmst + nutation_lon_rad * true_obliquity_rad.cos()).rem_euclid(TAU)
}

/// Local Sidereal Time from Greenwich sidereal time and east longitude.
pub fn local_sidereal_time_rad(gst: f64, longitude_east_rad: f64) -> f64 {
    (gst + longitude_east_rad).rem_euclid(TAU)
}
