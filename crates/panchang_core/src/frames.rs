//! Ecliptic → equatorial rotation.

use std::f64::consts::TAU;

/// Apparent geocentric equatorial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in radians, [0, 2π).
    pub ra_rad: f64,
    /// Declination in radians, [-π/2, π/2].
    pub dec_rad: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
}

/// Rotate ecliptic (λ, β) about the equinox by obliquity ε.
///
/// All angles in radians. Returns `(ra, dec)` with RA in [0, 2π).
pub fn ecliptic_to_equatorial(lon_rad: f64, lat_rad: f64, obliquity_rad: f64) -> (f64, f64) {
    let (sin_l, cos_l) = lon_rad.sin_cos();
    let (sin_b, cos_b) = lat_rad.sin_cos();
    let (sin_e, cos_e) = obliquity_rad.sin_cos();
    let ra = (sin_l * cos_e - (sin_b / cos_b) * sin_e).atan2(cos_l);
    let dec = (sin_b * cos_e + cos_b * sin_e * sin_l).asin();
    (ra.rem_euclid(TAU), dec)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.409_092_804; // 23.4393 deg

    #[test]
    fn equinox_maps_to_origin() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, EPS);
        assert!(ra.abs() < 1e-12 || (ra - TAU).abs() < 1e-12);
        assert!(dec.abs() < 1e-12);
    }

    #[test]
    fn solstice_declination_equals_obliquity() {
        let (ra, dec) = ecliptic_to_equatorial(90_f64.to_radians(), 0.0, EPS);
        assert!((ra - 90_f64.to_radians()).abs() < 1e-12);
        assert!((dec - EPS).abs() < 1e-12);
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630, β = 6.684170, ε = 23.4392911
        let (ra, dec) = ecliptic_to_equatorial(
            113.215_630_f64.to_radians(),
            6.684_170_f64.to_radians(),
            23.439_291_1_f64.to_radians(),
        );
        assert!((ra.to_degrees() - 116.328_942).abs() < 1e-5);
        assert!((dec.to_degrees() - 28.026_183).abs() < 1e-5);
    }
}
