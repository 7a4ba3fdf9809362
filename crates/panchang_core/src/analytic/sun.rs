//! Low-precision solar theory (Meeus ch. 25).
//!
//! Geometric mean longitude plus the equation of the centre, then
//! aberration and nutation for the apparent longitude. Accuracy ~0.01°.

/// Apparent solar longitude and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent ecliptic longitude (true equinox of date), degrees [0, 360).
    pub apparent_lon_deg: f64,
    /// Radius vector in AU.
    pub distance_au: f64,
}

/// Constant of aberration in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Sun's apparent position at `t` Julian centuries of TT since J2000.0.
///
/// `dpsi_arcsec` is nutation in longitude at the same instant.
pub fn sun_position(t: f64, dpsi_arcsec: f64) -> SolarPosition {
    let t2 = t * t;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let true_anomaly = m + c.to_radians();
    let r = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    let apparent = true_lon - ABERRATION_ARCSEC / 3600.0 / r + dpsi_arcsec / 3600.0;
    SolarPosition {
        apparent_lon_deg: apparent.rem_euclid(360.0),
        distance_au: r,
    }
}
