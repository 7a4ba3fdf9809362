//! Nutation and obliquity of the ecliptic.
//!
//! Four-term nutation series (Meeus, *Astronomical Algorithms*, ch. 22),
//! good to about 0.5″ in longitude and 0.1″ in obliquity. That is well
//! below the accuracy of the analytic Sun and Moon theories it serves.

/// Nutation in longitude and obliquity, both in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub dpsi_arcsec: f64,
    /// Δε, nutation in obliquity.
    pub deps_arcsec: f64,
}

/// Longitude of the Moon's mean ascending node in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_node_longitude_deg(t: f64) -> f64 {
    (125.044_52 - 1934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0)
        .rem_euclid(360.0)
}

/// Nutation (Δψ, Δε) at `t` Julian centuries of TT since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let om = moon_node_longitude_deg(t).to_radians();
    let l = (280.4665 + 36_000.7698 * t).to_radians();
    let lp = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi = -17.20 * om.sin() - 1.32 * (2.0 * l).sin() - 0.23 * (2.0 * lp).sin()
        + 0.21 * (2.0 * om).sin();
    let deps = 9.20 * om.cos() + 0.57 * (2.0 * l).cos() + 0.10 * (2.0 * lp).cos()
        - 0.09 * (2.0 * om).cos();

    Nutation {
        dpsi_arcsec: dpsi,
        deps_arcsec: deps,
    }
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980, Meeus eq. 22.2).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - (46.8150 * t + 0.000_59 * t * t - 0.001_813 * t * t * t);
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity ε = ε₀ + Δε, in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation(t).deps_arcsec / 3600.0
}
