//! Built-in analytic Sun/Moon ephemeris.
//!
//! Needs no kernel files. Positions come from closed-form series evaluated
//! in TT (UT + ΔT); the ayanamsha follows the configured Lahiri mode.

pub mod moon;
pub mod sun;

use panchang_time::{gast_rad, gmst_rad, julian_centuries, ut_to_tt};
use tracing::debug;

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::error::EphemerisError;
use crate::frames::{EquatorialPosition, ecliptic_to_equatorial};
use crate::nutation::{mean_obliquity_deg, nutation};
use crate::{Body, Ephemeris};

pub use moon::{lunar_arguments, moon_longitude};
pub use sun::{SolarPosition, sun_position};

/// Julian Day (UT) window of the analytic series: 1800-01-01 to 2200-01-01.
pub const SUPPORTED_RANGE_JD: (f64, f64) = (2_378_496.5, 2_524_593.5);

/// Meeus-series ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyticEphemeris {
    system: AyanamshaSystem,
}

impl AnalyticEphemeris {
    pub fn new(system: AyanamshaSystem) -> Self {
        debug!(ayanamsha = system.name(), "analytic ephemeris ready");
        Self { system }
    }

    /// Ayanamsha mode this provider reports.
    pub fn system(&self) -> AyanamshaSystem {
        self.system
    }

    fn centuries_tt(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        self.check_range(jd_ut)?;
        Ok(julian_centuries(ut_to_tt(jd_ut)))
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn tropical_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        let t = self.centuries_tt(jd_ut)?;
        let dpsi = nutation(t).dpsi_arcsec;
        Ok(match body {
            Body::Sun => sun_position(t, dpsi).apparent_lon_deg,
            Body::Moon => moon_longitude(t, dpsi),
        })
    }

    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        let t = self.centuries_tt(jd_ut)?;
        Ok(ayanamsha_deg(self.system, t, nutation(t).dpsi_arcsec))
    }

    fn sun_equatorial(&self, jd_ut: f64) -> Result<EquatorialPosition, EphemerisError> {
        let t = self.centuries_tt(jd_ut)?;
        let nut = nutation(t);
        let pos = sun_position(t, nut.dpsi_arcsec);
        let eps = mean_obliquity_deg(t) + nut.deps_arcsec / 3600.0;
        let (ra, dec) =
            ecliptic_to_equatorial(pos.apparent_lon_deg.to_radians(), 0.0, eps.to_radians());
        Ok(EquatorialPosition {
            ra_rad: ra,
            dec_rad: dec,
            distance_au: pos.distance_au,
        })
    }

    fn sidereal_time_rad(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        let t = self.centuries_tt(jd_ut)?;
        let nut = nutation(t);
        let eps = mean_obliquity_deg(t) + nut.deps_arcsec / 3600.0;
        Ok(gast_rad(
            gmst_rad(jd_ut),
            (nut.dpsi_arcsec / 3600.0).to_radians(),
            eps.to_radians(),
        ))
    }

    fn supported_range(&self) -> (f64, f64) {
        SUPPORTED_RANGE_JD
    }
}
