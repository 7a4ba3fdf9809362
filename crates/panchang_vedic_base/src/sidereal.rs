//! Sidereal longitudes of the Sun and Moon.
//!
//! This is the one place the ayanamsha is subtracted. The ephemeris only
//! reports tropical longitudes, so every sidereal value in the engine
//! comes through here.

use panchang_core::{Body, Ephemeris};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Sidereal Sun and Moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealPositions {
    pub jd_ut: f64,
    pub sun_deg: f64,
    pub moon_deg: f64,
    pub ayanamsa_deg: f64,
}

impl SiderealPositions {
    /// Moon − Sun, normalized to [0, 360).
    pub fn elongation(&self) -> f64 {
        normalize_360(self.moon_deg - self.sun_deg)
    }

    /// Sun + Moon, normalized to [0, 360).
    pub fn luni_solar_sum(&self) -> f64 {
        normalize_360(self.sun_deg + self.moon_deg)
    }
}

/// Applies the ayanamsha to an ephemeris.
#[derive(Debug, Clone, Copy)]
pub struct SiderealCalculator<E> {
    ephemeris: E,
}

impl<E: Ephemeris> SiderealCalculator<E> {
    pub fn new(ephemeris: E) -> Self {
        Self { ephemeris }
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// `normalize(tropical − ayanamsa)` for one body.
    pub fn sidereal_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, VedicError> {
        let tropical = self.ephemeris.tropical_longitude(jd_ut, body)?;
        let ayanamsa = self.ephemeris.ayanamsa(jd_ut)?;
        Ok(normalize_360(tropical - ayanamsa))
    }

    /// Both bodies with a single ayanamsha query.
    pub fn positions(&self, jd_ut: f64) -> Result<SiderealPositions, VedicError> {
        let ayanamsa = self.ephemeris.ayanamsa(jd_ut)?;
        let sun = self.ephemeris.tropical_longitude(jd_ut, Body::Sun)?;
        let moon = self.ephemeris.tropical_longitude(jd_ut, Body::Moon)?;
        Ok(SiderealPositions {
            jd_ut,
            sun_deg: normalize_360(sun - ayanamsa),
            moon_deg: normalize_360(moon - ayanamsa),
            ayanamsa_deg: ayanamsa,
        })
    }

    /// Moon − Sun sidereal elongation.
    pub fn elongation(&self, jd_ut: f64) -> Result<f64, VedicError> {
        Ok(self.positions(jd_ut)?.elongation())
    }

    /// Sun + Moon sidereal sum.
    pub fn luni_solar_sum(&self, jd_ut: f64) -> Result<f64, VedicError> {
        Ok(self.positions(jd_ut)?.luni_solar_sum())
    }
}
