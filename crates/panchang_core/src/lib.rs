//! Ephemeris contract for the panchang engine.
//!
//! Calendar calculations only ever need two things from astronomy: the
//! apparent tropical ecliptic longitude of the Sun and Moon, and the
//! ayanamsha. [`Ephemeris`] is that seam. The Sun's equatorial position and
//! sidereal time ride along for sunrise/sunset.
//!
//! Implementations take `&self`, hold no mutable state, and must be
//! `Send + Sync`, so one handle can serve any number of threads.
//! [`AnalyticEphemeris`] is the built-in provider.

pub mod analytic;
pub mod ayanamsha;
pub mod error;
pub mod frames;
pub mod nutation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use analytic::{AnalyticEphemeris, SUPPORTED_RANGE_JD};
pub use ayanamsha::{
    AyanamshaSystem, ayanamsha_deg, ayanamsha_mean_deg, general_precession_longitude_deg,
};
pub use error::EphemerisError;
pub use frames::{EquatorialPosition, ecliptic_to_equatorial};
pub use nutation::{Nutation, mean_obliquity_deg, nutation, true_obliquity_deg};

/// Bodies the engine asks positions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Source of Sun/Moon positions and the ayanamsha.
///
/// All times are Julian Days in UT. Longitudes are geocentric, apparent,
/// tropical, in degrees [0, 360). There is no sidereal mode:
/// callers subtract [`Ephemeris::ayanamsa`] themselves, exactly once.
pub trait Ephemeris: Send + Sync {
    /// Apparent tropical ecliptic longitude of `body` in degrees.
    fn tropical_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError>;

    /// Ayanamsha (tropical − sidereal) in degrees.
    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EphemerisError>;

    /// Apparent geocentric equatorial position of the Sun.
    fn sun_equatorial(&self, jd_ut: f64) -> Result<EquatorialPosition, EphemerisError>;

    /// Greenwich apparent sidereal time in radians.
    ///
    /// The default is mean sidereal time; providers with a nutation model
    /// should add the equation of the equinoxes.
    fn sidereal_time_rad(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        self.check_range(jd_ut)?;
        Ok(panchang_time::gmst_rad(jd_ut))
    }

    /// Inclusive Julian Day (UT) window this provider answers for.
    fn supported_range(&self) -> (f64, f64);

    /// `Ok` when `jd_ut` is finite and inside [`Ephemeris::supported_range`].
    fn check_range(&self, jd_ut: f64) -> Result<(), EphemerisError> {
        let (min, max) = self.supported_range();
        if jd_ut.is_finite() && jd_ut >= min && jd_ut <= max {
            Ok(())
        } else {
            Err(EphemerisError::OutOfRange {
                jd: jd_ut,
                min,
                max,
            })
        }
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn tropical_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        (**self).tropical_longitude(jd_ut, body)
    }
    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).ayanamsa(jd_ut)
    }
    fn sun_equatorial(&self, jd_ut: f64) -> Result<EquatorialPosition, EphemerisError> {
        (**self).sun_equatorial(jd_ut)
    }
    fn sidereal_time_rad(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).sidereal_time_rad(jd_ut)
    }
    fn supported_range(&self) -> (f64, f64) {
        (**self).supported_range()
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for std::sync::Arc<E> {
    fn tropical_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        (**self).tropical_longitude(jd_ut, body)
    }
    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).ayanamsa(jd_ut)
    }
    fn sun_equatorial(&self, jd_ut: f64) -> Result<EquatorialPosition, EphemerisError> {
        (**self).sun_equatorial(jd_ut)
    }
    fn sidereal_time_rad(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).sidereal_time_rad(jd_ut)
    }
    fn supported_range(&self) -> (f64, f64) {
        (**self).supported_range()
    }
}
