//! The five angular panchang elements from Sun and Moon sidereal longitudes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use panchang_core::Ephemeris;

use crate::error::VedicError;
use crate::karana::{KARANA_COUNT, KARANA_SEGMENT_DEG, KaranaPosition, karana_from_elongation};
use crate::nakshatra::{
    NAKSHATRA_COUNT, NAKSHATRA_SPAN_DEG, NakshatraPosition, nakshatra_from_longitude,
};
use crate::rashi::{RASHI_COUNT, RASHI_SPAN_DEG, RashiPosition, rashi_from_longitude};
use crate::sidereal::{SiderealCalculator, SiderealPositions};
use crate::tithi::{TITHI_COUNT, TITHI_SEGMENT_DEG, TithiPosition, tithi_from_elongation};
use crate::util::segment_position;
use crate::yoga::{YOGA_COUNT, YOGA_SEGMENT_DEG, YogaPosition, yoga_from_sum};

/// An element whose index is a fixed-width segment of some angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Element {
    /// Moon − Sun, 12° segments.
    Tithi,
    /// Moon − Sun, 6° segments.
    Karana,
    /// Moon, 13°20′ segments.
    Nakshatra,
    /// Sun + Moon, 13°20′ segments.
    Yoga,
    /// Sun, 30° segments.
    Rashi,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Karana => "karana",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Rashi => "rashi",
        }
    }

    /// Segment width in degrees.
    pub const fn span_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SEGMENT_DEG,
            Self::Karana => KARANA_SEGMENT_DEG,
            Self::Nakshatra => NAKSHATRA_SPAN_DEG,
            Self::Yoga => YOGA_SEGMENT_DEG,
            Self::Rashi => RASHI_SPAN_DEG,
        }
    }

    pub const fn count(self) -> u8 {
        match self {
            Self::Tithi => TITHI_COUNT,
            Self::Karana => KARANA_COUNT,
            Self::Nakshatra => NAKSHATRA_COUNT,
            Self::Yoga => YOGA_COUNT,
            Self::Rashi => RASHI_COUNT,
        }
    }

    /// Mean rate of the underlying angle in degrees per day.
    pub const fn mean_rate_deg_per_day(self) -> f64 {
        match self {
            // synodic: 360 / 29.530589
            Self::Tithi | Self::Karana => 12.190_749,
            // sidereal month: 360 / 27.321662
            Self::Nakshatra => 13.176_358,
            Self::Yoga => 13.176_358 + 0.985_609,
            // sidereal year
            Self::Rashi => 0.985_609,
        }
    }

    /// The angle this element segments.
    pub fn angle(self, positions: &SiderealPositions) -> f64 {
        match self {
            Self::Tithi | Self::Karana => positions.elongation(),
            Self::Nakshatra => positions.moon_deg,
            Self::Yoga => positions.luni_solar_sum(),
            Self::Rashi => positions.sun_deg,
        }
    }

    /// 1-based index and elapsed fraction of `angle_deg`.
    pub fn locate(self, angle_deg: f64) -> (u8, f64) {
        segment_position(angle_deg, self.span_deg(), self.count())
    }

    pub const ALL: [Element; 5] = [
        Self::Tithi,
        Self::Karana,
        Self::Nakshatra,
        Self::Yoga,
        Self::Rashi,
    ];
}

/// All five elements at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSnapshot {
    pub tithi: TithiPosition,
    pub nakshatra: NakshatraPosition,
    pub yoga: YogaPosition,
    pub karana: KaranaPosition,
    pub rashi: RashiPosition,
}

impl ElementSnapshot {
    /// 1-based index of one element.
    pub fn index_of(&self, element: Element) -> u8 {
        match element {
            Element::Tithi => self.tithi.index,
            Element::Karana => self.karana.index,
            Element::Nakshatra => self.nakshatra.index,
            Element::Yoga => self.yoga.index,
            Element::Rashi => self.rashi.index,
        }
    }
}

/// Derive the five elements from sidereal Sun and Moon longitudes.
pub fn elements_at(sun_sid_deg: f64, moon_sid_deg: f64) -> ElementSnapshot {
    let positions = SiderealPositions {
        jd_ut: f64::NAN,
        sun_deg: sun_sid_deg,
        moon_deg: moon_sid_deg,
        ayanamsa_deg: f64::NAN,
    };
    snapshot(&positions)
}

/// Query the calculator and derive the five elements.
pub fn elements_at_jd<E: Ephemeris>(
    calc: &SiderealCalculator<E>,
    jd_ut: f64,
) -> Result<(SiderealPositions, ElementSnapshot), VedicError> {
    let positions = calc.positions(jd_ut)?;
    Ok((positions, snapshot(&positions)))
}

fn snapshot(p: &SiderealPositions) -> ElementSnapshot {
    let elongation = p.elongation();
    ElementSnapshot {
        tithi: tithi_from_elongation(elongation),
        nakshatra: nakshatra_from_longitude(p.moon_deg),
        yoga: yoga_from_sum(p.luni_solar_sum()),
        karana: karana_from_elongation(elongation),
        rashi: rashi_from_longitude(p.sun_deg),
    }
}
