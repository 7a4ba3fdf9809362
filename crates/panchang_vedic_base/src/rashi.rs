//! Rashi (sidereal zodiac sign) of the Sun, with DMS formatting.
//!
//! 12 signs of 30° each, starting from Mesha at sidereal 0°.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::util::segment_position;

pub const RASHI_SPAN_DEG: f64 = 30.0;

pub const RASHI_COUNT: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 1-based number (Mesha = 1, Meena = 12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// Degrees-minutes-seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}′{:04.1}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Split a non-negative angle into degrees, minutes and seconds.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let rem = (d - degrees) * 60.0;
    let minutes = rem.floor();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (rem - minutes) * 60.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiPosition {
    pub rashi: Rashi,
    /// 1-based index (1..=12).
    pub index: u8,
    /// Elapsed fraction [0, 1).
    pub fraction: f64,
    /// Degrees travelled inside the sign [0, 30).
    pub degrees_in_rashi: f64,
}

/// Rashi from a sidereal longitude in degrees.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiPosition {
    let (index, fraction) = segment_position(sidereal_lon_deg, RASHI_SPAN_DEG, RASHI_COUNT);
    RashiPosition {
        rashi: ALL_RASHIS[(index - 1) as usize],
        index,
        fraction,
        degrees_in_rashi: fraction * RASHI_SPAN_DEG,
    }
}
