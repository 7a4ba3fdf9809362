//! Karana: half-tithi, 6° of Moon−Sun elongation.
//!
//! 60 karanas per synodic month drawn from 11 names:
//! - half 1 is Kimstughna,
//! - halves 2..=57 cycle through the 7 movable karanas (8 full cycles),
//! - halves 58, 59, 60 are Shakuni, Chatushpada and Naga.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::util::segment_position;

/// Width of one karana in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

pub const KARANA_COUNT: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The 7 movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// The four karanas that occur once a month.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }

    /// Karana for a 1-based half-tithi index; `None` outside 1..=60.
    pub fn from_half_index(half_index: u8) -> Option<Self> {
        match half_index {
            1 => Some(Self::Kimstughna),
            2..=57 => Some(MOVABLE_KARANAS[((half_index - 2) % 7) as usize]),
            58 => Some(Self::Shakuni),
            59 => Some(Self::Chatushpada),
            60 => Some(Self::Naga),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 1-based half-tithi index (1..=60).
    pub index: u8,
    /// Elapsed fraction [0, 1).
    pub fraction: f64,
}

/// Karana from Moon−Sun sidereal elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let (index, fraction) = segment_position(elongation_deg, KARANA_SEGMENT_DEG, KARANA_COUNT);
    // segment_position keeps index in 1..=60, so the lookup always succeeds
    let karana = Karana::from_half_index(index).unwrap_or(Karana::Naga);
    KaranaPosition {
        karana,
        index,
        fraction,
    }
}
