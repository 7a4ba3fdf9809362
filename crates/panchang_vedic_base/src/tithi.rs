//! Tithi (lunar day) and paksha.
//!
//! A tithi is 12° of Moon−Sun elongation; 30 of them make a synodic month.
//! Tithis 1–15 fall in the bright fortnight (Shukla paksha), 16–30 in the
//! dark fortnight (Krishna paksha).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::util::segment_position;

/// Width of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Number of tithis in a synodic month.
pub const TITHI_COUNT: u8 = 30;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Paksha {
    /// Waxing, new moon to full moon.
    Shukla,
    /// Waning, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month, Shukla Pratipada first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Day names within a paksha (1..=14; the 15th is Purnima or Amavasya).
const PAKSHA_DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    /// 1-based position in the month (Shukla Pratipada = 1, Amavasya = 30).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Tithi from its 1-based number; `None` outside 1..=30.
    pub fn from_number(n: u8) -> Option<Self> {
        (1..=TITHI_COUNT)
            .contains(&n)
            .then(|| ALL_TITHIS[(n - 1) as usize])
    }

    pub const fn paksha(self) -> Paksha {
        if self.number() <= 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based day within the paksha (1..=15).
    pub const fn day_in_paksha(self) -> u8 {
        let n = self.number();
        if n <= 15 { n } else { n - 15 }
    }

    /// Name within the paksha, without the paksha prefix.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            other => PAKSHA_DAY_NAMES[(other.day_in_paksha() - 1) as usize],
        }
    }

    /// Full name, e.g. "Shukla Panchami".
    pub fn name(self) -> String {
        match self {
            Self::Purnima | Self::Amavasya => self.short_name().to_string(),
            other => format!("{} {}", other.paksha().name(), other.short_name()),
        }
    }
}

/// Tithi at a given elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 1-based index (1..=30).
    pub index: u8,
    pub paksha: Paksha,
    /// 1-based day within the paksha (1..=15).
    pub tithi_in_paksha: u8,
    /// Elapsed fraction of the tithi [0, 1).
    pub fraction: f64,
}

/// Tithi from Moon−Sun sidereal elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let (index, fraction) = segment_position(elongation_deg, TITHI_SEGMENT_DEG, TITHI_COUNT);
    let tithi = ALL_TITHIS[(index - 1) as usize];
    TithiPosition {
        tithi,
        index,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.day_in_paksha(),
        fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tithi_at_conjunction() {
        let pos = tithi_from_elongation(0.0);
        assert_eq!(pos.index, 1);
        assert_eq!(pos.tithi, Tithi::ShuklaPratipada);
        assert_eq!(pos.paksha, Paksha::Shukla);
    }

    #[test]
    fn panchami_at_49_degrees() {
        let pos = tithi_from_elongation(49.2);
        assert_eq!(pos.index, 5);
        assert_eq!(pos.tithi.name(), "Shukla Panchami");
        assert!((pos.fraction - 0.1).abs() < 1e-9);
    }

    #[test]
    fn paksha_flips_at_sixteen() {
        assert_eq!(tithi_from_elongation(179.999).paksha, Paksha::Shukla);
        let pos = tithi_from_elongation(180.0);
        assert_eq!(pos.index, 16);
        assert_eq!(pos.paksha, Paksha::Krishna);
        assert_eq!(pos.tithi_in_paksha, 1);
    }

    #[test]
    fn last_tithi_is_amavasya() {
        let pos = tithi_from_elongation(359.9);
        assert_eq!(pos.index, 30);
        assert_eq!(pos.tithi, Tithi::Amavasya);
        assert_eq!(pos.tithi_in_paksha, 15);
        assert_eq!(pos.tithi.name(), "Amavasya");
    }

    #[test]
    fn all_indices_in_range() {
        for i in 0..3600 {
            let pos = tithi_from_elongation(i as f64 * 0.1);
            assert!((1..=30).contains(&pos.index));
            assert_eq!(pos.tithi.number(), pos.index);
        }
    }

    #[test]
    fn from_number_bounds() {
        assert_eq!(Tithi::from_number(0), None);
        assert_eq!(Tithi::from_number(15), Some(Tithi::Purnima));
        assert_eq!(Tithi::from_number(31), None);
    }

    #[test]
    fn krishna_names() {
        assert_eq!(Tithi::KrishnaEkadashi.name(), "Krishna Ekadashi");
        assert_eq!(Tithi::KrishnaEkadashi.day_in_paksha(), 11);
    }
}
