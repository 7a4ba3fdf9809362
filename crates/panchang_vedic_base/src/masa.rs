//! Masa (lunar month) names and the Amanta naming rule.
//!
//! An Amanta month runs new moon to new moon and is named after the
//! sidereal sign the Sun occupies at the month's closing new moon: Sun in
//! Mesha gives Chaitra, in Meena gives Phalguna. A month with no solar
//! ingress inside it is adhika (intercalary) and borrows the name of the
//! month that follows. Kshaya (dropped) months are not modelled.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }
}

/// Masa for the Sun's 1-based rashi number (Mesha = 1 → Chaitra).
pub fn masa_from_rashi_number(rashi: u8) -> Masa {
    ALL_MASAS[((rashi.max(1) - 1) % 12) as usize]
}

/// Amanta naming from the Sun's rashi (1-based) at the opening and closing
/// new moons. Returns the masa and whether it is adhika.
pub fn amanta_masa(rashi_at_start: u8, rashi_at_end: u8) -> (Masa, bool) {
    if rashi_at_start == rashi_at_end {
        (masa_from_rashi_number(rashi_at_start % 12 + 1), true)
    } else {
        (masa_from_rashi_number(rashi_at_end), false)
    }
}
