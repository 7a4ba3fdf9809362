//! Vaar (weekday).

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use panchang_time::weekday_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// 0-based weekday index, Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Weekday of a civil date.
    pub fn from_date(date: NaiveDate) -> Self {
        ALL_VAARS[weekday_index(date) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tuesday() {
        let d = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
        assert_eq!(Vaar::from_date(d), Vaar::Mangalavara);
        assert_eq!(Vaar::from_date(d).english_name(), "Tuesday");
    }

    #[test]
    fn index_order() {
        for (i, v) in ALL_VAARS.iter().enumerate() {
            assert_eq!(v.index() as usize, i);
        }
    }
}
