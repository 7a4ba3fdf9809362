//! Rahu Kaal, Yamaganda and Gulika windows.
//!
//! Daylight from sunrise to sunset is split into 8 equal segments; each
//! period takes one segment chosen by weekday. Tables are 0-indexed and run
//! Sunday..Saturday.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use panchang_time::Moment;

use crate::error::VedicError;
use crate::vaar::Vaar;

/// Number of equal daylight segments.
pub const DAY_SEGMENTS: u8 = 8;

pub const RAHU_KAAL_SEGMENTS: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];

pub const YAMAGANDA_SEGMENTS: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];

/// Gulika as printed in common almanacs: Saturn's segment, stepping back
/// one per weekday.
pub const GULIKA_ALMANAC_SEGMENTS: [u8; 7] = [6, 5, 4, 3, 2, 1, 0];

/// Gulika as carried by older data files. Shares a segment with Rahu Kaal
/// on Friday and Saturday.
pub const GULIKA_LEGACY_SEGMENTS: [u8; 7] = [6, 2, 0, 5, 4, 3, 2];

/// Source of the Gulika weekday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GulikaTable {
    #[default]
    Almanac,
    LegacySource,
}

impl GulikaTable {
    pub const fn segments(self) -> [u8; 7] {
        match self {
            Self::Almanac => GULIKA_ALMANAC_SEGMENTS,
            Self::LegacySource => GULIKA_LEGACY_SEGMENTS,
        }
    }
}

/// The three inauspicious periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MuhurtaKind {
    RahuKaal,
    Yamaganda,
    Gulika,
}

impl MuhurtaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::Yamaganda => "Yamaganda",
            Self::Gulika => "Gulika",
        }
    }
}

/// Weekday → segment tables for all three periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuhurtaTable {
    rahu_kaal: [u8; 7],
    yamaganda: [u8; 7],
    gulika: [u8; 7],
}

impl Default for MuhurtaTable {
    fn default() -> Self {
        Self::new(GulikaTable::default())
    }
}

impl MuhurtaTable {
    pub const fn new(gulika: GulikaTable) -> Self {
        Self {
            rahu_kaal: RAHU_KAAL_SEGMENTS,
            yamaganda: YAMAGANDA_SEGMENTS,
            gulika: gulika.segments(),
        }
    }

    /// 0-based segment of `kind` on `vaar`.
    pub fn segment(&self, kind: MuhurtaKind, vaar: Vaar) -> u8 {
        let i = vaar.index() as usize;
        match kind {
            MuhurtaKind::RahuKaal => self.rahu_kaal[i],
            MuhurtaKind::Yamaganda => self.yamaganda[i],
            MuhurtaKind::Gulika => self.gulika[i],
        }
    }

    /// Every (weekday, segment) that two periods share.
    pub fn collisions(&self) -> Vec<(u8, u8)> {
        (0..7)
            .filter_map(|i| {
                let (r, y, g) = (self.rahu_kaal[i], self.yamaganda[i], self.gulika[i]);
                let shared = if r == y || r == g {
                    Some(r)
                } else if y == g {
                    Some(y)
                } else {
                    None
                };
                shared.map(|s| (i as u8, s))
            })
            .collect()
    }

    /// Fails on the first weekday where two periods share a segment.
    pub fn validate(&self) -> Result<(), VedicError> {
        match self.collisions().first() {
            Some(&(weekday, segment)) => Err(VedicError::MuhurtaCollision { weekday, segment }),
            None => Ok(()),
        }
    }
}

/// One selected day segment, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MuhurtaWindow {
    pub start: Moment,
    pub end: Moment,
    /// 0-based segment index.
    pub segment: u8,
}

impl MuhurtaWindow {
    pub fn duration_days(&self) -> f64 {
        self.end.jd_ut() - self.start.jd_ut()
    }

    pub fn contains(&self, moment: Moment) -> bool {
        moment >= self.start && moment < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MuhurtaWindows {
    pub rahu_kaal: MuhurtaWindow,
    pub yamaganda: MuhurtaWindow,
    pub gulika: MuhurtaWindow,
    /// Length of one segment in days.
    pub segment_days: f64,
}

impl MuhurtaWindows {
    pub fn get(&self, kind: MuhurtaKind) -> &MuhurtaWindow {
        match kind {
            MuhurtaKind::RahuKaal => &self.rahu_kaal,
            MuhurtaKind::Yamaganda => &self.yamaganda,
            MuhurtaKind::Gulika => &self.gulika,
        }
    }
}

/// Rahu Kaal, Yamaganda and Gulika for one day.
pub fn muhurta_windows(
    sunrise: Moment,
    sunset: Moment,
    vaar: Vaar,
    table: &MuhurtaTable,
) -> Result<MuhurtaWindows, VedicError> {
    let (rise, set) = (sunrise.jd_ut(), sunset.jd_ut());
    if !(set > rise) {
        return Err(VedicError::InvalidInterval {
            sunrise: rise,
            sunset: set,
        });
    }
    let segment_days = (set - rise) / f64::from(DAY_SEGMENTS);
    let window = |kind| {
        let segment = table.segment(kind, vaar);
        let start = rise + f64::from(segment) * segment_days;
        // last segment ends exactly at sunset
        let end = if segment + 1 == DAY_SEGMENTS {
            set
        } else {
            start + segment_days
        };
        MuhurtaWindow {
            start: Moment::from_jd_ut(start),
            end: Moment::from_jd_ut(end),
            segment,
        }
    };
    Ok(MuhurtaWindows {
        rahu_kaal: window(MuhurtaKind::RahuKaal),
        yamaganda: window(MuhurtaKind::Yamaganda),
        gulika: window(MuhurtaKind::Gulika),
        segment_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaar::ALL_VAARS;

    const RISE: f64 = 2_461_004.532;
    const SET: f64 = 2_461_005.0125;

    fn windows(vaar: Vaar, gulika: GulikaTable) -> MuhurtaWindows {
        muhurta_windows(
            Moment::from_jd_ut(RISE),
            Moment::from_jd_ut(SET),
            vaar,
            &MuhurtaTable::new(gulika),
        )
        .unwrap()
    }

    #[test]
    fn almanac_table_is_disjoint() {
        let table = MuhurtaTable::default();
        assert!(table.collisions().is_empty());
        assert!(table.validate().is_ok());
    }

    #[test]
    fn legacy_table_collides_friday_and_saturday() {
        let table = MuhurtaTable::new(GulikaTable::LegacySource);
        assert_eq!(table.collisions(), vec![(5, 3), (6, 2)]);
        assert_eq!(
            table.validate(),
            Err(VedicError::MuhurtaCollision {
                weekday: 5,
                segment: 3
            })
        );
    }

    #[test]
    fn tuesday_segments() {
        let w = windows(Vaar::Mangalavara, GulikaTable::Almanac);
        assert_eq!(w.rahu_kaal.segment, 6);
        assert_eq!(w.yamaganda.segment, 2);
        assert_eq!(w.gulika.segment, 4);
    }

    #[test]
    fn sunday_rahu_is_last_segment() {
        let w = windows(Vaar::Ravivara, GulikaTable::Almanac);
        assert_eq!(w.rahu_kaal.end.jd_ut(), SET);
    }

    #[test]
    fn segments_partition_daylight() {
        for vaar in ALL_VAARS {
            for gulika in [GulikaTable::Almanac, GulikaTable::LegacySource] {
                let w = windows(vaar, gulika);
                let seg = (SET - RISE) / 8.0;
                for kind in [MuhurtaKind::RahuKaal, MuhurtaKind::Yamaganda, MuhurtaKind::Gulika] {
                    let win = w.get(kind);
                    assert!((win.duration_days() - seg).abs() < 1e-9, "{}", kind.name());
                    assert!(win.start.jd_ut() >= RISE);
                    assert!(win.end.jd_ut() <= SET);
                }
            }
        }
    }

    #[test]
    fn empty_day_rejected() {
        let r = muhurta_windows(
            Moment::from_jd_ut(SET),
            Moment::from_jd_ut(RISE),
            Vaar::Somavara,
            &MuhurtaTable::default(),
        );
        assert!(matches!(r, Err(VedicError::InvalidInterval { .. })));
    }

    #[test]
    fn window_contains_is_half_open() {
        let w = windows(Vaar::Budhavara, GulikaTable::Almanac).rahu_kaal;
        assert!(w.contains(w.start));
        assert!(!w.contains(w.end));
    }
}
