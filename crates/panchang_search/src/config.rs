//! Engine configuration.
//!
//! One value carries every knob the pipeline reads. Construct it with
//! [`PanchangConfig::default`] and struct update syntax, or load it from
//! JSON with `from_json_str` (requires the `serde` feature). Missing JSON
//! fields take their defaults.

use chrono::FixedOffset;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use panchang_core::{AnalyticEphemeris, AyanamshaSystem};
use panchang_time::offset_from_minutes;
use panchang_vedic_base::{GeoPosition, GulikaTable, MuhurtaTable, RiseSetConfig};

use crate::error::SearchError;
use crate::transition::TransitionConfig;

/// Sri Ranganathaswamy temple, Srirangam.
pub const DEFAULT_LOCATION: GeoPosition = GeoPosition {
    latitude_deg: 10.8627,
    longitude_deg: 78.6897,
    elevation_m: 70.0,
};

/// Indian Standard Time.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanchangConfig {
    pub ayanamsha_system: AyanamshaSystem,
    /// Observer used when a request names no location.
    pub location: GeoPosition,
    /// Offset for civil rendering, the civil date and the weekday.
    pub utc_offset_minutes: i32,
    pub riseset: RiseSetConfig,
    pub gulika_table: GulikaTable,
    pub transition: TransitionConfig,
    /// Whether to search the bracketing new moons for the masa.
    pub include_masa: bool,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            ayanamsha_system: AyanamshaSystem::default(),
            location: DEFAULT_LOCATION,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            riseset: RiseSetConfig::default(),
            gulika_table: GulikaTable::default(),
            transition: TransitionConfig::default(),
            include_masa: true,
        }
    }
}

impl PanchangConfig {
    pub fn with_location(self, location: GeoPosition) -> Self {
        Self { location, ..self }
    }

    pub fn with_utc_offset_minutes(self, utc_offset_minutes: i32) -> Self {
        Self {
            utc_offset_minutes,
            ..self
        }
    }

    /// Check every field; the pipeline calls this before computing.
    pub fn validate(&self) -> Result<(), SearchError> {
        let loc = self.location;
        GeoPosition::new(loc.latitude_deg, loc.longitude_deg, loc.elevation_m)?;
        self.utc_offset()?;
        let refraction = self.riseset.refraction_arcmin;
        if !(0.0..=120.0).contains(&refraction) {
            return Err(SearchError::InvalidConfig(format!(
                "refraction_arcmin must be in [0, 120], got {refraction}"
            )));
        }
        self.transition.validate()
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, SearchError> {
        Ok(offset_from_minutes(self.utc_offset_minutes)?)
    }

    /// Built-in ephemeris using the configured ayanamsha.
    pub fn ephemeris(&self) -> AnalyticEphemeris {
        AnalyticEphemeris::new(self.ayanamsha_system)
    }

    pub fn muhurta_table(&self) -> MuhurtaTable {
        MuhurtaTable::new(self.gulika_table)
    }

    /// Parse and validate a JSON configuration.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, SearchError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SearchError::InvalidConfig(format!("config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = PanchangConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.ayanamsha_system, AyanamshaSystem::TrueLahiri);
        assert_eq!(c.utc_offset().unwrap().local_minus_utc(), 330 * 60);
        assert!(c.muhurta_table().validate().is_ok());
    }

    #[test]
    fn bad_location_rejected() {
        let c = PanchangConfig {
            location: GeoPosition {
                latitude_deg: 95.0,
                longitude_deg: 0.0,
                elevation_m: 0.0,
            },
            ..PanchangConfig::default()
        };
        assert!(matches!(c.validate(), Err(SearchError::Vedic(_))));
    }

    #[test]
    fn bad_offset_rejected() {
        let c = PanchangConfig::default().with_utc_offset_minutes(25 * 60);
        assert!(matches!(c.validate(), Err(SearchError::Time(_))));
    }

    #[test]
    fn negative_refraction_rejected() {
        let mut c = PanchangConfig::default();
        c.riseset.refraction_arcmin = -1.0;
        assert!(matches!(c.validate(), Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn legacy_gulika_is_still_valid_config() {
        let c = PanchangConfig {
            gulika_table: GulikaTable::LegacySource,
            ..PanchangConfig::default()
        };
        assert!(c.validate().is_ok());
        assert!(!c.muhurta_table().collisions().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_partial_override() {
        let c = PanchangConfig::from_json_str(
            r#"{ "utc_offset_minutes": 0, "gulika_table": "LegacySource" }"#,
        )
        .unwrap();
        assert_eq!(c.utc_offset_minutes, 0);
        assert_eq!(c.gulika_table, GulikaTable::LegacySource);
        assert_eq!(c.location, DEFAULT_LOCATION);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_invalid_rejected() {
        assert!(matches!(
            PanchangConfig::from_json_str(r#"{ "utc_offset_minutes": 9999 }"#),
            Err(SearchError::Time(_))
        ));
        assert!(matches!(
            PanchangConfig::from_json_str("not json"),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
