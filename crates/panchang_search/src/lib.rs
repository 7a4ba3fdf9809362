//! Time searches and the panchang pipeline.
//!
//! This crate provides:
//! - Element boundary search (coarse scan + bisection, both directions)
//! - New-moon search and Amanta masa
//! - Engine configuration (`PanchangConfig`)
//! - One-call panchang assembly for a moment and place

pub mod config;
pub mod error;
pub mod masa;
pub mod panchang;
pub mod panchang_types;
pub mod transition;

pub use config::{DEFAULT_LOCATION, DEFAULT_UTC_OFFSET_MINUTES, PanchangConfig};
pub use error::SearchError;
pub use masa::{find_new_moon, masa_for_moment};
pub use panchang::{
    element_bounds, panchang_at_default_location, panchang_for_civil, panchang_for_moment,
};
pub use panchang_types::{
    KaranaValue, MasaValue, NakshatraValue, PanchangResult, RashiValue, SunAbsence, TithiValue,
    YogaValue,
};
pub use transition::{
    DEFAULT_TOLERANCE_DAYS, SearchDirection, TransitionConfig, coarse_step_days,
    find_angle_crossing, find_element_start, find_transition,
};
