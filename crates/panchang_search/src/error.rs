//! Error types for searches and the panchang pipeline.

use panchang_core::EphemerisError;
use panchang_time::TimeError;
use panchang_vedic_base::VedicError;
use thiserror::Error;

/// Errors from boundary searches and panchang assembly.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("vedic calculation failed: {0}")]
    Vedic(#[from] VedicError),
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// The search gave up; `[lo, hi]` is the last bracket it held.
    #[error("{what} search did not converge (last bracket JD {lo:.6} .. {hi:.6})")]
    NonConvergence { what: &'static str, lo: f64, hi: f64 },
    #[error("invalid search input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SearchError {
    /// Relabel a non-convergence with the name of what was being searched.
    pub(crate) fn labelled(self, what: &'static str) -> Self {
        match self {
            Self::NonConvergence { lo, hi, .. } => Self::NonConvergence { what, lo, hi },
            other => other,
        }
    }
}
