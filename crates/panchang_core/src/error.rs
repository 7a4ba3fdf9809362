//! Ephemeris error types.

use thiserror::Error;

/// Errors surfaced by an [`Ephemeris`](crate::Ephemeris) implementation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested Julian Day is outside the provider's valid window
    /// (or is not a finite number).
    #[error("Julian Day {jd} outside ephemeris range [{min}, {max}]")]
    OutOfRange { jd: f64, min: f64, max: f64 },
    /// The underlying capability cannot be reached.
    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
}

impl EphemerisError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
