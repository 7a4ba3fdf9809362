//! Error types for civil-time and Julian Day conversions.

use thiserror::Error;

/// Errors from time conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// UTC offset outside the representable +/-24h window.
    #[error("invalid UTC offset: {minutes} minutes")]
    InvalidOffset { minutes: i32 },
    /// A civil date-time string could not be parsed.
    #[error("cannot parse civil time {input:?}: {message}")]
    Parse { input: String, message: String },
    /// Julian Day is not finite or falls outside the civil calendar range.
    #[error("Julian Day {jd} cannot be represented as a civil time")]
    Unrepresentable { jd: f64 },
    /// Calendar fields do not name a real day.
    #[error("invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl TimeError {
    pub(crate) fn parse(input: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            message: message.into(),
        }
    }
}
