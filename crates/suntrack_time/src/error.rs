//! Error types for time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

/// Errors from instant ↔ civil time conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Hour/minute pair is not a valid wall-clock time.
    InvalidWallClock { hour: u32, minute: u32 },
    /// The local wall-clock time does not exist in the zone (DST gap).
    NonexistentLocalTime(NaiveDateTime),
    /// The instant cannot be represented as a civil date-time.
    OutOfRange { ut_days: f64 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWallClock { hour, minute } => {
                write!(f, "invalid wall-clock time {hour:02}:{minute:02}")
            }
            Self::NonexistentLocalTime(t) => write!(f, "local time {t} does not exist in zone"),
            Self::OutOfRange { ut_days } => {
                write!(f, "instant out of civil range: {ut_days} days from J2000")
            }
        }
    }
}

impl Error for TimeError {}
