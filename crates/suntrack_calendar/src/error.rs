//! Error types for calendar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use suntrack_base::BaseError;

/// Errors from calendar calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The date precedes the calendar anchor.
    BeforeEpoch { date: NaiveDate, anchor: NaiveDate },
    /// Error while evaluating month conditions.
    Base(BaseError),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeforeEpoch { date, anchor } => {
                write!(f, "date {date} is before the calendar anchor {anchor}")
            }
            Self::Base(e) => write!(f, "condition error: {e}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Base(e) => Some(e),
            Self::BeforeEpoch { .. } => None,
        }
    }
}

impl From<BaseError> for CalendarError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}
