//! Error type for snapshot assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use suntrack_base::BaseError;
use suntrack_calendar::CalendarError;
use suntrack_time::TimeError;

/// Errors from [`snapshot`](crate::snapshot).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SuntrackError {
    Base(BaseError),
    Calendar(CalendarError),
    Time(TimeError),
}

impl Display for SuntrackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(e) => write!(f, "{e}"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SuntrackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Base(e) => Some(e),
            Self::Calendar(e) => Some(e),
            Self::Time(e) => Some(e),
        }
    }
}

impl From<BaseError> for SuntrackError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}

impl From<CalendarError> for SuntrackError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<TimeError> for SuntrackError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
