//! Error types for the Sun and Moon services.

use std::error::Error;
use std::fmt::{Display, Formatter};

use suntrack_search::SearchError;
use suntrack_time::TimeError;

/// Errors from the Sun and Moon services.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaseError {
    /// Error from a search primitive.
    Search(SearchError),
    /// Error from civil-time conversion.
    Time(TimeError),
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for BaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Time(e) => Some(e),
        }
    }
}

impl From<SearchError> for BaseError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<TimeError> for BaseError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
