//! Error types for event searches.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from search operations.
///
/// Not finding a crossing is not an error; searches return `Ok(None)`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid search configuration.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SearchError {}
