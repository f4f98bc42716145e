//! Root-finding searches over altitude, hour angle and lunar phase.
//!
//! This crate provides:
//! - Altitude crossings (rise/set and twilight thresholds)
//! - Hour-angle crossings (transits)
//! - Moon–Sun phase-angle crossings (new/full moon, quarters)
//!
//! All three share one coarse scan plus bisection root finder. A window
//! without a crossing is the ordinary `Ok(None)` outcome; the only error is
//! an invalid [`SearchConfig`].

pub mod altitude;
pub mod error;
pub mod hour_angle;
pub mod lunar_phase;
pub(crate) mod search_util;
pub mod search_types;

pub use altitude::{search_altitude_crossing, search_rise_set};
pub use error::SearchError;
pub use hour_angle::{search_hour_angle_crossing, search_transit};
pub use lunar_phase::{next_full_moon, previous_new_moon, search_phase_angle_crossing};
pub use search_types::{Direction, SearchConfig, SearchResult};
