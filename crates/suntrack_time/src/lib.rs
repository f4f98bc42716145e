//! Time handling for the suntrack engine.
//!
//! This crate provides:
//! - [`Instant`], a UT point in time as fractional days since J2000.0
//! - Julian Date ↔ calendar conversions
//! - ΔT (TT − UT) approximation for ephemeris arguments
//! - Greenwich/local sidereal time
//! - Conversion between instants and civil time in a display zone

pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;
pub mod zone;

pub use delta_t::delta_t_seconds;
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
pub use zone::{DEFAULT_ZONE, local_midnight, local_noon, local_time, to_zone};
