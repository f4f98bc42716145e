//! Sun and Moon services for one observer and one civil date.
//!
//! This crate provides:
//! - Sunrise, sunset, solar noon and seven twilight bands
//! - Sky phase classification and arc progress for a moment of the day
//! - Moonrise, moonset, phase angle, illumination, age and phase name
//! - The 28 lunar mansions
//!
//! Absent events are `None` throughout. Nothing in this crate substitutes a
//! numeric default for an undetermined time.

pub mod error;
pub mod mansion;
pub mod moon;
pub mod moon_types;
pub mod progress;
pub mod riseset_types;
pub mod sun;
pub mod sun_types;

pub use error::BaseError;
pub use mansion::{ALL_MANSIONS, MANSION_COUNT, MANSION_SPAN_DEG, Mansion};
pub use moon::{
    compute_moon_info, compute_moon_info_with, illuminated_percent, mansion_at, mansion_for_date,
    moon_age_days, moonrise_for_date,
};
pub use moon_types::{MansionInfo, MoonInfo, MoonPhaseInfo, PhaseName};
pub use progress::arc_progress;
pub use riseset_types::{RiseSetRecord, SunThresholds};
pub use sun::{
    compute_sun_info, compute_sun_info_with, sky_phase_at, solar_noon_altitude_deg,
    sunrise_for_date,
};
pub use sun_types::{SkyPhase, SunInfo, TwilightBand, TwilightKind};
