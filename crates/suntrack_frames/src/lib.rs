//! Frame conversion helpers for the Sun/Moon ephemeris.
//!
//! Provides angle normalization, the obliquity of the ecliptic, a
//! low-precision nutation model, and ecliptic ↔ equatorial transforms.

pub mod angles;
pub mod nutation;
pub mod obliquity;
pub mod transform;

pub use angles::{normalize_24, normalize_360, normalize_pm12, normalize_pm180};
pub use nutation::{Nutation, nutation};
pub use obliquity::{MANSION_OBLIQUITY_DEG, mean_obliquity_deg, true_obliquity_deg};
pub use transform::{ecliptic_to_equatorial, equatorial_to_ecliptic_longitude};
