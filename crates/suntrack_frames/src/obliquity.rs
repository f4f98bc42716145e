//! Obliquity of the ecliptic.

use crate::nutation::nutation;

/// Fixed obliquity used when bucketing the Moon into lunar mansions.
pub const MANSION_OBLIQUITY_DEG: f64 = 23.439291;

/// Mean obliquity of the ecliptic in degrees (Meeus 22.2).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity (mean + nutation in obliquity) in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation(t).obliquity_deg
}
