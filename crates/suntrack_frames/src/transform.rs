//! Ecliptic ↔ equatorial coordinate transforms.
//!
//! Angles are in degrees; right ascension is returned in hours.

use crate::angles::{normalize_24, normalize_360};

/// Convert ecliptic (λ, β) to equatorial (α hours, δ degrees) for obliquity ε.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let y = lon.sin() * eps.cos() - lat.tan() * eps.sin();
    let x = lon.cos();
    let ra_hours = normalize_24(y.atan2(x).to_degrees() / 15.0);

    let sin_dec = lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin();
    let dec_deg = sin_dec.asin().to_degrees();

    (ra_hours, dec_deg)
}

/// Ecliptic longitude in degrees [0, 360) from right ascension (hours)
/// and declination (degrees).
///
/// λ = atan2(sin α cos ε + tan δ sin ε, cos α). A NaN input yields NaN.
pub fn equatorial_to_ecliptic_longitude(ra_hours: f64, dec_deg: f64, obliquity_deg: f64) -> f64 {
    let ra = (ra_hours * 15.0).to_radians();
    let dec = dec_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let y = ra.sin() * eps.cos() + dec.tan() * eps.sin();
    let x = ra.cos();
    let lambda = y.atan2(x).to_degrees();
    if lambda.is_nan() {
        return lambda;
    }
    normalize_360(lambda)
}
