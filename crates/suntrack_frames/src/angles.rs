//! Angle normalization into the domains used by classification and search.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, +180) degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}

/// Normalize an hour angle or right ascension to [0, 24) hours.
pub fn normalize_24(hours: f64) -> f64 {
    let r = hours.rem_euclid(24.0);
    if r >= 24.0 { 0.0 } else { r }
}

/// Normalize hours to [-12, +12).
pub fn normalize_pm12(hours: f64) -> f64 {
    normalize_24(hours + 12.0) - 12.0
}
