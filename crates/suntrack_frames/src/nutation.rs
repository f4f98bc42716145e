//! Low-precision nutation in longitude and obliquity.
//!
//! Four leading terms of the IAU 1980 series (Meeus ch. 22), good to
//! about 0.5″ in Δψ and 0.1″ in Δε.

/// Nutation components in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ.
    pub longitude_deg: f64,
    /// Nutation in obliquity Δε.
    pub obliquity_deg: f64,
}

/// Compute nutation for `t` Julian centuries of TT since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    // Longitude of the Moon's ascending node, mean longitudes of Sun and Moon.
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        longitude_deg: dpsi / 3600.0,
        obliquity_deg: deps / 3600.0,
    }
}
