//! Greenwich Mean Sidereal Time and local sidereal time.
//!
//! GMST = ERA + polynomial(T), with the Earth Rotation Angle from IERS
//! Conventions 2010, Eq. 5.15 and the polynomial from Capitaine et al.
//! 2003, Table 2. UT is used in place of UT1; the difference is below
//! one second.

use crate::instant::Instant;

/// Earth Rotation Angle in degrees [0, 360).
///
/// θ = 360° × (0.7790572732640 + 1.00273781191135448 × Du),
/// where Du = days of UT since J2000.0.
pub fn earth_rotation_angle_deg(instant: Instant) -> f64 {
    let du = instant.ut_days();
    // Split the integer day so the large product keeps its fractional bits.
    let frac = du.fract() + 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du;
    (360.0 * frac).rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
pub fn gmst_deg(instant: Instant) -> f64 {
    let t = instant.ut_days() / 36_525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (earth_rotation_angle_deg(instant) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local sidereal time in degrees [0, 360) for an east-positive longitude.
pub fn local_sidereal_time_deg(instant: Instant, longitude_east_deg: f64) -> f64 {
    (gmst_deg(instant) + longitude_east_deg).rem_euclid(360.0)
}
