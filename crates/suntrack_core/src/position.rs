//! Apparent topocentric coordinates and the quantities searched on.

use serde::Serialize;
use suntrack_frames::{
    ecliptic_to_equatorial, normalize_24, normalize_360, nutation, true_obliquity_deg,
};
use suntrack_time::{Instant, local_sidereal_time_deg};

use crate::body::{Aberration, Body};
use crate::observer::Observer;

/// Apparent equatorial coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquatorialCoordinates {
    /// Right ascension in hours [0, 24).
    pub ra_hours: f64,
    /// Declination in degrees.
    pub dec_deg: f64,
    /// Distance from the observer in km.
    pub distance_km: f64,
}

/// Apparent local sidereal time in degrees for the observer's longitude.
fn apparent_lst_deg(instant: Instant, observer: &Observer, t: f64) -> f64 {
    let eps = true_obliquity_deg(t).to_radians();
    let eq_equinoxes = nutation(t).longitude_deg * eps.cos();
    normalize_360(local_sidereal_time_deg(instant, observer.longitude_deg) + eq_equinoxes)
}

/// Geocentric apparent equatorial coordinates.
pub fn geocentric_equatorial(
    body: Body,
    instant: Instant,
    aberration: Aberration,
) -> EquatorialCoordinates {
    let t = instant.julian_centuries_tt();
    let pos = body.model().ecliptic_position(t, aberration);
    let (ra_hours, dec_deg) =
        ecliptic_to_equatorial(pos.longitude_deg, pos.latitude_deg, true_obliquity_deg(t));
    EquatorialCoordinates {
        ra_hours,
        dec_deg,
        distance_km: pos.distance_km,
    }
}

/// Apparent topocentric equatorial coordinates of `body` for `observer`.
///
/// The observer's geocentric position (Meeus ch. 11) is subtracted from
/// the body's geocentric position in the true equatorial frame of date,
/// which is the rectangular form of the ch. 40 parallax correction.
pub fn compute_equatorial(
    body: Body,
    instant: Instant,
    observer: &Observer,
    aberration: Aberration,
) -> EquatorialCoordinates {
    let geo = geocentric_equatorial(body, instant, aberration);
    let t = instant.julian_centuries_tt();

    // Meeus ch. 40, in units of the geocentric distance.
    let sin_pi = body.model().horizontal_parallax_deg(geo.distance_km).to_radians().sin();
    let theta = apparent_lst_deg(instant, observer, t);
    let h = (theta - geo.ra_hours * 15.0).to_radians();
    let dec = geo.dec_deg.to_radians();
    let (rho_sin, rho_cos) = observer.geocentric_terms();

    let x = dec.cos() * h.cos() - rho_cos * sin_pi;
    let y = dec.cos() * h.sin();
    let z = dec.sin() - rho_sin * sin_pi;
    let r = (x * x + y * y + z * z).sqrt();

    EquatorialCoordinates {
        ra_hours: normalize_24((theta - y.atan2(x).to_degrees()) / 15.0),
        dec_deg: (z / r).asin().to_degrees(),
        distance_km: r * geo.distance_km,
    }
}

/// Local hour angle in degrees [0, 360) of a position of date.
fn hour_angle_deg(coords: &EquatorialCoordinates, instant: Instant, observer: &Observer) -> f64 {
    let t = instant.julian_centuries_tt();
    normalize_360(apparent_lst_deg(instant, observer, t) - coords.ra_hours * 15.0)
}

/// Geometric topocentric altitude in degrees. Refraction is not applied;
/// it belongs in the target altitude of a search.
pub fn altitude_deg(body: Body, instant: Instant, observer: &Observer) -> f64 {
    let coords = compute_equatorial(body, instant, observer, Aberration::Corrected);
    let h = hour_angle_deg(&coords, instant, observer).to_radians();
    let phi = observer.latitude_deg.to_radians();
    let dec = coords.dec_deg.to_radians();
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos())
        .clamp(-1.0, 1.0)
        .asin()
        .to_degrees()
}

/// Local hour angle in hours [0, 24), topocentric.
pub fn hour_angle_hours(body: Body, instant: Instant, observer: &Observer) -> f64 {
    let coords = compute_equatorial(body, instant, observer, Aberration::Corrected);
    normalize_24(hour_angle_deg(&coords, instant, observer) / 15.0)
}

/// Geocentric Moon − Sun apparent ecliptic longitude in degrees [0, 360).
///
/// 0 is new moon, 90 first quarter, 180 full, 270 last quarter.
pub fn moon_phase_angle_deg(instant: Instant) -> f64 {
    let t = instant.julian_centuries_tt();
    let moon = Body::Moon.model().ecliptic_position(t, Aberration::Corrected);
    let sun = Body::Sun.model().ecliptic_position(t, Aberration::Corrected);
    normalize_360(moon.longitude_deg - sun.longitude_deg)
}
