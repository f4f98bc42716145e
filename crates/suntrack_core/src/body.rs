//! Bodies and the capability each one provides to the engine.

use serde::Serialize;

use crate::moon::MoonModel;
use crate::sun::SunModel;

/// Whether the annual aberration is applied to apparent positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Aberration {
    /// Nutation only.
    None,
    /// Nutation plus annual aberration.
    #[default]
    Corrected,
}

/// Geocentric apparent ecliptic position of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipticPosition {
    /// Apparent ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

/// Position theory and rise/set conventions of a body.
///
/// The engine never branches on the body itself; everything body-specific
/// is reached through this trait.
pub trait BodyModel: Send + Sync {
    /// Geocentric apparent ecliptic position.
    ///
    /// `t` = Julian centuries of TT since J2000.0.
    fn ecliptic_position(&self, t: f64, aberration: Aberration) -> EclipticPosition;

    /// Default target altitude for the rising event, in degrees.
    fn rise_altitude_deg(&self) -> f64;

    /// Default target altitude for the setting event, in degrees.
    fn set_altitude_deg(&self) -> f64;

    /// Mean rate of the local hour angle relative to a solar day
    /// (hours of hour angle per hour of UT).
    fn mean_hour_angle_rate(&self) -> f64;

    /// Equatorial horizontal parallax in degrees at the given distance.
    fn horizontal_parallax_deg(&self, distance_km: f64) -> f64 {
        (EARTH_EQUATORIAL_RADIUS_KM / distance_km).asin().to_degrees()
    }
}

/// Equatorial radius of the Earth in km (IAU 1976, Meeus ch. 11).
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;

static SUN_MODEL: SunModel = SunModel;
static MOON_MODEL: MoonModel = MoonModel;

/// Bodies supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// All supported bodies.
    pub const ALL: [Body; 2] = [Body::Sun, Body::Moon];

    /// The model backing this body.
    pub fn model(self) -> &'static dyn BodyModel {
        match self {
            Self::Sun => &SUN_MODEL,
            Self::Moon => &MOON_MODEL,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }

    /// Length in days of one full cycle of the local hour angle.
    pub fn hour_angle_period_days(self) -> f64 {
        1.0 / self.model().mean_hour_angle_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_period_is_one_day() {
        assert!((Body::Sun.hour_angle_period_days() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn moon_period_is_lunar_day() {
        let p = Body::Moon.hour_angle_period_days();
        assert!((p - 1.035).abs() < 0.001, "lunar day = {p}");
    }

    #[test]
    fn rise_set_defaults() {
        assert!((Body::Sun.model().rise_altitude_deg() - (-0.833)).abs() < 1e-12);
        assert!((Body::Sun.model().set_altitude_deg() - (-0.833)).abs() < 1e-12);
        assert!((Body::Moon.model().rise_altitude_deg() - (-0.9)).abs() < 1e-12);
        assert!((Body::Moon.model().set_altitude_deg() - (-0.8)).abs() < 1e-12);
    }

    #[test]
    fn sun_parallax() {
        let p = Body::Sun.model().horizontal_parallax_deg(149_597_870.7) * 3600.0;
        assert!((p - 8.794).abs() < 0.01, "π = {p}″");
    }

    #[test]
    fn names() {
        assert_eq!(Body::Sun.name(), "Sun");
        assert_eq!(Body::Moon.name(), "Moon");
        assert_eq!(Body::ALL.len(), 2);
    }
}
