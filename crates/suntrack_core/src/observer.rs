//! Observer location.

use serde::Serialize;

/// A point on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Height above sea level in meters.
    pub elevation_m: f64,
}

/// Flattening factor b/a of the reference ellipsoid (Meeus ch. 11).
const AXIS_RATIO: f64 = 0.996_647_19;
const EQUATORIAL_RADIUS_M: f64 = 6_378_140.0;

impl Observer {
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        }
    }

    /// Kerman, Iran. Default location of the command-line tool.
    pub fn kerman() -> Self {
        Self::new(30.2849, 57.0834, 1750.0)
    }

    /// Geocentric position terms (ρ sin φ′, ρ cos φ′) in Earth radii.
    pub fn geocentric_terms(&self) -> (f64, f64) {
        let phi = self.latitude_deg.to_radians();
        let u = (AXIS_RATIO * phi.tan()).atan();
        let h = self.elevation_m / EQUATORIAL_RADIUS_M;
        let rho_sin = AXIS_RATIO * u.sin() + h * phi.sin();
        let rho_cos = u.cos() + h * phi.cos();
        (rho_sin, rho_cos)
    }
}
