//! Low-precision solar theory (Meeus ch. 25).
//!
//! Accuracy about 0.01° in longitude, ample for rise/set searches.

use suntrack_frames::normalize_360;

use crate::body::{Aberration, BodyModel, EclipticPosition};

/// Astronomical unit in km.
pub const AU_KM: f64 = 149_597_870.7;

/// Sun rise/set altitude: 34′ refraction plus 16′ semidiameter, rounded.
pub const SUN_HORIZON_DEG: f64 = -0.833;

/// The Sun's position model.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunModel;

/// Geometric (true) solar longitude in degrees and radius vector in AU.
pub fn true_longitude_and_radius(t: f64) -> (f64, f64) {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let m_rad = m.to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let nu = (m + c).to_radians();
    let r = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());
    (normalize_360(l0 + c), r)
}

impl BodyModel for SunModel {
    fn ecliptic_position(&self, t: f64, aberration: Aberration) -> EclipticPosition {
        let (true_lon, r) = true_longitude_and_radius(t);
        let omega = (125.04 - 1934.136 * t).to_radians();
        let mut lon = true_lon - 0.00478 * omega.sin();
        if aberration == Aberration::Corrected {
            lon -= 0.00569;
        }
        EclipticPosition {
            longitude_deg: normalize_360(lon),
            latitude_deg: 0.0,
            distance_km: r * AU_KM,
        }
    }

    fn rise_altitude_deg(&self) -> f64 {
        SUN_HORIZON_DEG
    }

    fn set_altitude_deg(&self) -> f64 {
        SUN_HORIZON_DEG
    }

    fn mean_hour_angle_rate(&self) -> f64 {
        1.0
    }
}
