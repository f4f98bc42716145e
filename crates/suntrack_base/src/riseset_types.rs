//! Rise/set records and solar altitude thresholds.

use serde::Serialize;
use suntrack_time::Instant;

/// Rise and set of one body on one civil date.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RiseSetRecord {
    pub rise: Option<Instant>,
    pub set: Option<Instant>,
}

impl RiseSetRecord {
    pub fn new(rise: Option<Instant>, set: Option<Instant>) -> Self {
        Self { rise, set }
    }

    /// Set − rise in days, when both exist and rise comes first.
    pub fn duration_days(&self) -> Option<f64> {
        match (self.rise, self.set) {
            (Some(r), Some(s)) if r <= s => Some(s - r),
            _ => None,
        }
    }
}

/// Solar altitude thresholds in degrees for events, bands and sky phases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunThresholds {
    /// Sunrise/sunset: 34′ refraction + 16′ semidiameter. Default: −0.833.
    pub horizon_deg: f64,
    /// Civil twilight. Default: −6.
    pub civil_deg: f64,
    /// Nautical twilight. Default: −12.
    pub nautical_deg: f64,
    /// Astronomical twilight. Default: −18.
    pub astronomical_deg: f64,
    /// Upper edge of the golden hour. Default: +6.
    pub golden_upper_deg: f64,
}

impl Default for SunThresholds {
    fn default() -> Self {
        Self {
            horizon_deg: -0.833,
            civil_deg: -6.0,
            nautical_deg: -12.0,
            astronomical_deg: -18.0,
            golden_upper_deg: 6.0,
        }
    }
}
