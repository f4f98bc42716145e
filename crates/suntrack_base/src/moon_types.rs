//! Types produced by the Moon service.

use chrono::NaiveDate;
use serde::Serialize;
use suntrack_time::Instant;

use crate::mansion::Mansion;

/// Eight named phases of the Moon by phase angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    /// Phase name for an angle in degrees; `None` unless finite.
    ///
    /// New and full moon each span 20°, quarters 20°, and the four
    /// intermediate phases 70° each.
    pub fn from_angle(phase_angle_deg: f64) -> Option<Self> {
        if !phase_angle_deg.is_finite() {
            return None;
        }
        let a = suntrack_frames::normalize_360(phase_angle_deg);
        Some(match a {
            a if a < 10.0 => Self::NewMoon,
            a if a < 80.0 => Self::WaxingCrescent,
            a if a < 100.0 => Self::FirstQuarter,
            a if a < 170.0 => Self::WaxingGibbous,
            a if a < 190.0 => Self::FullMoon,
            a if a < 260.0 => Self::WaningGibbous,
            a if a < 280.0 => Self::LastQuarter,
            a if a < 350.0 => Self::WaningCrescent,
            _ => Self::NewMoon,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

/// The Moon's mansion at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MansionInfo {
    /// 1-based mansion number [1, 28].
    pub index: u8,
    pub mansion: Mansion,
    pub name: &'static str,
    /// Ecliptic longitude used for the bucketing, degrees [0, 360).
    pub ecliptic_longitude_deg: f64,
}

/// Phase state of the Moon at local noon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhaseInfo {
    /// Moon − Sun ecliptic longitude in degrees [0, 360).
    pub phase_angle_deg: Option<f64>,
    /// Illuminated fraction of the disk in percent [0, 100].
    pub illuminated_percent: Option<f64>,
    pub phase_name: Option<PhaseName>,
    /// Days since the previous new moon.
    pub age_days: Option<f64>,
    pub mansion: Option<MansionInfo>,
}

/// Everything the Moon service computes for one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonInfo {
    pub date: NaiveDate,
    pub moonrise: Option<Instant>,
    pub moonset: Option<Instant>,
    pub phase: MoonPhaseInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_table() {
        let cases = [
            (0.0, PhaseName::NewMoon),
            (9.99, PhaseName::NewMoon),
            (10.0, PhaseName::WaxingCrescent),
            (85.0, PhaseName::FirstQuarter),
            (120.0, PhaseName::WaxingGibbous),
            (180.0, PhaseName::FullMoon),
            (200.0, PhaseName::WaningGibbous),
            (270.0, PhaseName::LastQuarter),
            (300.0, PhaseName::WaningCrescent),
            (350.0, PhaseName::NewMoon),
            (359.9, PhaseName::NewMoon),
        ];
        for (angle, expected) in cases {
            assert_eq!(PhaseName::from_angle(angle), Some(expected), "angle {angle}");
        }
    }

    #[test]
    fn phase_nan() {
        assert!(PhaseName::from_angle(f64::NAN).is_none());
    }

    #[test]
    fn names() {
        assert_eq!(PhaseName::FullMoon.name(), "Full Moon");
        assert_eq!(PhaseName::WaningCrescent.name(), "Waning Crescent");
    }
}
