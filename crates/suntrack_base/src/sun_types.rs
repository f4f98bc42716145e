//! Types produced by the Sun service.

use chrono::NaiveDate;
use serde::Serialize;
use suntrack_time::Instant;

use crate::riseset_types::SunThresholds;

/// The seven twilight and light bands of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TwilightKind {
    /// Civil dawn to civil dusk (−6°).
    Civil,
    /// Nautical dawn to nautical dusk (−12°).
    Nautical,
    /// Astronomical dawn to astronomical dusk (−18°).
    Astronomical,
    /// Sun rising from −6° to +6°.
    GoldenMorning,
    /// Sun setting from +6° to −6°.
    GoldenEvening,
    /// Civil dawn to sunrise.
    BlueMorning,
    /// Sunset to civil dusk.
    BlueEvening,
}

impl TwilightKind {
    pub const ALL: [TwilightKind; 7] = [
        TwilightKind::Civil,
        TwilightKind::Nautical,
        TwilightKind::Astronomical,
        TwilightKind::GoldenMorning,
        TwilightKind::GoldenEvening,
        TwilightKind::BlueMorning,
        TwilightKind::BlueEvening,
    ];

    /// English display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Civil => "Civil Twilight",
            Self::Nautical => "Nautical Twilight",
            Self::Astronomical => "Astronomical Twilight",
            Self::GoldenMorning => "Morning Golden Hour",
            Self::GoldenEvening => "Evening Golden Hour",
            Self::BlueMorning => "Morning Blue Hour",
            Self::BlueEvening => "Evening Blue Hour",
        }
    }

    /// Characteristic solar altitude of the band.
    pub fn threshold_deg(self, thresholds: &SunThresholds) -> f64 {
        match self {
            Self::Civil | Self::BlueMorning | Self::BlueEvening => thresholds.civil_deg,
            Self::Nautical => thresholds.nautical_deg,
            Self::Astronomical => thresholds.astronomical_deg,
            Self::GoldenMorning | Self::GoldenEvening => thresholds.golden_upper_deg,
        }
    }
}

/// A time interval bounded by two solar altitude crossings.
///
/// Either both endpoints are present with `start <= end`, or both are absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TwilightBand {
    pub kind: TwilightKind,
    pub label: &'static str,
    pub threshold_deg: f64,
    pub start: Option<Instant>,
    pub end: Option<Instant>,
}

impl TwilightBand {
    /// Build a band from two crossings in either order.
    pub fn new(
        kind: TwilightKind,
        thresholds: &SunThresholds,
        a: Option<Instant>,
        b: Option<Instant>,
    ) -> Self {
        let (start, end) = match (a, b) {
            (Some(a), Some(b)) if a <= b => (Some(a), Some(b)),
            (Some(a), Some(b)) => (Some(b), Some(a)),
            _ => (None, None),
        };
        Self {
            kind,
            label: kind.label(),
            threshold_deg: kind.threshold_deg(thresholds),
            start,
            end,
        }
    }

    pub fn is_determined(&self) -> bool {
        self.start.is_some()
    }

    /// Band length in days.
    pub fn duration_days(&self) -> Option<f64> {
        Some(self.end? - self.start?)
    }
}

/// Sky state classified from the Sun's altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkyPhase {
    Day,
    GoldenHour,
    BlueHour,
    NauticalTwilight,
    AstronomicalTwilight,
    Night,
}

impl SkyPhase {
    /// Classify a solar altitude. NaN is unclassifiable.
    pub fn from_altitude(alt_deg: f64, thresholds: &SunThresholds) -> Option<Self> {
        if alt_deg.is_nan() {
            return None;
        }
        Some(if alt_deg >= thresholds.golden_upper_deg {
            Self::Day
        } else if alt_deg >= thresholds.horizon_deg {
            Self::GoldenHour
        } else if alt_deg >= thresholds.civil_deg {
            Self::BlueHour
        } else if alt_deg >= thresholds.nautical_deg {
            Self::NauticalTwilight
        } else if alt_deg >= thresholds.astronomical_deg {
            Self::AstronomicalTwilight
        } else {
            Self::Night
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::GoldenHour => "Golden Hour",
            Self::BlueHour => "Blue Hour",
            Self::NauticalTwilight => "Nautical Twilight",
            Self::AstronomicalTwilight => "Astronomical Twilight",
            Self::Night => "Night",
        }
    }
}

/// Everything the Sun service computes for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunInfo {
    pub date: NaiveDate,
    pub sunrise: Option<Instant>,
    pub sunset: Option<Instant>,
    pub solar_noon: Option<Instant>,
    /// `90 − |latitude − declination|` at transit.
    pub solar_noon_altitude_deg: Option<f64>,
    /// Sunset − sunrise, when both exist in that order.
    pub day_length_days: Option<f64>,
    /// One band per [`TwilightKind`], in [`TwilightKind::ALL`] order.
    pub bands: Vec<TwilightBand>,
}

impl SunInfo {
    pub fn band(&self, kind: TwilightKind) -> Option<&TwilightBand> {
        self.bands.iter().find(|b| b.kind == kind)
    }
}
