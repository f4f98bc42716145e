//! The single formatting boundary: structured snapshot → display strings.

use chrono_tz::Tz;
use serde::Serialize;
use suntrack_base::{MansionInfo, MoonPhaseInfo, TwilightBand};
use suntrack_calendar::{LunisolarDate, YearProgress};
use suntrack_time::{Instant, to_zone};

use crate::snapshot::{LiveState, Snapshot};

/// Shown for every absent value.
pub const UNDETERMINED: &str = "Undetermined";

/// A twilight band ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBand {
    pub label: String,
    pub range: String,
}

/// Live state ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLive {
    pub time: String,
    pub sky_phase: String,
    pub sun_progress: String,
    pub moon_progress: String,
}

/// Every value of a [`Snapshot`] as a display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    pub date: String,
    pub day_of_week: String,
    pub jalali_date: String,
    pub lunisolar_date: String,
    pub location: String,
    pub zone: String,

    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    pub solar_noon_altitude: String,
    pub day_length: String,
    pub bands: Vec<DisplayBand>,

    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    pub phase_angle: String,
    pub moon_age: String,
    pub mansion: String,

    pub year_progress: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<DisplayLive>,
}

fn or_undetermined(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNDETERMINED.to_string())
}

/// `HH:mm` in `zone`.
pub fn format_time(t: Option<Instant>, zone: Tz) -> String {
    or_undetermined(t.and_then(|t| to_zone(t, zone).ok()).map(|dt| dt.format("%H:%M").to_string()))
}

/// `H h M min`, rounded to the minute.
pub fn format_duration(days: Option<f64>) -> String {
    or_undetermined(days.filter(|d| d.is_finite() && *d >= 0.0).map(|d| {
        let minutes = (d * 1440.0).round() as i64;
        format!("{} h {} min", minutes / 60, minutes % 60)
    }))
}

/// `HH:mm – HH:mm`, or undetermined when the band is absent.
pub fn format_band(band: &TwilightBand, zone: Tz) -> DisplayBand {
    let range = match (band.start, band.end) {
        (Some(_), Some(_)) => format!("{} – {}", format_time(band.start, zone), format_time(band.end, zone)),
        _ => UNDETERMINED.to_string(),
    };
    DisplayBand {
        label: band.label.to_string(),
        range,
    }
}

/// `NN% (Phase Name)`.
pub fn format_phase(phase: &MoonPhaseInfo) -> String {
    match (phase.illuminated_percent, phase.phase_name) {
        (Some(percent), Some(name)) => format!("{percent:.0}% ({})", name.name()),
        _ => UNDETERMINED.to_string(),
    }
}

/// `NNN.N°`.
pub fn format_angle(deg: Option<f64>) -> String {
    or_undetermined(deg.map(|d| format!("{d:.1}°")))
}

/// `Name (n of 28)`.
pub fn format_mansion(mansion: Option<&MansionInfo>) -> String {
    or_undetermined(mansion.map(|m| format!("{} ({} of 28)", m.name, m.index)))
}

/// `d MonthName yyyy`.
pub fn format_lunisolar(date: Option<&LunisolarDate>) -> String {
    or_undetermined(date.map(|d| format!("{} {} {}", d.day, d.month_name(), d.year)))
}

pub fn format_year_progress(progress: Option<&YearProgress>) -> String {
    or_undetermined(progress.map(|p| {
        format!(
            "{} days passed, {} weeks passed, {} days remaining",
            p.days_passed, p.weeks_passed, p.days_remaining
        )
    }))
}

fn format_percent(fraction: Option<f64>) -> String {
    or_undetermined(fraction.map(|f| format!("{:.0}%", f * 100.0)))
}

fn format_live(live: &LiveState, zone: Tz) -> DisplayLive {
    DisplayLive {
        time: format_time(Some(live.at), zone),
        sky_phase: or_undetermined(live.sky_phase.map(|p| p.name().to_string())),
        sun_progress: format_percent(live.sun_arc_progress),
        moon_progress: format_percent(live.moon_arc_progress),
    }
}

impl From<&Snapshot> for DisplaySnapshot {
    fn from(s: &Snapshot) -> Self {
        let zone = s.zone;
        let o = &s.observer;
        Self {
            date: s.date.format("%Y-%m-%d").to_string(),
            day_of_week: s.date.format("%A").to_string(),
            jalali_date: s.jalali.to_string(),
            lunisolar_date: format_lunisolar(s.lunisolar.as_ref()),
            location: format!("{:.4}, {:.4} ({:.0} m)", o.latitude_deg, o.longitude_deg, o.elevation_m),
            zone: zone.name().to_string(),

            sunrise: format_time(s.sun.sunrise, zone),
            sunset: format_time(s.sun.sunset, zone),
            solar_noon: format_time(s.sun.solar_noon, zone),
            solar_noon_altitude: or_undetermined(
                s.sun.solar_noon_altitude_deg.map(|a| format!("{a:.2}°")),
            ),
            day_length: format_duration(s.sun.day_length_days),
            bands: s.sun.bands.iter().map(|b| format_band(b, zone)).collect(),

            moonrise: format_time(s.moon.moonrise, zone),
            moonset: format_time(s.moon.moonset, zone),
            moon_phase: format_phase(&s.moon.phase),
            phase_angle: format_angle(s.moon.phase.phase_angle_deg),
            moon_age: or_undetermined(s.moon.phase.age_days.map(|a| format!("{a:.1} days"))),
            mansion: format_mansion(s.moon.phase.mansion.as_ref()),

            year_progress: format_year_progress(s.year_progress.as_ref()),
            live: s.live.as_ref().map(|l| format_live(l, zone)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suntrack_base::{Mansion, PhaseName, SunThresholds, TwilightKind};
    use suntrack_time::DEFAULT_ZONE;

    #[test]
    fn time_in_tehran() {
        // 02:15 UTC = 05:45 IRST
        let t = Instant::from_calendar(2025, 3, 20, 2, 15, 20.0);
        assert_eq!(format_time(Some(t), DEFAULT_ZONE), "05:45");
        assert_eq!(format_time(None, DEFAULT_ZONE), UNDETERMINED);
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Some(0.5)), "12 h 0 min");
        assert_eq!(format_duration(Some(12.0 / 24.0 + 7.4 / 1440.0)), "12 h 7 min");
        assert_eq!(format_duration(None), UNDETERMINED);
        assert_eq!(format_duration(Some(f64::NAN)), UNDETERMINED);
    }

    #[test]
    fn band_ranges() {
        let th = SunThresholds::default();
        let a = Instant::from_calendar(2025, 3, 20, 1, 50, 0.0);
        let b = Instant::from_calendar(2025, 3, 20, 2, 15, 0.0);
        let band = TwilightBand::new(TwilightKind::BlueMorning, &th, Some(a), Some(b));
        let shown = format_band(&band, DEFAULT_ZONE);
        assert_eq!(shown.label, "Morning Blue Hour");
        assert_eq!(shown.range, "05:20 – 05:45");
        let absent = TwilightBand::new(TwilightKind::Astronomical, &th, None, Some(b));
        assert_eq!(format_band(&absent, DEFAULT_ZONE).range, UNDETERMINED);
    }

    #[test]
    fn phase_and_mansion() {
        let phase = MoonPhaseInfo {
            phase_angle_deg: Some(180.7),
            illuminated_percent: Some(99.996),
            phase_name: Some(PhaseName::FullMoon),
            age_days: Some(14.3),
            mansion: None,
        };
        assert_eq!(format_phase(&phase), "100% (Full Moon)");
        assert_eq!(format_angle(phase.phase_angle_deg), "180.7°");
        let unknown = MoonPhaseInfo {
            phase_angle_deg: None,
            illuminated_percent: None,
            phase_name: None,
            ..phase
        };
        assert_eq!(format_phase(&unknown), UNDETERMINED);
        assert_eq!(format_angle(unknown.phase_angle_deg), UNDETERMINED);
        let m = MansionInfo {
            index: 14,
            mansion: Mansion::Sawa,
            name: Mansion::Sawa.name(),
            ecliptic_longitude_deg: 174.97,
        };
        assert_eq!(format_mansion(Some(&m)), "Al-Sawa (14 of 28)");
        assert_eq!(format_mansion(None), UNDETERMINED);
    }

    #[test]
    fn lunisolar_and_progress() {
        let d = LunisolarDate { year: 1446, month_index: 8, day: 21 };
        assert_eq!(format_lunisolar(Some(&d)), "21 Ramadan 1446");
        assert_eq!(format_lunisolar(None), UNDETERMINED);
        let p = YearProgress { days_passed: 20, weeks_passed: 2, days_remaining: 334 };
        assert_eq!(
            format_year_progress(Some(&p)),
            "20 days passed, 2 weeks passed, 334 days remaining"
        );
    }
}
