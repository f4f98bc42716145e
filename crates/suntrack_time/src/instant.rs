//! UT instants as fractional days since J2000.0.
//!
//! `Instant` is the time type used by every search: differences are plain
//! `f64` days, ordering is numeric, and conversion to civil time goes
//! through `chrono`.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::{J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd};

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// A point in time on the UT scale, in days since 2000-01-01T12:00 UT.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Instant {
    ut: f64,
}

impl Instant {
    /// Create an instant from UT days since J2000.0.
    pub const fn from_ut_days(ut: f64) -> Self {
        Self { ut }
    }

    /// Create an instant from a UT Julian Date.
    pub fn from_jd_ut(jd: f64) -> Self {
        Self { ut: jd - J2000_JD }
    }

    /// Create an instant from UTC calendar fields.
    pub fn from_calendar(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let day_frac = day as f64
            + hour as f64 / 24.0
            + minute as f64 / 1440.0
            + second / SECONDS_PER_DAY;
        Self::from_jd_ut(calendar_to_jd(year, month, day_frac))
    }

    /// Create an instant from a chrono UTC date-time.
    pub fn from_utc(dt: &DateTime<Utc>) -> Self {
        let unix_s = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9;
        Self::from_jd_ut(UNIX_EPOCH_JD + unix_s / SECONDS_PER_DAY)
    }

    /// UT days since J2000.0.
    pub const fn ut_days(self) -> f64 {
        self.ut
    }

    /// UT Julian Date.
    pub fn jd_ut(self) -> f64 {
        self.ut + J2000_JD
    }

    /// Approximate decimal Gregorian year, used for ΔT.
    pub fn decimal_year(self) -> f64 {
        2000.0 + self.ut / 365.25
    }

    /// Terrestrial Time days since J2000.0 (UT + ΔT).
    pub fn tt_days(self) -> f64 {
        self.ut + delta_t_seconds(self.decimal_year()) / SECONDS_PER_DAY
    }

    /// Julian centuries of TT since J2000.0, the argument of the
    /// ephemeris polynomials.
    pub fn julian_centuries_tt(self) -> f64 {
        self.tt_days() / DAYS_PER_CENTURY
    }

    /// Shift by a (possibly negative, fractional) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self { ut: self.ut + days }
    }

    /// Convert to a chrono UTC date-time, rounded to the millisecond.
    pub fn to_utc(self) -> Result<DateTime<Utc>, TimeError> {
        let out_of_range = TimeError::OutOfRange { ut_days: self.ut };
        let unix_ms = (self.jd_ut() - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0;
        if !unix_ms.is_finite() || unix_ms.abs() > i64::MAX as f64 / 2.0 {
            return Err(out_of_range);
        }
        let unix_ms = unix_ms.round() as i64;
        let secs = unix_ms.div_euclid(1000);
        let nanos = (unix_ms.rem_euclid(1000) * 1_000_000) as u32;
        DateTime::from_timestamp(secs, nanos).ok_or(out_of_range)
    }
}

impl Sub for Instant {
    type Output = f64;

    /// Elapsed days from `rhs` to `self`.
    fn sub(self, rhs: Instant) -> f64 {
        self.ut - rhs.ut
    }
}

impl Add<f64> for Instant {
    type Output = Instant;

    fn add(self, days: f64) -> Instant {
        self.add_days(days)
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_utc() {
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Err(_) => write!(f, "UT{:+.6}", self.ut),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn j2000_is_zero() {
        let t = Instant::from_calendar(2000, 1, 1, 12, 0, 0.0);
        assert!(t.ut_days().abs() < 1e-9);
    }

    #[test]
    fn subtraction_gives_days() {
        let a = Instant::from_calendar(2025, 3, 1, 0, 0, 0.0);
        let b = Instant::from_calendar(2025, 3, 2, 6, 0, 0.0);
        assert!((b - a - 1.25).abs() < 1e-9);
        assert!(a < b);
    }

    #[test]
    fn chrono_roundtrip() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 20, 2, 15, 30).unwrap();
        let t = Instant::from_utc(&dt);
        assert_eq!(t.to_utc().unwrap(), dt);
    }

    #[test]
    fn chrono_matches_calendar() {
        let dt = Utc.with_ymd_and_hms(1999, 12, 31, 18, 0, 0).unwrap();
        let a = Instant::from_utc(&dt);
        let b = Instant::from_calendar(1999, 12, 31, 18, 0, 0.0);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn nan_instant_is_out_of_range() {
        let t = Instant::from_ut_days(f64::NAN);
        assert!(matches!(t.to_utc(), Err(TimeError::OutOfRange { .. })));
    }

    #[test]
    fn tt_is_ahead_of_ut() {
        let t = Instant::from_calendar(2025, 1, 1, 0, 0, 0.0);
        let lead_s = (t.tt_days() - t.ut_days()) * SECONDS_PER_DAY;
        assert!((68.0..71.0).contains(&lead_s), "ΔT = {lead_s}");
    }

    #[test]
    fn display_is_iso() {
        let t = Instant::from_calendar(2025, 3, 20, 9, 1, 0.0);
        assert_eq!(t.to_string(), "2025-03-20T09:01:00.000Z");
    }
}
