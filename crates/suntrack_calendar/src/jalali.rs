//! Gregorian ↔ Jalali (Iranian solar hijri) conversion.
//!
//! Arithmetic 33-year rule; agrees with the astronomical calendar for
//! 1178–1633 AP (1799–2254 CE).

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Cumulative days before each Gregorian month in a common year.
const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// A date in the Jalali calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct JalaliDate {
    pub year: i32,
    /// 1-based month [1, 12].
    pub month: u8,
    /// 1-based day [1, 31].
    pub day: u8,
}

impl JalaliDate {
    /// Convert a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let gy = i64::from(date.year());
        let gm = date.month0() as usize;
        let gd = i64::from(date.day());

        let gy2 = if gm > 1 { gy + 1 } else { gy };
        let mut days = 355_666 + 365 * gy + (gy2 + 3).div_euclid(4) - (gy2 + 99).div_euclid(100)
            + (gy2 + 399).div_euclid(400)
            + gd
            + GREGORIAN_DAYS_BEFORE_MONTH[gm];

        let mut jy = -1595 + 33 * days.div_euclid(12_053);
        days = days.rem_euclid(12_053);
        jy += 4 * days.div_euclid(1461);
        days = days.rem_euclid(1461);
        if days > 365 {
            jy += (days - 1) / 365;
            days = (days - 1) % 365;
        }
        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        Self {
            year: jy as i32,
            month: month as u8,
            day: day as u8,
        }
    }

    /// Convert back to a Gregorian date. `None` for out-of-range fields.
    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        if !(1..=12).contains(&self.month) || !(1..=31).contains(&self.day) {
            return None;
        }
        let jy = i64::from(self.year) + 1595;
        let jm = i64::from(self.month);
        let month_offset = if jm < 7 { (jm - 1) * 31 } else { (jm - 7) * 30 + 186 };
        let mut days = -355_668
            + 365 * jy
            + jy.div_euclid(33) * 8
            + (jy.rem_euclid(33) + 3).div_euclid(4)
            + i64::from(self.day)
            + month_offset;

        let mut gy = 400 * days.div_euclid(146_097);
        days = days.rem_euclid(146_097);
        if days > 36_524 {
            days -= 1;
            gy += 100 * (days / 36_524);
            days %= 36_524;
            if days >= 365 {
                days += 1;
            }
        }
        gy += 4 * (days / 1461);
        days %= 1461;
        if days > 365 {
            gy += (days - 1) / 365;
            days = (days - 1) % 365;
        }
        let gy = i32::try_from(gy).ok()?;
        NaiveDate::from_yo_opt(gy, u32::try_from(days + 1).ok()?)
    }

    /// Persian month name, transliterated.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month.clamp(1, 12) - 1)]
    }
}

impl Display for JalaliDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}
