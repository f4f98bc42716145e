//! Types for the lunisolar calendar.

use serde::Serialize;

/// Transliterated Hijri month names, Muharram = index 0.
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Ula",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunisolarDate {
    pub year: i32,
    /// 0-based month index (Muharram = 0 .. Dhu al-Hijjah = 11).
    pub month_index: u8,
    /// 1-based day of month [1, 30].
    pub day: u8,
}

impl LunisolarDate {
    pub fn month_name(&self) -> &'static str {
        HIJRI_MONTH_NAMES[usize::from(self.month_index % 12)]
    }
}

/// Position within the current anchor year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearProgress {
    pub days_passed: u32,
    pub weeks_passed: u32,
    pub days_remaining: u32,
}
