//! Lunisolar (Hijri) calendar and Jalali date conversion.
//!
//! The lunisolar date is found from a fixed anchor (1 Ramadan 1446 =
//! 2025-02-28) by consuming whole years of 354 or 355 days, then walking
//! the months of the last year. Most month lengths depend on sky
//! conditions on the month's first day, supplied through the
//! [`DayConditions`] trait so the walk can be driven by real astronomy
//! ([`AstronomicalConditions`]) or by a closure in tests.

pub mod conditions;
pub mod error;
pub mod jalali;
pub mod lunisolar;
pub mod lunisolar_types;

pub use conditions::{AstronomicalConditions, DayConditions, MonthConditions, RISE_PROXIMITY_MINUTES};
pub use error::CalendarError;
pub use jalali::JalaliDate;
pub use lunisolar::{
    ANCHOR_DATE, ANCHOR_MONTH_INDEX, ANCHOR_YEAR, is_leap_year, leap_month_index, month_length,
    resolve_date, year_length, year_progress,
};
pub use lunisolar_types::{HIJRI_MONTH_NAMES, LunisolarDate, YearProgress};
