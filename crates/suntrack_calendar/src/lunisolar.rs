//! Month-by-month lunisolar calendar walk from a fixed anchor.

use chrono::{Days, NaiveDate};

use crate::conditions::{DayConditions, MonthConditions};
use crate::error::CalendarError;
use crate::lunisolar_types::{LunisolarDate, YearProgress};

/// Year of the anchor date.
pub const ANCHOR_YEAR: i32 = 1446;

/// Month of the anchor date (Ramadan).
pub const ANCHOR_MONTH_INDEX: u8 = 8;

const RAMADAN: u8 = 8;
const SHABAN: u8 = 7;
const DHU_AL_QADAH: u8 = 10;
const DHU_AL_HIJJAH: u8 = 11;

/// Candidates for the leap day, in order of preference.
const LEAP_CANDIDATES: [u8; 3] = [DHU_AL_HIJJAH, 1, 0];

/// Gregorian date of 1 Ramadan 1446 (Jalali 1403/12/10).
pub const ANCHOR_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 2, 28) {
    Some(d) => d,
    None => panic!("invalid anchor date"),
};

/// Length of `year` in days: 355 in the 11 leap years of each 30-year
/// cycle, else 354.
pub fn year_length(year: i32) -> u16 {
    if is_leap_year(year) { 355 } else { 354 }
}

/// Whether `year` is a leap year of the tabular 30-year cycle.
pub fn is_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}

/// Alternating baseline: even months 30 days, odd months 29.
const fn baseline_length(month_index: u8) -> u8 {
    if month_index % 2 == 0 { 30 } else { 29 }
}

/// Month that receives the leap day: the first candidate that is 29 days
/// in the alternating baseline.
pub fn leap_month_index() -> u8 {
    LEAP_CANDIDATES
        .into_iter()
        .find(|&m| baseline_length(m) == 29)
        .unwrap_or(LEAP_CANDIDATES[0])
}

/// Length of a month whose days do not depend on sky conditions.
fn fixed_month_length(month_index: u8, year: i32) -> Option<u8> {
    match month_index {
        RAMADAN | DHU_AL_QADAH => Some(30),
        SHABAN => Some(29),
        m if is_leap_year(year) && m == leap_month_index() => Some(30),
        _ => None,
    }
}

/// Length of a month in days.
///
/// Ramadan and Dhu al-Qadah have 30 days, Shaban 29, and the leap month of a
/// leap year 30. Every other month has 30 days only when both conditions of
/// its first day hold.
pub fn month_length(month_index: u8, year: i32, conditions: MonthConditions) -> u8 {
    fixed_month_length(month_index, year)
        .unwrap_or(if conditions.extends_month() { 30 } else { 29 })
}

fn days_since_anchor(date: NaiveDate) -> Result<u64, CalendarError> {
    let anchor = ANCHOR_DATE;
    let days = date.signed_duration_since(anchor).num_days();
    u64::try_from(days).map_err(|_| CalendarError::BeforeEpoch { date, anchor })
}

/// Days of the anchor year before the anchor date, in the alternating
/// baseline (Muharram through Shaban).
fn anchor_day_of_year() -> u64 {
    (0..ANCHOR_MONTH_INDEX)
        .map(|m| u64::from(baseline_length(m)))
        .sum()
}

/// Year containing `date` and the 0-based day within it.
///
/// Years run back to back with `year_length(year)` days each. The anchor
/// year is entered partway, at [`anchor_day_of_year`].
fn locate_year(date: NaiveDate) -> Result<(i32, u64), CalendarError> {
    let mut day = days_since_anchor(date)? + anchor_day_of_year();
    let mut year = ANCHOR_YEAR;
    while day >= u64::from(year_length(year)) {
        day -= u64::from(year_length(year));
        year += 1;
    }
    Ok((year, day))
}

/// Lunisolar date of a civil date.
///
/// Whole years are consumed first, so 1 Muharram of consecutive years lie
/// exactly `year_length` days apart. Inside the year the months are walked
/// one by one; Dhu al-Hijjah closes the year and runs to its last day.
/// Conditions are read on the first day of a conditional month, and only
/// when at least 29 of its days have to be walked.
pub fn resolve_date<C>(date: NaiveDate, conditions: &C) -> Result<LunisolarDate, CalendarError>
where
    C: DayConditions + ?Sized,
{
    let (year, day_of_year) = locate_year(date)?;
    let (mut month, mut remaining) = if year == ANCHOR_YEAR {
        (ANCHOR_MONTH_INDEX, day_of_year - anchor_day_of_year())
    } else {
        (0, day_of_year)
    };

    while month != DHU_AL_HIJJAH && remaining >= 29 {
        let len = match fixed_month_length(month, year) {
            Some(len) => len,
            None => {
                let month_start = date - Days::new(remaining);
                month_length(month, year, conditions.conditions_for(month_start)?)
            }
        };
        if remaining < u64::from(len) {
            break;
        }
        log::trace!("walk: {year}-{month:02} has {len} days");
        remaining -= u64::from(len);
        month += 1;
    }

    Ok(LunisolarDate {
        year,
        month_index: month,
        day: (remaining + 1) as u8,
    })
}

/// Days passed, weeks passed and days remaining in the lunisolar year of
/// `date`, using the same years as [`resolve_date`].
pub fn year_progress(date: NaiveDate) -> Result<YearProgress, CalendarError> {
    let (year, day_of_year) = locate_year(date)?;
    let days_passed = day_of_year as u32;
    Ok(YearProgress {
        days_passed,
        weeks_passed: days_passed / 7,
        days_remaining: u32::from(year_length(year)) - days_passed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(value: bool) -> impl Fn(NaiveDate) -> MonthConditions {
        move |_| MonthConditions::new(value, value)
    }

    fn after_anchor(days: u64) -> NaiveDate {
        ANCHOR_DATE + Days::new(days)
    }

    #[test]
    fn year_lengths() {
        assert_eq!(year_length(1446), 354);
        assert_eq!(year_length(1447), 355);
        let leaps = (1441..1471).filter(|&y| is_leap_year(y)).count();
        assert_eq!(leaps, 11);
    }

    #[test]
    fn leap_month_is_dhu_al_hijjah() {
        assert_eq!(leap_month_index(), 11);
    }

    #[test]
    fn fixed_months() {
        let yes = MonthConditions::new(true, true);
        let no = MonthConditions::default();
        assert_eq!(month_length(8, 1446, no), 30);
        assert_eq!(month_length(10, 1446, no), 30);
        assert_eq!(month_length(7, 1446, yes), 29);
        assert_eq!(month_length(11, 1447, no), 30);
        assert_eq!(month_length(11, 1446, no), 29);
    }

    #[test]
    fn conditional_months() {
        assert_eq!(month_length(0, 1447, MonthConditions::new(true, true)), 30);
        assert_eq!(month_length(0, 1447, MonthConditions::new(true, false)), 29);
        assert_eq!(month_length(3, 1447, MonthConditions::new(false, true)), 29);
    }

    #[test]
    fn anchor_is_first_of_ramadan() {
        let d = resolve_date(ANCHOR_DATE, &always(false)).unwrap();
        assert_eq!(d, LunisolarDate { year: 1446, month_index: 8, day: 1 });
    }

    #[test]
    fn before_anchor_is_error() {
        let d = ANCHOR_DATE - Days::new(1);
        assert!(matches!(
            resolve_date(d, &always(false)),
            Err(CalendarError::BeforeEpoch { .. })
        ));
        assert!(year_progress(d).is_err());
    }

    #[test]
    fn walk_with_short_months() {
        let c = always(false);
        let at = |n| resolve_date(after_anchor(n), &c).unwrap();
        assert_eq!(at(29), LunisolarDate { year: 1446, month_index: 8, day: 30 });
        assert_eq!(at(30), LunisolarDate { year: 1446, month_index: 9, day: 1 });
        assert_eq!(at(59), LunisolarDate { year: 1446, month_index: 10, day: 1 });
        assert_eq!(at(89), LunisolarDate { year: 1446, month_index: 11, day: 1 });
        assert_eq!(at(118), LunisolarDate { year: 1447, month_index: 0, day: 1 });
    }

    #[test]
    fn walk_with_long_months() {
        let c = always(true);
        let at = |n| resolve_date(after_anchor(n), &c).unwrap();
        assert_eq!(at(59), LunisolarDate { year: 1446, month_index: 9, day: 30 });
        assert_eq!(at(60), LunisolarDate { year: 1446, month_index: 10, day: 1 });
        // Dhu al-Hijjah takes what is left of the 354-day year.
        assert_eq!(at(117), LunisolarDate { year: 1446, month_index: 11, day: 28 });
        assert_eq!(at(118), LunisolarDate { year: 1447, month_index: 0, day: 1 });
    }

    fn first_of_muharram(year: i32, c: &dyn DayConditions) -> NaiveDate {
        (0..3000)
            .map(after_anchor)
            .find(|&d| {
                resolve_date(d, c).unwrap() == LunisolarDate { year, month_index: 0, day: 1 }
            })
            .unwrap()
    }

    #[test]
    fn years_follow_year_length() {
        let short = always(false);
        let long = always(true);
        for c in [&short as &dyn DayConditions, &long] {
            for year in 1447..1452 {
                let a = first_of_muharram(year, c);
                let b = first_of_muharram(year + 1, c);
                assert_eq!(
                    (b - a).num_days(),
                    i64::from(year_length(year)),
                    "year {year}"
                );
            }
        }
    }

    #[test]
    fn leap_day_lands_in_dhu_al_hijjah() {
        // Eleven short months leave 33 days for Dhu al-Hijjah, 34 in a leap year.
        let c = always(false);
        let last_day = |year| {
            let next = first_of_muharram(year + 1, &c);
            resolve_date(next - Days::new(1), &c).unwrap()
        };
        assert!(is_leap_year(1447));
        assert_eq!(last_day(1447), LunisolarDate { year: 1447, month_index: 11, day: 34 });
        assert_eq!(last_day(1448), LunisolarDate { year: 1448, month_index: 11, day: 33 });
    }

    #[test]
    fn conditions_read_on_month_start() {
        use std::cell::RefCell;
        let seen = RefCell::new(Vec::new());
        let c = |d: NaiveDate| {
            seen.borrow_mut().push(d);
            MonthConditions::default()
        };
        // 1 Dhu al-Qadah: crosses Ramadan (fixed) and Shawwal (conditional).
        resolve_date(after_anchor(59), &c).unwrap();
        // Shawwal starts at anchor + 30.
        assert_eq!(*seen.borrow(), vec![after_anchor(30)]);
    }

    #[test]
    fn early_month_days_need_no_conditions() {
        let c = |_: NaiveDate| -> MonthConditions { panic!("conditions not needed") };
        let d = resolve_date(after_anchor(40), &c);
        // Shawwal day 11: the walk never needs Shawwal's length.
        assert_eq!(d.unwrap(), LunisolarDate { year: 1446, month_index: 9, day: 11 });
    }

    #[test]
    fn progress_through_years() {
        // 1 Ramadan is day 236 of the year.
        let p = year_progress(ANCHOR_DATE).unwrap();
        assert_eq!((p.days_passed, p.weeks_passed, p.days_remaining), (236, 33, 118));
        let p = year_progress(after_anchor(10)).unwrap();
        assert_eq!((p.days_passed, p.weeks_passed, p.days_remaining), (246, 35, 108));
        let p = year_progress(after_anchor(117)).unwrap();
        assert_eq!(p.days_remaining, 1);
        let p = year_progress(after_anchor(118)).unwrap();
        assert_eq!((p.days_passed, p.weeks_passed, p.days_remaining), (0, 0, 355));
    }
}
