//! Sky conditions that decide whether a month has 30 days.

use chrono::NaiveDate;
use chrono_tz::Tz;
use suntrack_base::{mansion_for_date, moonrise_for_date, sunrise_for_date};
use suntrack_core::Observer;

use crate::error::CalendarError;

/// Largest sunrise/moonrise gap, in minutes, counted as "close".
pub const RISE_PROXIMITY_MINUTES: f64 = 10.0;

/// Conditions observed on a month's first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MonthConditions {
    /// Sunrise and moonrise both occur and are within 10 minutes.
    pub sun_moon_rise_close: bool,
    /// The Moon is in the first mansion at local noon.
    pub first_mansion: bool,
}

impl MonthConditions {
    pub const fn new(sun_moon_rise_close: bool, first_mansion: bool) -> Self {
        Self {
            sun_moon_rise_close,
            first_mansion,
        }
    }

    /// Both conditions hold.
    pub const fn extends_month(&self) -> bool {
        self.sun_moon_rise_close && self.first_mansion
    }
}

/// Source of month conditions for a civil date.
pub trait DayConditions {
    fn conditions_for(&self, date: NaiveDate) -> Result<MonthConditions, CalendarError>;
}

impl<F> DayConditions for F
where
    F: Fn(NaiveDate) -> MonthConditions,
{
    fn conditions_for(&self, date: NaiveDate) -> Result<MonthConditions, CalendarError> {
        Ok(self(date))
    }
}

/// Conditions computed from the Sun and Moon services.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstronomicalConditions {
    pub observer: Observer,
    pub zone: Tz,
}

impl AstronomicalConditions {
    pub fn new(observer: Observer, zone: Tz) -> Self {
        Self { observer, zone }
    }
}

impl DayConditions for AstronomicalConditions {
    fn conditions_for(&self, date: NaiveDate) -> Result<MonthConditions, CalendarError> {
        let sunrise = sunrise_for_date(date, &self.observer, self.zone)?;
        let moonrise = moonrise_for_date(date, &self.observer, self.zone)?;
        let sun_moon_rise_close = match (sunrise, moonrise) {
            (Some(s), Some(m)) => ((s - m).abs() * 1440.0) <= RISE_PROXIMITY_MINUTES,
            _ => false,
        };
        let first_mansion = mansion_for_date(date, &self.observer, self.zone)?
            .is_some_and(|m| m.index == 1);

        log::trace!("conditions {date}: rise_close={sun_moon_rise_close} first_mansion={first_mansion}");
        Ok(MonthConditions::new(sun_moon_rise_close, first_mansion))
    }
}
