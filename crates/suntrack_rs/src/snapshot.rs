//! Snapshot assembly.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use suntrack_base::{
    MoonInfo, SkyPhase, SunInfo, arc_progress, compute_moon_info, compute_sun_info, sky_phase_at,
};
use suntrack_calendar::{
    AstronomicalConditions, CalendarError, JalaliDate, LunisolarDate, YearProgress, resolve_date,
    year_progress,
};
use suntrack_core::Observer;
use suntrack_time::{DEFAULT_ZONE, Instant};

use crate::error::SuntrackError;

/// Inputs of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRequest {
    pub date: NaiveDate,
    pub observer: Observer,
    /// Zone that defines the civil day and displayed times.
    pub zone: Tz,
    /// Current moment, for arc progress and sky phase.
    pub now: Option<DateTime<Utc>>,
}

impl SnapshotRequest {
    pub fn new(date: NaiveDate, observer: Observer, zone: Tz) -> Self {
        Self {
            date,
            observer,
            zone,
            now: None,
        }
    }

    /// Kerman observer in Asia/Tehran.
    pub fn kerman(date: NaiveDate) -> Self {
        Self::new(date, Observer::kerman(), DEFAULT_ZONE)
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }
}

/// State of the sky at the request's `now`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveState {
    pub at: Instant,
    pub sun_arc_progress: Option<f64>,
    pub moon_arc_progress: Option<f64>,
    pub sky_phase: Option<SkyPhase>,
}

/// Everything computed for one request. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub observer: Observer,
    pub zone: Tz,
    pub sun: SunInfo,
    pub moon: MoonInfo,
    /// `None` for dates before the calendar anchor.
    pub lunisolar: Option<LunisolarDate>,
    pub jalali: JalaliDate,
    /// `None` for dates before the calendar anchor.
    pub year_progress: Option<YearProgress>,
    pub live: Option<LiveState>,
}

fn before_epoch_as_none<T>(r: Result<T, CalendarError>) -> Result<Option<T>, SuntrackError> {
    match r {
        Ok(v) => Ok(Some(v)),
        Err(CalendarError::BeforeEpoch { date, anchor }) => {
            log::debug!("calendar undetermined: {date} precedes {anchor}");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Compute the full snapshot for `request`.
pub fn snapshot(request: &SnapshotRequest) -> Result<Snapshot, SuntrackError> {
    let SnapshotRequest {
        date,
        observer,
        zone,
        now,
    } = *request;

    let sun = compute_sun_info(date, &observer, zone)?;
    let moon = compute_moon_info(date, &observer, zone)?;

    let conditions = AstronomicalConditions::new(observer, zone);
    let lunisolar = before_epoch_as_none(resolve_date(date, &conditions))?;
    let year_progress = before_epoch_as_none(year_progress(date))?;
    let jalali = JalaliDate::from_gregorian(date);

    let live = now.map(|now| {
        let at = Instant::from_utc(&now);
        LiveState {
            at,
            sun_arc_progress: arc_progress(at, sun.sunrise, sun.sunset),
            moon_arc_progress: arc_progress(at, moon.moonrise, moon.moonset),
            sky_phase: sky_phase_at(at, &observer),
        }
    });

    log::debug!(
        "snapshot {date} at ({}, {}) in {}",
        observer.latitude_deg,
        observer.longitude_deg,
        zone.name()
    );

    Ok(Snapshot {
        date,
        observer,
        zone,
        sun,
        moon,
        lunisolar,
        jalali,
        year_progress,
        live,
    })
}
