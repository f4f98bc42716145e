//! Conversion between instants and wall-clock time in a display zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::instant::Instant;

/// Display zone used when the caller does not choose one.
pub const DEFAULT_ZONE: Tz = chrono_tz::Asia::Tehran;

/// Step used to walk out of a DST gap.
const GAP_STEP_MINUTES: i64 = 15;

/// Longest DST gap walked over before giving up.
const MAX_GAP_MINUTES: i64 = 4 * 60;

/// First existing wall-clock time at or after `naive`, earliest offset.
fn resolve_local(naive: NaiveDateTime, zone: Tz) -> Option<DateTime<Tz>> {
    (0..=MAX_GAP_MINUTES / GAP_STEP_MINUTES)
        .map(|k| naive + TimeDelta::minutes(k * GAP_STEP_MINUTES))
        .find_map(|t| zone.from_local_datetime(&t).earliest())
}

/// Instant of a wall-clock time on `date` in `zone`.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant. A time
/// inside a DST gap resolves to the first wall-clock time after the gap,
/// so midnight on a day whose clocks jump at 00:00 is the jump itself.
pub fn local_time(date: NaiveDate, hour: u32, minute: u32, zone: Tz) -> Result<Instant, TimeError> {
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .ok_or(TimeError::InvalidWallClock { hour, minute })?;
    let local = resolve_local(naive, zone).ok_or(TimeError::NonexistentLocalTime(naive))?;
    if local.naive_local() != naive {
        log::debug!("{naive} falls in a DST gap in {}; using {local}", zone.name());
    }
    Ok(Instant::from_utc(&local.with_timezone(&Utc)))
}

/// Local midnight at the start of `date`.
pub fn local_midnight(date: NaiveDate, zone: Tz) -> Result<Instant, TimeError> {
    local_time(date, 0, 0, zone)
}

/// Local noon on `date`.
pub fn local_noon(date: NaiveDate, zone: Tz) -> Result<Instant, TimeError> {
    local_time(date, 12, 0, zone)
}

/// Civil date-time of an instant in `zone`.
pub fn to_zone(instant: Instant, zone: Tz) -> Result<DateTime<Tz>, TimeError> {
    Ok(instant.to_utc()?.with_timezone(&zone))
}
