//! Moon service: rise/set, phase, age and mansion for a civil date.

use chrono::NaiveDate;
use chrono_tz::Tz;
use suntrack_core::{Aberration, Body, Observer, compute_equatorial, moon_phase_angle_deg};
use suntrack_frames::{MANSION_OBLIQUITY_DEG, equatorial_to_ecliptic_longitude};
use suntrack_search::{Direction, SearchConfig, previous_new_moon, search_rise_set};
use suntrack_time::{Instant, local_midnight, local_noon};

use crate::error::BaseError;
use crate::mansion::Mansion;
use crate::moon_types::{MansionInfo, MoonInfo, MoonPhaseInfo, PhaseName};

/// Illuminated fraction in percent for a phase angle: (1 − cos φ)/2 × 100.
///
/// `None` unless the angle is finite.
pub fn illuminated_percent(phase_angle_deg: f64) -> Option<f64> {
    phase_angle_deg
        .is_finite()
        .then(|| ((1.0 - phase_angle_deg.to_radians().cos()) / 2.0 * 100.0).clamp(0.0, 100.0))
}

/// Moonrise on `date`: first rise after local midnight, within one day.
pub fn moonrise_for_date(
    date: NaiveDate,
    observer: &Observer,
    zone: Tz,
) -> Result<Option<Instant>, BaseError> {
    let midnight = local_midnight(date, zone)?;
    Ok(search_rise_set(
        Body::Moon,
        observer,
        Direction::Rise,
        midnight,
        1.0,
        &SearchConfig::altitude(),
    )?)
}

/// Mansion of the Moon at `instant` from its topocentric position.
///
/// RA/Dec are rotated back to the ecliptic with a fixed obliquity. `None`
/// when the coordinates are not finite.
pub fn mansion_at(instant: Instant, observer: &Observer) -> Option<MansionInfo> {
    let eq = compute_equatorial(Body::Moon, instant, observer, Aberration::Corrected);
    let lon = equatorial_to_ecliptic_longitude(eq.ra_hours, eq.dec_deg, MANSION_OBLIQUITY_DEG);
    let Some(mansion) = Mansion::from_longitude(lon) else {
        log::debug!("mansion undetermined at {instant}: longitude {lon}");
        return None;
    };
    Some(MansionInfo {
        index: mansion.index(),
        mansion,
        name: mansion.name(),
        ecliptic_longitude_deg: lon,
    })
}

/// Mansion of the Moon at local noon on `date`.
pub fn mansion_for_date(
    date: NaiveDate,
    observer: &Observer,
    zone: Tz,
) -> Result<Option<MansionInfo>, BaseError> {
    Ok(mansion_at(local_noon(date, zone)?, observer))
}

/// Days since the most recent new moon, searching back 30 days.
pub fn moon_age_days(instant: Instant, config: &SearchConfig) -> Result<Option<f64>, BaseError> {
    let new_moon = previous_new_moon(instant, config)?;
    Ok(new_moon.map(|nm| instant - nm))
}

/// Moon information with default search configuration.
pub fn compute_moon_info(
    date: NaiveDate,
    observer: &Observer,
    zone: Tz,
) -> Result<MoonInfo, BaseError> {
    compute_moon_info_with(date, observer, zone, &SearchConfig::altitude(), &SearchConfig::phase())
}

/// Moon information for `date` as seen by `observer`, with civil day
/// boundaries in `zone`.
///
/// Moonrise is searched from local midnight, moonset from local noon,
/// each over one day. Phase, age and mansion are taken at local noon.
pub fn compute_moon_info_with(
    date: NaiveDate,
    observer: &Observer,
    zone: Tz,
    altitude_config: &SearchConfig,
    phase_config: &SearchConfig,
) -> Result<MoonInfo, BaseError> {
    let midnight = local_midnight(date, zone)?;
    let noon = local_noon(date, zone)?;

    let moonrise = search_rise_set(Body::Moon, observer, Direction::Rise, midnight, 1.0, altitude_config)?;
    let moonset = search_rise_set(Body::Moon, observer, Direction::Set, noon, 1.0, altitude_config)?;

    let angle = moon_phase_angle_deg(noon);
    let phase_angle_deg = angle.is_finite().then_some(angle);
    let phase_name = PhaseName::from_angle(angle);
    if phase_name.is_none() {
        log::debug!("moon phase undetermined for {date}: angle {angle}");
    }
    let age_days = moon_age_days(noon, phase_config)?;
    if age_days.is_none() {
        log::debug!("moon age undetermined for {date}");
    }

    let phase = MoonPhaseInfo {
        phase_angle_deg,
        illuminated_percent: illuminated_percent(angle),
        phase_name,
        age_days,
        mansion: mansion_at(noon, observer),
    };

    log::trace!(
        "moon {date}: rise={moonrise:?} set={moonset:?} phase={angle:.2}° ({:?})",
        phase_name
    );

    Ok(MoonInfo {
        date,
        moonrise,
        moonset,
        phase,
    })
}
