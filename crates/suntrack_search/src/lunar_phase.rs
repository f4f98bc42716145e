//! Moon–Sun phase-angle crossing search.

use suntrack_core::moon::SYNODIC_MONTH_DAYS;
use suntrack_core::moon_phase_angle_deg;
use suntrack_frames::normalize_pm180;
use suntrack_time::Instant;

use crate::error::SearchError;
use crate::search_types::{Direction, SearchConfig, SearchResult};
use crate::search_util::find_crossing;

/// Largest step of the wrapped difference accepted as a real crossing, in degrees.
const MAX_PHASE_JUMP: f64 = 90.0;

/// Find when the phase angle passes `target_deg`, scanning `limit_days`
/// from `start` (backward when negative).
///
/// The phase angle only increases, so the wrapped difference in
/// [−180, 180) must cross upward.
pub fn search_phase_angle_crossing(
    target_deg: f64,
    start: Instant,
    limit_days: f64,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let f = |t: Instant| normalize_pm180(moon_phase_angle_deg(t) - target_deg);
    let found = find_crossing(f, start, limit_days, Direction::Rise, Some(MAX_PHASE_JUMP), config);
    if found.is_none() {
        log::debug!("no phase angle {target_deg}° within {limit_days} d of {start}");
    }
    Ok(found)
}

/// Most recent new moon at or before `instant`, within 30 days.
pub fn previous_new_moon(instant: Instant, config: &SearchConfig) -> Result<SearchResult, SearchError> {
    search_phase_angle_crossing(0.0, instant, -30.0, config)
}

/// Next full moon after `instant`, within one synodic month.
pub fn next_full_moon(instant: Instant, config: &SearchConfig) -> Result<SearchResult, SearchError> {
    search_phase_angle_crossing(180.0, instant, SYNODIC_MONTH_DAYS, config)
}
