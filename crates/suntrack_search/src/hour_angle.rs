//! Hour-angle crossing search (transits).

use suntrack_core::{Body, Observer, hour_angle_hours};
use suntrack_frames::normalize_pm12;
use suntrack_time::Instant;

use crate::error::SearchError;
use crate::search_types::{Direction, SearchConfig, SearchResult};
use crate::search_util::find_crossing;

/// Largest step of the wrapped difference accepted as a real crossing, in hours.
const MAX_HOUR_JUMP: f64 = 6.0;

/// Find when `body`'s local hour angle passes `target_hours`, searching
/// one full hour-angle cycle of the body from `start`.
///
/// The window is `24 h / mean hour-angle rate`: one solar day for the Sun,
/// about 1.035 days for the Moon, so every target hour angle occurs once.
/// The wrapped difference `(HA − target)` in [−12, 12) must cross upward;
/// its +12 → −12 wrap is never mistaken for a root.
pub fn search_hour_angle_crossing(
    body: Body,
    observer: &Observer,
    target_hours: f64,
    start: Instant,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let window = body.hour_angle_period_days();
    let f = |t: Instant| normalize_pm12(hour_angle_hours(body, t, observer) - target_hours);
    let found = find_crossing(f, start, window, Direction::Rise, Some(MAX_HOUR_JUMP), config);
    if found.is_none() {
        log::debug!(
            "no {} hour angle {target_hours} h within {window:.3} d of {start}",
            body.name()
        );
    }
    Ok(found)
}

/// Upper transit (hour angle 0).
pub fn search_transit(
    body: Body,
    observer: &Observer,
    start: Instant,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    search_hour_angle_crossing(body, observer, 0.0, start, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transit_hour_angle_is_zero() {
        let obs = Observer::kerman();
        let t = search_transit(Body::Sun, &obs, Instant::from_ut_days(9200.0), &SearchConfig::hour_angle())
            .unwrap()
            .expect("sun transits every day");
        let ha = normalize_pm12(hour_angle_hours(Body::Sun, t, &obs));
        assert!(ha.abs() < 1e-3, "HA = {ha}");
    }

    #[test]
    fn moon_every_target_found() {
        let obs = Observer::kerman();
        let start = Instant::from_ut_days(9200.0);
        for target in [0.0, 6.0, 12.0, 18.0, 23.5] {
            let t = search_hour_angle_crossing(Body::Moon, &obs, target, start, &SearchConfig::hour_angle())
                .unwrap();
            assert!(t.is_some(), "target {target} h");
        }
    }

    #[test]
    fn anti_transit_half_day_from_transit() {
        let obs = Observer::new(0.0, 0.0, 0.0);
        let start = Instant::from_ut_days(9200.0);
        let c = SearchConfig::hour_angle();
        let noon = search_transit(Body::Sun, &obs, start, &c).unwrap().unwrap();
        let midnight = search_hour_angle_crossing(Body::Sun, &obs, 12.0, noon, &c)
            .unwrap()
            .unwrap();
        assert!(((midnight - noon) - 0.5).abs() < 0.01);
    }
}
