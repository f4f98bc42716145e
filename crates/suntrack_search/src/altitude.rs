//! Altitude crossing search: rise, set and twilight thresholds.

use suntrack_core::{Body, Observer, altitude_deg};
use suntrack_time::Instant;

use crate::error::SearchError;
use crate::search_types::{Direction, SearchConfig, SearchResult};
use crate::search_util::find_crossing;

/// Find when `body`'s geometric altitude crosses `target_alt_deg` in
/// `direction`, within `[start, start + limit_days]`.
///
/// Refraction and semidiameter are expressed through the target (e.g.
/// −0.833° for sunrise). A negative `limit_days` searches backward and
/// returns the latest crossing.
pub fn search_altitude_crossing(
    body: Body,
    observer: &Observer,
    direction: Direction,
    start: Instant,
    limit_days: f64,
    target_alt_deg: f64,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let f = |t: Instant| altitude_deg(body, t, observer) - target_alt_deg;
    let found = find_crossing(f, start, limit_days, direction, None, config);
    if found.is_none() {
        log::debug!(
            "no {} {} crossing of {target_alt_deg}° within {limit_days} d of {start}",
            body.name(),
            direction.name(),
        );
    }
    Ok(found)
}

/// Rise or set of `body` at its conventional horizon altitude.
pub fn search_rise_set(
    body: Body,
    observer: &Observer,
    direction: Direction,
    start: Instant,
    limit_days: f64,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    let target = direction.default_altitude_deg(body);
    search_altitude_crossing(body, observer, direction, start, limit_days, target, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_error() {
        let mut c = SearchConfig::altitude();
        c.step_days = -1.0;
        let r = search_altitude_crossing(
            Body::Sun,
            &Observer::kerman(),
            Direction::Rise,
            Instant::from_ut_days(9200.0),
            1.0,
            -0.833,
            &c,
        );
        assert!(matches!(r, Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn unreachable_target_is_none() {
        // The Sun never climbs to 95°.
        let r = search_altitude_crossing(
            Body::Sun,
            &Observer::kerman(),
            Direction::Rise,
            Instant::from_ut_days(9200.0),
            1.0,
            95.0,
            &SearchConfig::altitude(),
        )
        .unwrap();
        assert!(r.is_none());
    }

    #[test]
    fn rise_set_uses_body_threshold() {
        let obs = Observer::kerman();
        let start = Instant::from_ut_days(9200.0);
        let c = SearchConfig::altitude();
        let a = search_rise_set(Body::Moon, &obs, Direction::Set, start, 1.5, &c).unwrap();
        let b = search_altitude_crossing(Body::Moon, &obs, Direction::Set, start, 1.5, -0.8, &c)
            .unwrap();
        assert_eq!(a, b);
    }
}
