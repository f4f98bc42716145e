//! Sun service: sunrise, sunset, solar noon and twilight bands.
//!
//! Morning events are searched forward from local midnight and evening
//! events forward from local noon, each over one day. This keeps every
//! morning event on the requested civil date and lets evening events run
//! past midnight at high latitudes instead of being lost.

use chrono::NaiveDate;
use chrono_tz::Tz;
use suntrack_core::{Aberration, Body, Observer, altitude_deg, compute_equatorial};
use suntrack_search::{
    Direction, SearchConfig, SearchError, search_altitude_crossing, search_transit,
};
use suntrack_time::{Instant, local_midnight, local_noon};

use crate::error::BaseError;
use crate::riseset_types::{RiseSetRecord, SunThresholds};
use crate::sun_types::{SkyPhase, SunInfo, TwilightBand, TwilightKind};

/// Noon altitude `90 − |latitude − declination|`, `None` when the inputs
/// do not give an angle in [−90, 90].
pub fn solar_noon_altitude_deg(latitude_deg: f64, declination_deg: f64) -> Option<f64> {
    let alt = 90.0 - (latitude_deg - declination_deg).abs();
    (alt.is_finite() && (-90.0..=90.0).contains(&alt)).then_some(alt)
}

/// Sunrise on `date`, searched from local midnight over one day.
pub fn sunrise_for_date(
    date: NaiveDate,
    observer: &Observer,
    zone: Tz,
) -> Result<Option<Instant>, BaseError> {
    let midnight = local_midnight(date, zone)?;
    let target = SunThresholds::default().horizon_deg;
    Ok(search_altitude_crossing(
        Body::Sun,
        observer,
        Direction::Rise,
        midnight,
        1.0,
        target,
        &SearchConfig::altitude(),
    )?)
}

/// Sky phase from the Sun's altitude at `instant`.
pub fn sky_phase_at(instant: Instant, observer: &Observer) -> Option<SkyPhase> {
    SkyPhase::from_altitude(altitude_deg(Body::Sun, instant, observer), &SunThresholds::default())
}

/// Sun information with default thresholds and search configuration.
pub fn compute_sun_info(date: NaiveDate, observer: &Observer, zone: Tz) -> Result<SunInfo, BaseError> {
    compute_sun_info_with(date, observer, zone, &SunThresholds::default(), &SearchConfig::altitude())
}

/// Paired morning/evening searches for one date.
struct DaySearch<'a> {
    observer: &'a Observer,
    midnight: Instant,
    noon: Instant,
    config: &'a SearchConfig,
}

impl DaySearch<'_> {
    fn morning(&self, target_deg: f64) -> Result<Option<Instant>, SearchError> {
        search_altitude_crossing(
            Body::Sun,
            self.observer,
            Direction::Rise,
            self.midnight,
            1.0,
            target_deg,
            self.config,
        )
    }

    fn evening(&self, target_deg: f64) -> Result<Option<Instant>, SearchError> {
        search_altitude_crossing(
            Body::Sun,
            self.observer,
            Direction::Set,
            self.noon,
            1.0,
            target_deg,
            self.config,
        )
    }
}

/// Sun information for `date` as seen by `observer`, with civil day
/// boundaries in `zone`.
pub fn compute_sun_info_with(
    date: NaiveDate,
    observer: &Observer,
    zone: Tz,
    thresholds: &SunThresholds,
    config: &SearchConfig,
) -> Result<SunInfo, BaseError> {
    let day = DaySearch {
        observer,
        midnight: local_midnight(date, zone)?,
        noon: local_noon(date, zone)?,
        config,
    };

    let sunrise = day.morning(thresholds.horizon_deg)?;
    let sunset = day.evening(thresholds.horizon_deg)?;
    let civil_dawn = day.morning(thresholds.civil_deg)?;
    let civil_dusk = day.evening(thresholds.civil_deg)?;

    let solar_noon = search_transit(Body::Sun, observer, day.midnight, config)?;
    let solar_noon_altitude_deg = solar_noon.and_then(|t| {
        let dec = compute_equatorial(Body::Sun, t, observer, Aberration::Corrected).dec_deg;
        solar_noon_altitude_deg(observer.latitude_deg, dec)
    });
    if solar_noon_altitude_deg.is_none() {
        log::debug!("solar noon altitude undetermined for {date}");
    }

    let mut bands = Vec::with_capacity(TwilightKind::ALL.len());
    for kind in TwilightKind::ALL {
        let (a, b) = match kind {
            TwilightKind::Civil => (civil_dawn, civil_dusk),
            TwilightKind::Nautical => (
                day.morning(thresholds.nautical_deg)?,
                day.evening(thresholds.nautical_deg)?,
            ),
            TwilightKind::Astronomical => (
                day.morning(thresholds.astronomical_deg)?,
                day.evening(thresholds.astronomical_deg)?,
            ),
            TwilightKind::GoldenMorning => {
                (civil_dawn, day.morning(thresholds.golden_upper_deg)?)
            }
            TwilightKind::GoldenEvening => {
                (day.evening(thresholds.golden_upper_deg)?, civil_dusk)
            }
            TwilightKind::BlueMorning => (civil_dawn, sunrise),
            TwilightKind::BlueEvening => (sunset, civil_dusk),
        };
        bands.push(TwilightBand::new(kind, thresholds, a, b));
    }

    let day_length_days = RiseSetRecord::new(sunrise, sunset).duration_days();

    log::trace!("sun {date}: rise={sunrise:?} set={sunset:?} noon={solar_noon:?}");

    Ok(SunInfo {
        date,
        sunrise,
        sunset,
        solar_noon,
        solar_noon_altitude_deg,
        day_length_days,
        bands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_altitude_formula() {
        assert!((solar_noon_altitude_deg(30.0, 0.0).unwrap() - 60.0).abs() < 1e-12);
        assert!((solar_noon_altitude_deg(30.0, 23.4).unwrap() - 83.4).abs() < 1e-12);
        assert!((solar_noon_altitude_deg(-30.0, 23.4).unwrap() - 36.6).abs() < 1e-12);
    }

    #[test]
    fn noon_altitude_undetermined() {
        assert!(solar_noon_altitude_deg(f64::NAN, 10.0).is_none());
        assert!(solar_noon_altitude_deg(150.0, -40.0).is_none());
    }

    #[test]
    fn sky_phase_defined_for_kerman() {
        let obs = Observer::kerman();
        for i in 0..24 {
            assert!(sky_phase_at(Instant::from_ut_days(9200.0 + i as f64 / 24.0), &obs).is_some());
        }
    }
}
