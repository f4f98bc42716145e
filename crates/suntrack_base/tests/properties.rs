//! Property sweeps over dates and latitudes.

use chrono::NaiveDate;
use suntrack_base::{compute_moon_info, compute_sun_info};
use suntrack_core::Observer;
use suntrack_time::DEFAULT_ZONE;

fn dates() -> impl Iterator<Item = NaiveDate> {
    (1..=12).map(|m| NaiveDate::from_ymd_opt(2025, m, 7 + m).unwrap())
}

#[test]
fn sunrise_precedes_sunset_outside_polar_circles() {
    for lat in [-60.0, -45.0, -30.0, -15.0, 0.0, 15.0, 30.0, 45.0, 60.0] {
        let obs = Observer::new(lat, 57.0834, 0.0);
        for d in dates() {
            let info = compute_sun_info(d, &obs, DEFAULT_ZONE).unwrap();
            let (rise, set) = (info.sunrise.unwrap(), info.sunset.unwrap());
            assert!(rise <= set, "lat {lat} {d}");
            assert!(info.day_length_days.unwrap() > 0.0);
        }
    }
}

#[test]
fn present_bands_are_ordered() {
    for lat in [-66.0, -40.0, 0.0, 40.0, 66.0] {
        let obs = Observer::new(lat, 57.0834, 0.0);
        for d in dates() {
            let info = compute_sun_info(d, &obs, DEFAULT_ZONE).unwrap();
            for band in &info.bands {
                match (band.start, band.end) {
                    (Some(s), Some(e)) => assert!(s <= e, "{:?} lat {lat} {d}", band.kind),
                    (None, None) => {}
                    _ => panic!("half-open band {:?} lat {lat} {d}", band.kind),
                }
            }
        }
    }
}

#[test]
fn polar_summer_has_no_sunset() {
    let obs = Observer::new(78.0, 15.0, 0.0);
    let d = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
    let info = compute_sun_info(d, &obs, chrono_tz::Europe::Oslo).unwrap();
    assert!(info.sunrise.is_none());
    assert!(info.sunset.is_none());
    assert!(info.day_length_days.is_none());
}

#[test]
fn moon_ranges() {
    let obs = Observer::kerman();
    for day in 0..30 {
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(day * 11);
        let info = compute_moon_info(d, &obs, DEFAULT_ZONE).unwrap();
        let p = info.phase;
        assert!((0.0..360.0).contains(&p.phase_angle_deg.unwrap()));
        assert!((0.0..=100.0).contains(&p.illuminated_percent.unwrap()));
        let m = p.mansion.expect("mansion");
        assert!((1..=28).contains(&m.index));
        let age = p.age_days.expect("age");
        assert!((0.0..=30.0).contains(&age));
    }
}

#[test]
fn identical_inputs_identical_outputs() {
    let obs = Observer::kerman();
    let d = NaiveDate::from_ymd_opt(2025, 8, 3).unwrap();
    assert_eq!(
        compute_sun_info(d, &obs, DEFAULT_ZONE).unwrap(),
        compute_sun_info(d, &obs, DEFAULT_ZONE).unwrap()
    );
    assert_eq!(
        compute_moon_info(d, &obs, DEFAULT_ZONE).unwrap(),
        compute_moon_info(d, &obs, DEFAULT_ZONE).unwrap()
    );
}
