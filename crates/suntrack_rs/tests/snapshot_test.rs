//! End-to-end snapshots for Kerman.

use chrono::{TimeZone, Utc};
use suntrack_rs::*;

fn kerman(y: i32, m: u32, d: u32) -> Snapshot {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    snapshot(&SnapshotRequest::kerman(date)).unwrap()
}

#[test]
fn equinox_eve_display() {
    let snap = kerman(2025, 3, 20);
    let shown = DisplaySnapshot::from(&snap);

    assert_eq!(shown.date, "2025-03-20");
    assert_eq!(shown.day_of_week, "Thursday");
    assert_eq!(shown.zone, "Asia/Tehran");
    assert_eq!(shown.sunrise, "05:45");
    assert_eq!(shown.sunset, "17:53");
    assert!(shown.day_length.starts_with("12 h "), "{}", shown.day_length);
    assert!(shown.solar_noon_altitude.ends_with('°'));
    assert_eq!(shown.bands.len(), 7);
    assert!(shown.bands.iter().all(|b| b.range != UNDETERMINED));

    assert_eq!(shown.moonrise, "23:36");
    assert_eq!(shown.lunisolar_date, "21 Ramadan 1446");
    assert_eq!(shown.jalali_date, "1403/12/30");
    assert_eq!(shown.year_progress, "256 days passed, 36 weeks passed, 98 days remaining");
    assert!(shown.live.is_none());
}

#[test]
fn json_carries_display_strings() {
    let shown = DisplaySnapshot::from(&kerman(2025, 3, 20));
    let json = serde_json::to_string(&shown).unwrap();
    assert!(json.contains(r#""sunrise":"05:45""#), "{json}");
    assert!(json.contains(r#""lunisolar_date":"21 Ramadan 1446""#));
    assert!(!json.contains(r#""live""#));
}

#[test]
fn before_anchor_is_undetermined() {
    let snap = kerman(2025, 1, 1);
    assert!(snap.lunisolar.is_none());
    assert!(snap.year_progress.is_none());
    let shown = DisplaySnapshot::from(&snap);
    assert_eq!(shown.lunisolar_date, UNDETERMINED);
    assert_eq!(shown.year_progress, UNDETERMINED);
    // astronomy is unaffected
    assert_ne!(shown.sunrise, UNDETERMINED);
}

#[test]
fn live_state_at_noon() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    // 08:30 UTC = 12:00 IRST
    let now = Utc.with_ymd_and_hms(2025, 3, 20, 8, 30, 0).unwrap();
    let snap = snapshot(&SnapshotRequest::kerman(date).with_now(now)).unwrap();
    let live = snap.live.unwrap();

    assert_eq!(live.sky_phase, Some(SkyPhase::Day));
    let p = live.sun_arc_progress.unwrap();
    assert!((0.45..0.6).contains(&p), "sun progress {p}");

    let shown = DisplaySnapshot::from(&snap).live.unwrap();
    assert_eq!(shown.time, "12:00");
    assert_eq!(shown.sky_phase, "Day");
}

#[test]
fn polar_day_has_no_sunset() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
    let observer = Observer::new(80.0, 15.0, 0.0);
    let snap = snapshot(&SnapshotRequest::new(date, observer, Tz::UTC)).unwrap();
    assert!(snap.sun.sunset.is_none());
    let shown = DisplaySnapshot::from(&snap);
    assert_eq!(shown.sunset, UNDETERMINED);
    assert_eq!(shown.day_length, UNDETERMINED);
}

#[test]
fn clocks_jumping_at_midnight_still_give_a_snapshot() {
    // Asia/Tehran skipped 00:00-01:00 on 2022-03-22.
    let snap = kerman(2022, 3, 22);
    assert!(snap.sun.sunrise.is_some());
    assert!(snap.sun.sunset.is_some());
    assert!(snap.moon.phase.phase_name.is_some());
    assert!(snap.lunisolar.is_none());
}
