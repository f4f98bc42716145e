//! Position of a moment along a body's above-horizon arc.

use suntrack_time::Instant;

/// Fraction of the rise → set arc completed at `now`, clamped to [0, 1].
///
/// `None` unless both endpoints exist and `rise < set`.
pub fn arc_progress(now: Instant, rise: Option<Instant>, set: Option<Instant>) -> Option<f64> {
    let (rise, set) = (rise?, set?);
    if rise >= set {
        return None;
    }
    let p = (now - rise) / (set - rise);
    p.is_finite().then(|| p.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(d: f64) -> Instant {
        Instant::from_ut_days(d)
    }

    #[test]
    fn midpoint() {
        assert!((arc_progress(t(1.5), Some(t(1.0)), Some(t(2.0))).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn clamped() {
        assert_eq!(arc_progress(t(0.5), Some(t(1.0)), Some(t(2.0))), Some(0.0));
        assert_eq!(arc_progress(t(3.0), Some(t(1.0)), Some(t(2.0))), Some(1.0));
    }

    #[test]
    fn undetermined() {
        assert!(arc_progress(t(1.5), None, Some(t(2.0))).is_none());
        assert!(arc_progress(t(1.5), Some(t(1.0)), None).is_none());
        assert!(arc_progress(t(1.5), Some(t(2.0)), Some(t(1.0))).is_none());
    }
}
