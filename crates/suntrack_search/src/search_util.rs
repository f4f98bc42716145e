//! Shared coarse scan + bisection root finder.

use suntrack_time::Instant;

use crate::search_types::{Direction, SearchConfig};

/// Bracket test for a crossing of zero in the requested direction.
///
/// `f_early` and `f_late` are in time order. `max_jump` rejects brackets
/// whose values differ by too much, which is how wrapped functions show
/// their discontinuity.
fn is_genuine_crossing(f_early: f64, f_late: f64, direction: Direction, max_jump: Option<f64>) -> bool {
    let signed = match direction {
        Direction::Rise => f_early < 0.0 && f_late >= 0.0,
        Direction::Set => f_early >= 0.0 && f_late < 0.0,
    };
    signed && max_jump.is_none_or(|j| (f_late - f_early).abs() < j)
}

/// Bisect a bracket `[t_a, t_b]` (time order) with `f(t_a) = f_a`.
fn bisect_refinement<F>(f: &F, mut t_a: f64, mut f_a: f64, mut t_b: f64, config: &SearchConfig) -> f64
where
    F: Fn(Instant) -> f64,
{
    for _ in 0..config.max_iterations {
        if (t_b - t_a).abs() < config.convergence_days {
            break;
        }
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f(Instant::from_ut_days(t_mid));
        if (f_a < 0.0) != (f_mid < 0.0) {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }
    0.5 * (t_a + t_b)
}

/// Find the first crossing of zero by `f` in `direction`, scanning from
/// `start` over `limit_days` (backward when negative).
///
/// Forward scans return the earliest crossing in the window, backward scans
/// the latest. The final scan step is clamped to the window end so the
/// result never leaves `[start, start + limit_days]`.
pub(crate) fn find_crossing<F>(
    f: F,
    start: Instant,
    limit_days: f64,
    direction: Direction,
    max_jump: Option<f64>,
    config: &SearchConfig,
) -> Option<Instant>
where
    F: Fn(Instant) -> f64,
{
    if !limit_days.is_finite() || limit_days == 0.0 {
        return None;
    }
    let span = limit_days.abs();
    let sign = limit_days.signum();
    let steps = (span / config.step_days).ceil() as u64;
    let t0 = start.ut_days();

    let mut t_prev = t0;
    let mut f_prev = f(start);
    for i in 1..=steps {
        let offset = (i as f64 * config.step_days).min(span);
        let t_curr = t0 + sign * offset;
        let f_curr = f(Instant::from_ut_days(t_curr));

        let (t_a, f_a, t_b, f_b) = if t_prev < t_curr {
            (t_prev, f_prev, t_curr, f_curr)
        } else {
            (t_curr, f_curr, t_prev, f_prev)
        };
        if is_genuine_crossing(f_a, f_b, direction, max_jump) {
            let t = bisect_refinement(&f, t_a, f_a, t_b, config);
            return Some(Instant::from_ut_days(t));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }
    None
}
