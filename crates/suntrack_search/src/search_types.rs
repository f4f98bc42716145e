//! Types for the search primitives.

use suntrack_core::Body;
use suntrack_time::Instant;

/// Outcome of a search: the crossing instant, or `None` when the window
/// holds no crossing.
pub type SearchResult = Option<Instant>;

/// Which way the searched quantity must cross its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Below target before, above after.
    Rise,
    /// Above target before, below after.
    Set,
}

impl Direction {
    /// The body's conventional target altitude for this event.
    pub fn default_altitude_deg(self, body: Body) -> f64 {
        match self {
            Self::Rise => body.model().rise_altitude_deg(),
            Self::Set => body.model().set_altitude_deg(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rise => "rise",
            Self::Set => "set",
        }
    }
}

/// Configuration for the coarse scan and bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Coarse scan step size in days.
    pub step_days: f64,
    /// Maximum bisection iterations (default 40).
    pub max_iterations: u32,
    /// Convergence threshold in days (default 1e-5, ~0.86 s).
    pub convergence_days: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::altitude()
    }
}

impl SearchConfig {
    /// Altitude searches: 30-minute scan step.
    pub fn altitude() -> Self {
        Self {
            step_days: 1.0 / 48.0,
            max_iterations: 40,
            convergence_days: 1e-5,
        }
    }

    /// Hour-angle searches: 30-minute scan step.
    pub fn hour_angle() -> Self {
        Self::altitude()
    }

    /// Phase-angle searches: half-day scan step (~6° of elongation).
    pub fn phase() -> Self {
        Self {
            step_days: 0.5,
            max_iterations: 40,
            convergence_days: 1e-5,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SearchConfig::default().validate().is_ok());
        assert!(SearchConfig::hour_angle().validate().is_ok());
        assert!(SearchConfig::phase().validate().is_ok());
    }

    #[test]
    fn default_is_altitude() {
        let c = SearchConfig::default();
        assert!((c.step_days - 1.0 / 48.0).abs() < 1e-15);
        assert_eq!(c.max_iterations, 40);
        assert!((c.convergence_days - 1e-5).abs() < 1e-20);
    }

    #[test]
    fn rejects_zero_step() {
        let mut c = SearchConfig::default();
        c.step_days = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_nan_step() {
        let mut c = SearchConfig::default();
        c.step_days = f64::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        let mut c = SearchConfig::default();
        c.max_iterations = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_negative_convergence() {
        let mut c = SearchConfig::default();
        c.convergence_days = -1.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn default_altitudes() {
        assert!((Direction::Rise.default_altitude_deg(Body::Moon) - (-0.9)).abs() < 1e-12);
        assert!((Direction::Set.default_altitude_deg(Body::Moon) - (-0.8)).abs() < 1e-12);
        assert!((Direction::Set.default_altitude_deg(Body::Sun) - (-0.833)).abs() < 1e-12);
    }
}
