//! ΔT = TT − UT approximation.
//!
//! Piecewise model: Espenak & Meeus polynomial for 1986–2005, a linear
//! fit through the observed IERS values for 2005–2025, linear
//! extrapolation at ~0.1 s/yr afterwards, and the Morrison & Stephenson
//! long-term parabola outside that range.

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2025.0).contains(&year) {
        64.69 + (year - 2005.0) * (69.36 - 64.69) / 20.0
    } else if (2025.0..2100.0).contains(&year) {
        69.36 + 0.1 * (year - 2025.0)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000() {
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 0.1);
    }

    #[test]
    fn year_2025_is_continuous() {
        let before = delta_t_seconds(2024.999);
        let after = delta_t_seconds(2025.0);
        assert!((before - after).abs() < 0.01, "{before} vs {after}");
    }

    #[test]
    fn near_future_is_about_seventy_seconds() {
        let dt = delta_t_seconds(2030.0);
        assert!((69.0..71.0).contains(&dt), "dt = {dt}");
    }
}
