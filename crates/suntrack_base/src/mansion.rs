//! The 28 lunar mansions (manazil al-qamar).
//!
//! The ecliptic is divided into 28 equal sectors of 360/28 ≈ 12.857°
//! starting at the equinox. Mansions are numbered 1..=28.

use serde::Serialize;
use suntrack_frames::normalize_360;

/// Number of mansions.
pub const MANSION_COUNT: u8 = 28;

/// Span of one mansion in degrees.
pub const MANSION_SPAN_DEG: f64 = 360.0 / 28.0;

/// The 28 lunar mansions from Al-Sharatain to Al-Risha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mansion {
    Sharatain,
    Butain,
    Thurayya,
    Dabaran,
    Haqa,
    Hana,
    Dhira,
    Nathra,
    Tarf,
    Jabha,
    Zubra,
    Sarfa,
    Awwa,
    Sawa,
    Ghafr,
    Zubana,
    Iklil,
    Qalb,
    Shawla,
    Naaim,
    Balda,
    SadDhabih,
    SadBula,
    SadSuud,
    SadAkhbiya,
    Muqaddam,
    Muakhkhar,
    Risha,
}

/// All 28 mansions in order (index 0 = Al-Sharatain).
pub const ALL_MANSIONS: [Mansion; 28] = [
    Mansion::Sharatain,
    Mansion::Butain,
    Mansion::Thurayya,
    Mansion::Dabaran,
    Mansion::Haqa,
    Mansion::Hana,
    Mansion::Dhira,
    Mansion::Nathra,
    Mansion::Tarf,
    Mansion::Jabha,
    Mansion::Zubra,
    Mansion::Sarfa,
    Mansion::Awwa,
    Mansion::Sawa,
    Mansion::Ghafr,
    Mansion::Zubana,
    Mansion::Iklil,
    Mansion::Qalb,
    Mansion::Shawla,
    Mansion::Naaim,
    Mansion::Balda,
    Mansion::SadDhabih,
    Mansion::SadBula,
    Mansion::SadSuud,
    Mansion::SadAkhbiya,
    Mansion::Muqaddam,
    Mansion::Muakhkhar,
    Mansion::Risha,
];

impl Mansion {
    /// Transliterated Arabic name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sharatain => "Al-Sharatain",
            Self::Butain => "Al-Butain",
            Self::Thurayya => "Al-Thurayya",
            Self::Dabaran => "Al-Dabaran",
            Self::Haqa => "Al-Haqa",
            Self::Hana => "Al-Hana",
            Self::Dhira => "Al-Dhira",
            Self::Nathra => "Al-Nathra",
            Self::Tarf => "Al-Tarf",
            Self::Jabha => "Al-Jabha",
            Self::Zubra => "Al-Zubra",
            Self::Sarfa => "Al-Sarfa",
            Self::Awwa => "Al-Awwa",
            Self::Sawa => "Al-Sawa",
            Self::Ghafr => "Al-Ghafr",
            Self::Zubana => "Al-Zubana",
            Self::Iklil => "Al-Iklil",
            Self::Qalb => "Al-Qalb",
            Self::Shawla => "Al-Shawla",
            Self::Naaim => "Al-Naaim",
            Self::Balda => "Al-Balda",
            Self::SadDhabih => "Sad al-Dhabih",
            Self::SadBula => "Sad Bula",
            Self::SadSuud => "Sad al-Suud",
            Self::SadAkhbiya => "Sad al-Akhbiya",
            Self::Muqaddam => "Al-Muqaddam",
            Self::Muakhkhar => "Al-Muakhkhar",
            Self::Risha => "Al-Risha",
        }
    }

    /// 1-based mansion number (Al-Sharatain = 1 .. Al-Risha = 28).
    pub const fn index(self) -> u8 {
        self as u8 + 1
    }

    /// All mansions in order.
    pub const fn all() -> &'static [Mansion; 28] {
        &ALL_MANSIONS
    }

    /// Mansion for a 1-based number; `None` outside 1..=28.
    pub fn from_index(n: u8) -> Option<Self> {
        if n == 0 {
            return None;
        }
        ALL_MANSIONS.get(usize::from(n - 1)).copied()
    }

    /// Mansion containing an ecliptic longitude; `None` for NaN.
    pub fn from_longitude(lon_deg: f64) -> Option<Self> {
        if !lon_deg.is_finite() {
            return None;
        }
        let lon = normalize_360(lon_deg);
        let n = ((lon / MANSION_SPAN_DEG).floor() as i64 + 1).clamp(1, i64::from(MANSION_COUNT));
        Self::from_index(n as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_number_has_a_name() {
        for n in 1..=28u8 {
            let m = Mansion::from_index(n).unwrap();
            assert_eq!(m.index(), n);
            assert!(!m.name().is_empty());
        }
        assert!(Mansion::from_index(0).is_none());
        assert!(Mansion::from_index(29).is_none());
    }

    #[test]
    fn first_and_last() {
        assert_eq!(Mansion::from_longitude(0.0), Some(Mansion::Sharatain));
        assert_eq!(Mansion::from_longitude(12.8), Some(Mansion::Sharatain));
        assert_eq!(Mansion::from_longitude(12.9), Some(Mansion::Butain));
        assert_eq!(Mansion::from_longitude(359.999), Some(Mansion::Risha));
        assert_eq!(Mansion::Risha.name(), "Al-Risha");
    }

    #[test]
    fn wraps_out_of_range_longitude() {
        assert_eq!(Mansion::from_longitude(360.0), Some(Mansion::Sharatain));
        assert_eq!(Mansion::from_longitude(-1.0), Some(Mansion::Risha));
    }

    #[test]
    fn nan_has_no_mansion() {
        assert!(Mansion::from_longitude(f64::NAN).is_none());
    }

    #[test]
    fn all_in_order() {
        for (i, m) in Mansion::all().iter().enumerate() {
            assert_eq!(usize::from(m.index()), i + 1);
        }
    }
}
