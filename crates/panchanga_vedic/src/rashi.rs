//! Rashi (zodiac sign) classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg sidereal. The same derivation serves the
//! ascendant and any body's sign placement.

use crate::util::normalize_360;

/// Span of one rashi: 30 degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis in zodiacal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha/Aries, 11 = Meena/Pisces).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Western (English) name, used on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Sanskrit name of the rashi.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Result of a rashi lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// The sidereal longitude the lookup was made from, normalized to [0, 360).
    pub sidereal_longitude: f64,
    /// Decimal degrees within the rashi [0, 30).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_idx = (lon / RASHI_SPAN_DEG).floor() as u8;
    // Clamp for the floating point edge at exactly 360.0
    let rashi_idx = rashi_idx.min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * RASHI_SPAN_DEG;

    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        sidereal_longitude: lon,
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rashis_count() {
        assert_eq!(ALL_RASHIS.len(), 12);
    }

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn rashi_names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
            assert!(!r.sanskrit_name().is_empty());
        }
    }

    #[test]
    fn first_and_last_names() {
        assert_eq!(Rashi::Mesha.name(), "Aries");
        assert_eq!(Rashi::Meena.name(), "Pisces");
    }

    #[test]
    fn rashi_boundary_0() {
        let info = rashi_from_longitude(0.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert_eq!(info.rashi_index, 0);
        assert!(info.degrees_in_rashi.abs() < 1e-10);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * RASHI_SPAN_DEG;
            let info = rashi_from_longitude(lon);
            assert_eq!(info.rashi_index, i, "boundary at {lon} deg");
        }
    }

    #[test]
    fn rashi_mid_sign() {
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!((info.degrees_in_rashi - 15.5).abs() < 1e-10);
    }

    #[test]
    fn rashi_invariant_under_full_turns() {
        for k in [-2.0, -1.0, 1.0, 3.0] {
            let base = rashi_from_longitude(197.25);
            let wrapped = rashi_from_longitude(197.25 + k * 360.0);
            assert_eq!(base.rashi, wrapped.rashi, "k = {k}");
            assert!((base.sidereal_longitude - wrapped.sidereal_longitude).abs() < 1e-9);
        }
    }

    #[test]
    fn rashi_negative() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena); // 350 deg
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn rashi_last_sign() {
        let info = rashi_from_longitude(359.999);
        assert_eq!(info.rashi, Rashi::Meena);
        assert_eq!(info.rashi_index, 11);
    }
}
