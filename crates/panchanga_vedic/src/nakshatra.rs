//! Nakshatra (lunar mansion) classification.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (360/27 deg) each. Each nakshatra has 4 padas (quarters) of 3 deg 20'.

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: 360/108 = 3.3333... degrees.
pub const PADA_SPAN_DEG: f64 = 360.0 / 108.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishta => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// The sidereal longitude the lookup was made from, normalized to [0, 360).
    pub sidereal_longitude: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
///
/// Each nakshatra spans 13 deg 20'; each pada spans 3 deg 20'.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = (lon / NAKSHATRA_SPAN_DEG).floor() as u8;
    let nak_idx = nak_idx.min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN_DEG;
    let pada_idx = (degrees_in_nakshatra / PADA_SPAN_DEG).floor() as u8;
    let pada = pada_idx.min(3) + 1; // 1-based

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada,
        sidereal_longitude: lon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nakshatras_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn nakshatra_names_nonempty() {
        for n in ALL_NAKSHATRAS {
            assert!(!n.name().is_empty());
        }
    }

    #[test]
    fn span_constants() {
        assert!((NAKSHATRA_SPAN_DEG - 13.333_333_333_333_334).abs() < 1e-10);
        assert!((PADA_SPAN_DEG - NAKSHATRA_SPAN_DEG / 4.0).abs() < 1e-15);
    }

    #[test]
    fn nakshatra_at_0() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.nakshatra_index, 0);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn nakshatra_all_boundaries() {
        for i in 0..27u8 {
            let lon = i as f64 * NAKSHATRA_SPAN_DEG;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra_index, i, "boundary at nakshatra {i}");
            assert_eq!(info.pada, 1, "pada at boundary of nakshatra {i}");
        }
    }

    #[test]
    fn pada_always_in_range() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let info = nakshatra_from_longitude(lon);
            assert!((1..=4).contains(&info.pada), "pada at {lon}");
            assert!(info.nakshatra_index <= 26, "index at {lon}");
            lon += 0.37;
        }
    }

    #[test]
    fn pada_progression_within_nakshatra() {
        for p in 0..4u8 {
            let lon = p as f64 * PADA_SPAN_DEG + 0.1;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.pada, p + 1);
        }
    }

    #[test]
    fn nakshatra_wrap() {
        let info = nakshatra_from_longitude(361.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
    }

    #[test]
    fn nakshatra_negative() {
        // -1 -> 359 deg, inside Revati (starts at 346.667)
        let info = nakshatra_from_longitude(-1.0);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn nakshatra_anuradha() {
        // Anuradha is index 16, spans [213.333, 226.667)
        let info = nakshatra_from_longitude(220.0);
        assert_eq!(info.nakshatra, Nakshatra::Anuradha);
        assert_eq!(info.nakshatra_index, 16);
    }
}
