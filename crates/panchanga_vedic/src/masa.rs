//! Masa (luni-solar month) classification.
//!
//! Solar-rashi scheme: the sidereal Sun longitude is divided into 12 bins
//! of 30 degrees, each mapped to a month name. The cycle is anchored with
//! Chaitra at sidereal 0 deg (Sun in Mesha).

use crate::util::normalize_360;

/// Span of one masa in sidereal Sun longitude: 30 degrees.
pub const MASA_SEGMENT_DEG: f64 = 30.0;

/// The 12 masas in zodiacal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in order (0 = Chaitra, 11 = Phalguna).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    /// Name of the masa.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Chaitra => 0,
            Self::Vaishakha => 1,
            Self::Jyeshtha => 2,
            Self::Ashadha => 3,
            Self::Shravana => 4,
            Self::Bhadrapada => 5,
            Self::Ashvina => 6,
            Self::Kartika => 7,
            Self::Margashirsha => 8,
            Self::Pausha => 9,
            Self::Magha => 10,
            Self::Phalguna => 11,
        }
    }

    /// All 12 masas in order.
    pub const fn all() -> &'static [Masa; 12] {
        &ALL_MASAS
    }
}

/// Determine the masa from the sidereal Sun longitude.
pub fn masa_from_longitude(sidereal_sun_deg: f64) -> Masa {
    let lon = normalize_360(sidereal_sun_deg);
    let index = (lon / MASA_SEGMENT_DEG).floor() as u8;
    // Clamp for the floating point edge at exactly 360.0
    ALL_MASAS[index.min(11) as usize]
}
