//! Karana (half-tithi) classification.
//!
//! A karana is one of 60 segments of the Moon-Sun elongation, 6 degrees
//! each. Eleven names cover the cycle: step 0 is the fixed Kimstughna,
//! steps 1-56 walk a seven-name movable cycle, and steps 57-59 are the
//! fixed Shakuni, Chatushpada, and Naga. Step 60 would be Kimstughna
//! again, but the [0, 59] elongation range never reaches it.

use crate::util::normalize_360;

/// Span of one karana in elongation: 6 degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 11 karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

/// All 11 karanas: the fixed opener, the movable seven, the fixed closers.
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Kimstughna,
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
];

/// The seven movable karanas cycled through steps 1-56.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Name of the karana.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kimstughna => "Kimstughna",
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
        }
    }

    /// All 11 karanas.
    pub const fn all() -> &'static [Karana; 11] {
        &ALL_KARANAS
    }
}

/// Result of a karana lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    /// The karana.
    pub karana: Karana,
    /// 0-based half-tithi step within the synodic month (0-59).
    pub step: u8,
}

/// Determine the karana from the Moon-Sun elongation in degrees.
///
/// `elongation = (moon_lon - sun_lon) mod 360`, tropical longitudes.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let diff = normalize_360(elongation_deg);
    let step = (diff / KARANA_SEGMENT_DEG).floor() as u8;
    // Clamp for the floating point edge at exactly 360.0
    let step = step.min(59);

    let karana = match step {
        0 => Karana::Kimstughna,
        1..=56 => MOVABLE_KARANAS[((step - 1) % 7) as usize],
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        _ => Karana::Naga,
    };

    KaranaInfo { karana, step }
}
