//! Error types for Panchang computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// The derivation an error originated from. Error messages carry this
/// name so a failed request identifies the failing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    JulianDay,
    Rashi,
    Nakshatra,
    Lagna,
    Tithi,
    Yoga,
    Karana,
    Masa,
    Vara,
    SunTimes,
}

impl Element {
    /// Human-readable name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::JulianDay => "Julian Day",
            Self::Rashi => "Rashi",
            Self::Nakshatra => "Nakshatra",
            Self::Lagna => "Lagna",
            Self::Tithi => "Tithi",
            Self::Yoga => "Yoga",
            Self::Karana => "Karana",
            Self::Masa => "Masa",
            Self::Vara => "Var",
            Self::SunTimes => "Sunrise/Sunset",
        }
    }
}

/// Errors from Panchang computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// `compute` was called before `init`.
    NotInitialized,
    /// `init` was called a second time.
    AlreadyInitialized,
    /// A derivation failed. Carries the failing element and a detail
    /// message; any single failure aborts the whole request.
    Calculation { element: Element, detail: String },
}

impl PanchangError {
    /// Wrap a failure of the given derivation.
    pub fn calculation(element: Element, detail: impl Display) -> Self {
        Self::Calculation {
            element,
            detail: detail.to_string(),
        }
    }
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "panchang oracle not initialized"),
            Self::AlreadyInitialized => write!(f, "panchang oracle already initialized"),
            Self::Calculation { element, detail } => {
                write!(f, "error calculating {}: {detail}", element.name())
            }
        }
    }
}

impl Error for PanchangError {}
