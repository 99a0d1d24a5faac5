//! The serializable Panchang result record.
//!
//! Exactly nine top-level keys: lagna, moon, tithi, masa, var, yoga,
//! karana, sunrise, sunset. Nothing persists beyond a request; the record
//! is rebuilt from scratch on every call.

use serde::Serialize;

/// Ascendant placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LagnaResult {
    /// Sign name (Aries .. Pisces).
    pub rashi: &'static str,
    /// Sidereal longitude of the ascendant in degrees, [0, 360).
    pub sidereal_longitude: f64,
}

/// Moon placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonResult {
    /// Lunar mansion name.
    pub nakshatra: &'static str,
    /// Quarter within the mansion, 1-4.
    pub pada: u8,
}

/// Lunar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TithiResult {
    /// 1-based tithi number (1-30).
    pub number: u8,
    /// Tithi name.
    pub name: &'static str,
    /// "waxing" or "waning".
    pub paksha: &'static str,
}

/// Luni-solar yoga.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaResult {
    /// 1-based yoga number (1-27).
    pub number: u8,
    /// Yoga name.
    pub name: &'static str,
}

/// One complete Panchang answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panchang {
    pub lagna: LagnaResult,
    pub moon: MoonResult,
    pub tithi: TithiResult,
    pub masa: &'static str,
    pub var: &'static str,
    pub yoga: YogaResult,
    pub karana: &'static str,
    /// Local sunrise time, "HH:MM:SS".
    pub sunrise: String,
    /// Local sunset time, "HH:MM:SS".
    pub sunset: String,
}
