//! Error types for oracle queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ephemeris oracle queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OracleError {
    /// Calendar date or hour outside the accepted ranges.
    InvalidDate(&'static str),
    /// Julian Day outside the supported epoch window (years 1000-3000).
    EpochOutOfRange(f64),
    /// Invalid geographic coordinate.
    InvalidLocation(&'static str),
}

impl Display for OracleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::EpochOutOfRange(jd) => {
                write!(f, "epoch out of range: JD {jd} is outside the supported window")
            }
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for OracleError {}
