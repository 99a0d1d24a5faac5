//! Analytical ephemeris oracle for Panchang computation.
//!
//! This crate answers the handful of astronomical questions the calculator
//! layer asks: civil date to Julian Day, tropical geocentric ecliptic
//! longitudes of the Sun and Moon, ayanamsha for a configured sidereal
//! system, tropical ascendant longitude, sunrise/sunset transit times, and
//! a day-of-week index.
//!
//! All answers come from closed-form low-precision series (Meeus,
//! "Astronomical Algorithms", 2nd ed.) evaluated in-process; no data files
//! are read. Accuracy is on the order of 0.01 deg for the Sun and a few
//! hundredths of a degree for the Moon, which resolves Panchang categories
//! whose slices are 6 deg or wider.
//!
//! The supported epoch window is calendar years 1000-3000; queries outside
//! it fail with [`OracleError::EpochOutOfRange`] rather than extrapolating
//! the series silently.

pub mod ascendant;
pub mod ayanamsha;
pub mod error;
pub mod julian;
pub mod moment;
pub mod moon;
pub mod oracle;
pub mod riseset;
pub mod sidereal;
pub mod sun;

pub use ascendant::ascendant_longitude_deg;
pub use ayanamsha::{ALL_AYANAMSHA_SYSTEMS, AyanamshaSystem, ayanamsha_deg};
pub use error::OracleError;
pub use julian::{
    J2000_JD, UNIX_EPOCH_JD, calendar_to_jd, jd_to_centuries, jd_to_unix_seconds, weekday_index,
};
pub use moment::{CivilMoment, GeoPoint};
pub use moon::moon_longitude_deg;
pub use oracle::{Body, JD_MAX, JD_MIN, Oracle, OracleConfig};
pub use riseset::{RiseSet, RiseSetConfig, RiseSetEvent, compute_rise_set};
pub use sidereal::{gmst_deg, local_sidereal_deg, mean_obliquity_deg};
pub use sun::{sun_longitude_deg, sun_ra_dec_rad};
