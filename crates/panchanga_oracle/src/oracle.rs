//! The oracle facade: validated queries over the analytical modules.
//!
//! An [`Oracle`] is cheap to construct and immutable; every method is a
//! pure function of its arguments and the configuration captured at
//! construction. Queries are validated against the supported epoch
//! window and coordinate ranges before any series is evaluated.

use crate::ascendant::ascendant_longitude_deg;
use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::error::OracleError;
use crate::julian::{calendar_to_jd, weekday_index};
use crate::moment::{CivilMoment, GeoPoint};
use crate::moon::moon_longitude_deg;
use crate::riseset::{RiseSet, RiseSetConfig, RiseSetEvent, compute_rise_set};
use crate::sun::sun_longitude_deg;

/// Lower bound of the supported window: JD of 1000-01-01 00:00 UT.
pub const JD_MIN: f64 = 2_086_302.5;

/// Upper bound of the supported window: JD of 3000-12-31 24:00 UT.
pub const JD_MAX: f64 = 2_817_152.5;

/// Celestial bodies the calculator asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// Lowercase name for logs and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }
}

/// Oracle configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OracleConfig {
    /// Sidereal reference system for ayanamsha queries.
    pub ayanamsha: AyanamshaSystem,
    /// Horizon parameters for rise/set queries.
    pub rise_set: RiseSetConfig,
}

/// Validated query facade over the analytical ephemeris.
#[derive(Debug, Clone, Copy)]
pub struct Oracle {
    config: OracleConfig,
}

impl Oracle {
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    /// The configuration this oracle was built with.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    fn check_epoch(jd: f64) -> Result<(), OracleError> {
        if !jd.is_finite() || !(JD_MIN..=JD_MAX).contains(&jd) {
            return Err(OracleError::EpochOutOfRange(jd));
        }
        Ok(())
    }

    fn check_point(point: &GeoPoint) -> Result<(), OracleError> {
        if !point.latitude_deg.is_finite() || point.latitude_deg.abs() > 90.0 {
            return Err(OracleError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !point.longitude_deg.is_finite() || point.longitude_deg.abs() > 180.0 {
            return Err(OracleError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        Ok(())
    }

    fn check_date(year: i32, month: u32, day: u32) -> Result<(), OracleError> {
        if !(1000..=3000).contains(&year) {
            return Err(OracleError::InvalidDate("year must be 1000-3000"));
        }
        if !(1..=12).contains(&month) {
            return Err(OracleError::InvalidDate("month must be 1-12"));
        }
        if !(1..=31).contains(&day) {
            return Err(OracleError::InvalidDate("day must be 1-31"));
        }
        Ok(())
    }

    /// Julian Day (UT) of a civil moment. Computed once per request and
    /// reused as the key for every other query.
    pub fn julian_day(&self, moment: &CivilMoment) -> Result<f64, OracleError> {
        Self::check_date(moment.year, moment.month, moment.day)?;
        if !moment.hour.is_finite() || !(0.0..24.0).contains(&moment.hour) {
            return Err(OracleError::InvalidDate("hour must be in [0, 24)"));
        }
        let jd = calendar_to_jd(moment.year, moment.month, moment.day_fraction());
        Self::check_epoch(jd)?;
        Ok(jd)
    }

    /// Tropical geocentric ecliptic longitude of a body in degrees, [0, 360).
    pub fn body_longitude(&self, body: Body, jd: f64) -> Result<f64, OracleError> {
        Self::check_epoch(jd)?;
        Ok(match body {
            Body::Sun => sun_longitude_deg(jd),
            Body::Moon => moon_longitude_deg(jd),
        })
    }

    /// Ayanamsha of the configured system in degrees.
    pub fn ayanamsha(&self, jd: f64) -> Result<f64, OracleError> {
        Self::check_epoch(jd)?;
        Ok(ayanamsha_deg(self.config.ayanamsha, jd))
    }

    /// Tropical longitude of the ascendant (1st house cusp) in degrees.
    pub fn ascendant(&self, jd: f64, point: &GeoPoint) -> Result<f64, OracleError> {
        Self::check_epoch(jd)?;
        Self::check_point(point)?;
        Ok(ascendant_longitude_deg(jd, point))
    }

    /// Day-of-week index for a Julian Day: 0 = Monday .. 6 = Sunday.
    pub fn day_of_week(&self, jd: f64) -> u8 {
        weekday_index(jd)
    }

    /// Sunrise or sunset for a civil date at a location.
    ///
    /// Returns the polar outcomes as data, not errors; the caller decides
    /// how a missing event is surfaced.
    pub fn rise_set(
        &self,
        year: i32,
        month: u32,
        day: u32,
        point: &GeoPoint,
        event: RiseSetEvent,
    ) -> Result<RiseSet, OracleError> {
        Self::check_date(year, month, day)?;
        Self::check_point(point)?;
        let jd_midnight = calendar_to_jd(year, month, day as f64);
        Self::check_epoch(jd_midnight)?;
        Ok(compute_rise_set(
            jd_midnight,
            point,
            event,
            &self.config.rise_set,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle() -> Oracle {
        Oracle::new(OracleConfig::default())
    }

    #[test]
    fn epoch_window_matches_calendar_bounds() {
        assert!((calendar_to_jd(1000, 1, 1.0) - JD_MIN).abs() < 1e-9);
        assert!((calendar_to_jd(3000, 12, 32.0) - JD_MAX).abs() < 1e-9);
    }

    #[test]
    fn julian_day_j2000() {
        let jd = oracle()
            .julian_day(&CivilMoment::new(2000, 1, 1, 12.0))
            .unwrap();
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn julian_day_rejects_bad_month() {
        let err = oracle()
            .julian_day(&CivilMoment::new(2000, 13, 1, 0.0))
            .unwrap_err();
        assert!(matches!(err, OracleError::InvalidDate(_)));
    }

    #[test]
    fn julian_day_rejects_bad_hour() {
        let err = oracle()
            .julian_day(&CivilMoment::new(2000, 1, 1, 24.0))
            .unwrap_err();
        assert!(matches!(err, OracleError::InvalidDate(_)));
    }

    #[test]
    fn julian_day_rejects_out_of_window_year() {
        let err = oracle()
            .julian_day(&CivilMoment::new(9999, 1, 1, 0.0))
            .unwrap_err();
        assert!(matches!(err, OracleError::InvalidDate(_)));
    }

    #[test]
    fn body_longitude_rejects_out_of_window_jd() {
        let err = oracle().body_longitude(Body::Sun, 1.0e7).unwrap_err();
        assert!(matches!(err, OracleError::EpochOutOfRange(_)));
    }

    #[test]
    fn body_longitudes_in_range() {
        let o = oracle();
        let jd = o.julian_day(&CivilMoment::new(2024, 3, 20, 12.0)).unwrap();
        for body in [Body::Sun, Body::Moon] {
            let lon = o.body_longitude(body, jd).unwrap();
            assert!((0.0..360.0).contains(&lon), "{}: {lon}", body.name());
        }
    }

    #[test]
    fn ascendant_rejects_bad_latitude() {
        let o = oracle();
        let jd = o.julian_day(&CivilMoment::new(2000, 1, 1, 0.0)).unwrap();
        let err = o.ascendant(jd, &GeoPoint::new(91.0, 0.0)).unwrap_err();
        assert!(matches!(err, OracleError::InvalidLocation(_)));
    }

    #[test]
    fn rise_set_rejects_bad_longitude() {
        let o = oracle();
        let err = o
            .rise_set(2000, 1, 1, &GeoPoint::new(0.0, 200.0), RiseSetEvent::Sunrise)
            .unwrap_err();
        assert!(matches!(err, OracleError::InvalidLocation(_)));
    }

    #[test]
    fn rise_set_polar_is_data_not_error() {
        let o = oracle();
        let outcome = o
            .rise_set(2000, 1, 1, &GeoPoint::new(89.9, 0.0), RiseSetEvent::Sunrise)
            .unwrap();
        assert_eq!(outcome, RiseSet::NeverRises);
    }

    #[test]
    fn ayanamsha_positive_in_modern_era() {
        let o = oracle();
        let jd = o.julian_day(&CivilMoment::new(2024, 1, 1, 0.0)).unwrap();
        let aya = o.ayanamsha(jd).unwrap();
        assert!((23.0..26.0).contains(&aya), "ayanamsha = {aya}");
    }

    #[test]
    fn day_of_week_known_saturday() {
        let o = oracle();
        let jd = o.julian_day(&CivilMoment::new(2000, 1, 1, 0.0)).unwrap();
        assert_eq!(o.day_of_week(jd), 5);
    }
}
