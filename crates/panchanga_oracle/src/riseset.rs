//! Sunrise/sunset transit computation.
//!
//! Iterative hour-angle algorithm from standard spherical astronomy
//! (Meeus, USNO conventions): estimate the transit from local noon, then
//! refine the event time until the Sun's hour angle matches the target
//! altitude's hour angle. Polar conditions are reported explicitly.

use crate::moment::GeoPoint;
use crate::sidereal::{gmst_deg, local_sidereal_deg};
use crate::sun::sun_ra_dec_rad;

/// Sidereal rate: degrees of hour angle per UT day.
pub const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Maximum iterations for the refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.09 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Rise/set event selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears at the horizon.
    Sunrise,
    /// Upper limb of the Sun disappears below the horizon.
    Sunset,
}

impl RiseSetEvent {
    /// Whether this is the rising (morning) event.
    pub const fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Configurable horizon parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
        }
    }
}

impl RiseSetConfig {
    /// Total depression of the Sun's center below the geometric horizon
    /// at the event, in degrees (0.8333 deg with defaults).
    pub fn depression_deg(&self) -> f64 {
        (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0
    }
}

/// Outcome of a rise/set query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSet {
    /// The event occurs at this Julian Day (UT).
    Event { jd: f64 },
    /// The Sun stays below the horizon all day (polar night).
    NeverRises,
    /// The Sun stays above the horizon all day (midnight sun).
    NeverSets,
}

/// Approximate local solar noon JD from 0h UT JD and east longitude.
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Normalize an angle to [-180, 180).
fn normalize_pm180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Hour angle (degrees, positive) at which the Sun's center reaches the
/// target depression, or the polar outcome if it never does.
fn event_hour_angle_deg(
    phi_rad: f64,
    dec_rad: f64,
    depression_deg: f64,
) -> Result<f64, RiseSet> {
    let h0 = (-depression_deg).to_radians();
    let cos_h0 = (h0.sin() - phi_rad.sin() * dec_rad.sin()) / (phi_rad.cos() * dec_rad.cos());
    if cos_h0 > 1.0 {
        return Err(RiseSet::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Err(RiseSet::NeverSets);
    }
    Ok(cos_h0.acos().to_degrees())
}

/// Compute a sunrise or sunset for the civil day starting at
/// `jd_ut_midnight` (0h UT of the date), at the given location.
pub fn compute_rise_set(
    jd_ut_midnight: f64,
    point: &GeoPoint,
    event: RiseSetEvent,
    config: &RiseSetConfig,
) -> RiseSet {
    let phi = point.latitude_rad();
    let depression = config.depression_deg();
    let noon = approximate_local_noon_jd(jd_ut_midnight, point.longitude_deg);

    // Initial estimate from the noon geometry
    let (ra, dec) = sun_ra_dec_rad(noon);
    let ha_event = match event_hour_angle_deg(phi, dec, depression) {
        Ok(ha) => ha,
        Err(outcome) => return outcome,
    };

    let lst_noon = local_sidereal_deg(gmst_deg(noon), point.longitude_deg);
    let ha_noon = normalize_pm180(lst_noon - ra.to_degrees());
    let jd_transit = noon - ha_noon / SIDEREAL_RATE_DEG_PER_DAY;

    let mut jd_event = if event.is_rising() {
        jd_transit - ha_event / SIDEREAL_RATE_DEG_PER_DAY
    } else {
        jd_transit + ha_event / SIDEREAL_RATE_DEG_PER_DAY
    };

    // Refinement: drive the Sun's hour angle to the event hour angle
    for _ in 0..MAX_ITERATIONS {
        let (ra, dec) = sun_ra_dec_rad(jd_event);
        let ha_event = match event_hour_angle_deg(phi, dec, depression) {
            Ok(ha) => ha,
            Err(outcome) => return outcome,
        };
        let ha_target = if event.is_rising() { -ha_event } else { ha_event };

        let lst = local_sidereal_deg(gmst_deg(jd_event), point.longitude_deg);
        let ha = normalize_pm180(lst - ra.to_degrees());
        let delta_days = normalize_pm180(ha_target - ha) / SIDEREAL_RATE_DEG_PER_DAY;
        jd_event += delta_days;
        if delta_days.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    RiseSet::Event { jd: jd_event }
}
