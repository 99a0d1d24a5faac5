//! Request orchestration: one Julian Day, nine derived elements.

use panchanga_oracle::{CivilMoment, GeoPoint, Oracle};

use crate::derive;
use crate::error::{Element, PanchangError};
use crate::global::runtime;
use crate::result::Panchang;

/// Compute the full Panchang for a civil moment and location using the
/// process-wide oracle. Requires [`crate::init`] to have been called.
pub fn compute(moment: &CivilMoment, point: &GeoPoint) -> Result<Panchang, PanchangError> {
    let rt = runtime()?;
    compute_with(&rt.oracle, rt.tz_offset_hours, moment, point)
}

/// Same computation against an explicit oracle, bypassing the global.
///
/// The Julian Day is computed once and shared by every derivation. Each
/// derivation is an independent pure function of the JD (and coordinates
/// where relevant); any single failure aborts the whole request with an
/// error naming the failing element.
pub fn compute_with(
    oracle: &Oracle,
    tz_offset_hours: f64,
    moment: &CivilMoment,
    point: &GeoPoint,
) -> Result<Panchang, PanchangError> {
    let jd = oracle
        .julian_day(moment)
        .map_err(|e| PanchangError::calculation(Element::JulianDay, e))?;

    let lagna = derive::lagna(oracle, jd, point)?;
    let moon = derive::moon_nakshatra(oracle, jd)?;
    let tithi = derive::tithi(oracle, jd)?;
    let yoga = derive::yoga(oracle, jd)?;
    let karana = derive::karana(oracle, jd)?;
    let masa = derive::masa(oracle, jd)?;
    let var = derive::vara(oracle, jd, tz_offset_hours);
    let (sunrise, sunset) = derive::sun_times(oracle, moment, point, tz_offset_hours)?;

    Ok(Panchang {
        lagna,
        moon,
        tithi,
        masa,
        var,
        yoga,
        karana,
        sunrise,
        sunset,
    })
}
