//! Per-element derivations: each queries the oracle for what it needs at
//! a given Julian Day and maps the raw angles through the pure lookup
//! functions. A failure in any of them carries the element name.

use panchanga_oracle::{
    Body, CivilMoment, GeoPoint, Oracle, OracleError, RiseSet, RiseSetEvent, jd_to_unix_seconds,
};
use panchanga_vedic::{
    karana_from_elongation, masa_from_longitude, nakshatra_from_longitude, rashi_from_longitude,
    tithi_from_elongation, to_sidereal, vara_from_index, yoga_from_sum,
};

use crate::error::{Element, PanchangError};
use crate::result::{LagnaResult, MoonResult, TithiResult, YogaResult};

fn wrap(element: Element) -> impl Fn(OracleError) -> PanchangError {
    move |e| PanchangError::calculation(element, e)
}

/// Ascendant sign: tropical 1st-cusp longitude, sidereal-corrected, sliced
/// into the 12 rashis.
pub fn lagna(oracle: &Oracle, jd: f64, point: &GeoPoint) -> Result<LagnaResult, PanchangError> {
    let tropical = oracle.ascendant(jd, point).map_err(wrap(Element::Lagna))?;
    let aya = oracle.ayanamsha(jd).map_err(wrap(Element::Lagna))?;
    let info = rashi_from_longitude(to_sidereal(tropical, aya));
    Ok(LagnaResult {
        rashi: info.rashi.name(),
        sidereal_longitude: info.sidereal_longitude,
    })
}

/// Moon's lunar mansion and pada from its sidereal longitude.
pub fn moon_nakshatra(oracle: &Oracle, jd: f64) -> Result<MoonResult, PanchangError> {
    let moon = oracle
        .body_longitude(Body::Moon, jd)
        .map_err(wrap(Element::Nakshatra))?;
    let aya = oracle.ayanamsha(jd).map_err(wrap(Element::Nakshatra))?;
    let info = nakshatra_from_longitude(to_sidereal(moon, aya));
    Ok(MoonResult {
        nakshatra: info.nakshatra.name(),
        pada: info.pada,
    })
}

/// Lunar day from the tropical Moon-Sun elongation.
pub fn tithi(oracle: &Oracle, jd: f64) -> Result<TithiResult, PanchangError> {
    let moon = oracle
        .body_longitude(Body::Moon, jd)
        .map_err(wrap(Element::Tithi))?;
    let sun = oracle
        .body_longitude(Body::Sun, jd)
        .map_err(wrap(Element::Tithi))?;
    let info = tithi_from_elongation(moon - sun);
    Ok(TithiResult {
        number: info.number,
        name: info.name,
        paksha: info.paksha.name(),
    })
}

/// Yoga from the sum of sidereal Sun and Moon longitudes. The ayanamsha
/// does not cancel in the sum, so both terms are corrected first.
pub fn yoga(oracle: &Oracle, jd: f64) -> Result<YogaResult, PanchangError> {
    let sun = oracle
        .body_longitude(Body::Sun, jd)
        .map_err(wrap(Element::Yoga))?;
    let moon = oracle
        .body_longitude(Body::Moon, jd)
        .map_err(wrap(Element::Yoga))?;
    let aya = oracle.ayanamsha(jd).map_err(wrap(Element::Yoga))?;
    let info = yoga_from_sum(to_sidereal(sun, aya) + to_sidereal(moon, aya));
    Ok(YogaResult {
        number: info.number,
        name: info.yoga.name(),
    })
}

/// Karana name from the tropical Moon-Sun elongation.
pub fn karana(oracle: &Oracle, jd: f64) -> Result<&'static str, PanchangError> {
    let moon = oracle
        .body_longitude(Body::Moon, jd)
        .map_err(wrap(Element::Karana))?;
    let sun = oracle
        .body_longitude(Body::Sun, jd)
        .map_err(wrap(Element::Karana))?;
    Ok(karana_from_elongation(moon - sun).karana.name())
}

/// Luni-solar month from the sidereal Sun longitude.
pub fn masa(oracle: &Oracle, jd: f64) -> Result<&'static str, PanchangError> {
    let sun = oracle
        .body_longitude(Body::Sun, jd)
        .map_err(wrap(Element::Masa))?;
    let aya = oracle.ayanamsha(jd).map_err(wrap(Element::Masa))?;
    Ok(masa_from_longitude(to_sidereal(sun, aya)).name())
}

/// Weekday name. The display offset shifts the JD before indexing so the
/// name reflects the local civil day.
pub fn vara(oracle: &Oracle, jd: f64, tz_offset_hours: f64) -> &'static str {
    vara_from_index(oracle.day_of_week(jd + tz_offset_hours / 24.0)).name()
}

/// Local sunrise and sunset time strings for the civil date.
///
/// A missing rise or set event (polar conditions) is a domain error, not
/// a silently formatted null.
pub fn sun_times(
    oracle: &Oracle,
    moment: &CivilMoment,
    point: &GeoPoint,
    tz_offset_hours: f64,
) -> Result<(String, String), PanchangError> {
    let rise_jd = sun_event_jd(oracle, moment, point, RiseSetEvent::Sunrise)?;
    let set_jd = sun_event_jd(oracle, moment, point, RiseSetEvent::Sunset)?;
    Ok((
        format_local_time(rise_jd, tz_offset_hours),
        format_local_time(set_jd, tz_offset_hours),
    ))
}

fn sun_event_jd(
    oracle: &Oracle,
    moment: &CivilMoment,
    point: &GeoPoint,
    event: RiseSetEvent,
) -> Result<f64, PanchangError> {
    let outcome = oracle
        .rise_set(moment.year, moment.month, moment.day, point, event)
        .map_err(wrap(Element::SunTimes))?;
    match outcome {
        RiseSet::Event { jd } => Ok(jd),
        RiseSet::NeverRises => Err(PanchangError::calculation(
            Element::SunTimes,
            "sun never rises at this location on this date",
        )),
        RiseSet::NeverSets => Err(PanchangError::calculation(
            Element::SunTimes,
            "sun never sets at this location on this date",
        )),
    }
}

/// Format a Julian Day as a local "HH:MM:SS" wall-clock time via the
/// fixed linear relation `unix = (jd - 2440587.5) * 86400`.
fn format_local_time(jd: f64, tz_offset_hours: f64) -> String {
    let unix = jd_to_unix_seconds(jd);
    let local = unix + tz_offset_hours * 3600.0;
    let secs = local.rem_euclid(86_400.0).floor() as u32;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
