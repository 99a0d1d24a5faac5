//! Geometric solar position (Meeus ch. 25).
//!
//! Mean longitude plus equation of center, referred to the mean equinox
//! of date. Nutation and aberration are omitted; the resulting geometric
//! longitude is good to ~0.01 deg over the supported window.

use crate::julian::jd_to_centuries;
use crate::sidereal::mean_obliquity_deg;

/// Tropical geocentric ecliptic longitude of the Sun in degrees, [0, 360).
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);

    // Geometric mean longitude and mean anomaly
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();

    // Equation of center
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    (l0 + c).rem_euclid(360.0)
}

/// Right ascension and declination of the Sun in radians.
///
/// Derived from the ecliptic longitude and the mean obliquity; solar
/// ecliptic latitude is taken as zero.
pub fn sun_ra_dec_rad(jd: f64) -> (f64, f64) {
    let lon = sun_longitude_deg(jd).to_radians();
    let eps = mean_obliquity_deg(jd).to_radians();
    let ra = f64::atan2(eps.cos() * lon.sin(), lon.cos()).rem_euclid(std::f64::consts::TAU);
    let dec = (eps.sin() * lon.sin()).asin();
    (ra, dec)
}
