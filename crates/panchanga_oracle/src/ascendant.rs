//! Tropical ascendant (1st house cusp) longitude.
//!
//! Standard spherical astronomy (Meeus ch. 14) from local sidereal time,
//! mean obliquity, and geographic latitude:
//!
//! `tan(Asc) = -cos(LST) / (sin(LST)*cos(eps) + tan(phi)*sin(eps))`
//!
//! The horizon condition is satisfied by two opposite ecliptic points;
//! the atan2 quadrant below selects the eastern (rising) intersection.

use std::f64::consts::TAU;

use crate::moment::GeoPoint;
use crate::sidereal::{gmst_deg, local_sidereal_deg, mean_obliquity_deg};

/// Tropical ecliptic longitude of the ascendant in degrees, [0, 360).
pub fn ascendant_longitude_deg(jd: f64, point: &GeoPoint) -> f64 {
    let lst = local_sidereal_deg(gmst_deg(jd), point.longitude_deg).to_radians();
    let eps = mean_obliquity_deg(jd).to_radians();
    let phi = point.latitude_rad();

    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    asc.rem_euclid(TAU).to_degrees()
}
