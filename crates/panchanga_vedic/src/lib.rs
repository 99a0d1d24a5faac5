//! Pure Panchang derivations: Rashi, Nakshatra, Tithi, Yoga, Karana,
//! Masa, and Vara classification from ecliptic longitudes.
//!
//! Every function in this crate is closed-form arithmetic over angles
//! already obtained from an ephemeris source. Longitudes are normalized
//! to [0, 360) before slicing; name tables are immutable enumerations
//! in canonical order.

pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod util;
pub mod vara;
pub mod yoga;

pub use karana::{ALL_KARANAS, KARANA_SEGMENT_DEG, Karana, KaranaInfo, karana_from_elongation};
pub use masa::{ALL_MASAS, MASA_SEGMENT_DEG, Masa, masa_from_longitude};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraInfo, PADA_SPAN_DEG,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN_DEG, Rashi, RashiInfo, rashi_from_longitude};
pub use tithi::{Paksha, TITHI_SEGMENT_DEG, TithiInfo, tithi_from_elongation};
pub use util::{normalize_360, to_sidereal};
pub use vara::{ALL_VARAS, Vara, vara_from_index};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaInfo, yoga_from_sum};
