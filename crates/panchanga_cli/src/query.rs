//! Query-string parsing for the `/astro` endpoint.
//!
//! All six parameters are required. Values are plain decimal numbers, so
//! no percent-decoding is needed; if a key repeats, the last occurrence
//! wins.

use std::str::FromStr;

use thiserror::Error;

/// Parsed `/astro` request parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstroQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Decimal hour, e.g. 8.49 = 08:29:24.
    pub hour: f64,
    pub lat: f64,
    pub lon: f64,
}

/// Rejected query string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("missing required parameter `{0}`")]
    Missing(&'static str),
    #[error("invalid value `{value}` for parameter `{name}`")]
    Invalid { name: &'static str, value: String },
}

fn get<'a>(pairs: &[(&'a str, &'a str)], name: &'static str) -> Result<&'a str, QueryError> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| *v)
        .ok_or(QueryError::Missing(name))
}

fn parse_num<T: FromStr>(name: &'static str, raw: &str) -> Result<T, QueryError> {
    raw.parse().map_err(|_| QueryError::Invalid {
        name,
        value: raw.to_string(),
    })
}

/// Parse the raw query string (the part after `?`).
pub fn parse_astro_query(raw: &str) -> Result<AstroQuery, QueryError> {
    let pairs: Vec<(&str, &str)> = raw
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .collect();

    Ok(AstroQuery {
        year: parse_num("year", get(&pairs, "year")?)?,
        month: parse_num("month", get(&pairs, "month")?)?,
        day: parse_num("day", get(&pairs, "day")?)?,
        hour: parse_num("hour", get(&pairs, "hour")?)?,
        lat: parse_num("lat", get(&pairs, "lat")?)?,
        lon: parse_num("lon", get(&pairs, "lon")?)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "year=2000&month=1&day=1&hour=0&lat=28.6139&lon=77.2090";

    #[test]
    fn parses_full_query() {
        let q = parse_astro_query(FULL).unwrap();
        assert_eq!(q.year, 2000);
        assert_eq!(q.month, 1);
        assert_eq!(q.day, 1);
        assert!((q.hour - 0.0).abs() < 1e-12);
        assert!((q.lat - 28.6139).abs() < 1e-12);
        assert!((q.lon - 77.2090).abs() < 1e-12);
    }

    #[test]
    fn parses_decimal_hour() {
        let q = parse_astro_query("year=2024&month=3&day=20&hour=8.49&lat=0&lon=0").unwrap();
        assert!((q.hour - 8.49).abs() < 1e-12);
    }

    #[test]
    fn parses_negative_coordinates() {
        let q = parse_astro_query("year=2024&month=3&day=20&hour=12&lat=-33.9&lon=-70.6").unwrap();
        assert!(q.lat < 0.0 && q.lon < 0.0);
    }

    #[test]
    fn missing_parameter() {
        let raw = "month=1&day=1&hour=0&lat=28.6139&lon=77.2090";
        assert_eq!(parse_astro_query(raw).unwrap_err(), QueryError::Missing("year"));
    }

    #[test]
    fn missing_parameter_message_names_it() {
        let err = parse_astro_query("").unwrap_err();
        assert!(err.to_string().contains("`year`"));
    }

    #[test]
    fn invalid_integer() {
        let raw = "year=abc&month=1&day=1&hour=0&lat=0&lon=0";
        match parse_astro_query(raw).unwrap_err() {
            QueryError::Invalid { name, value } => {
                assert_eq!(name, "year");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn invalid_float() {
        let raw = "year=2024&month=3&day=20&hour=noon&lat=0&lon=0";
        assert!(matches!(
            parse_astro_query(raw).unwrap_err(),
            QueryError::Invalid { name: "hour", .. }
        ));
    }

    #[test]
    fn empty_value_is_invalid_not_missing() {
        let raw = "year=&month=1&day=1&hour=0&lat=0&lon=0";
        assert!(matches!(
            parse_astro_query(raw).unwrap_err(),
            QueryError::Invalid { name: "year", .. }
        ));
    }

    #[test]
    fn last_occurrence_wins() {
        let raw = "year=1999&year=2000&month=1&day=1&hour=0&lat=0&lon=0";
        assert_eq!(parse_astro_query(raw).unwrap().year, 2000);
    }

    #[test]
    fn parameter_order_is_free() {
        let raw = "lon=77.2090&lat=28.6139&hour=0&day=1&month=1&year=2000";
        assert!(parse_astro_query(raw).is_ok());
    }
}
