use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};

use crate::error::Error;

/// Parse a boolean literal.
///
/// Accepted TRUE literals (case-insensitive): "1", "t", "true"
/// Accepted FALSE literals (case-insensitive): "0", "f", "false"
///
/// With `strict`, only the exact literals "true" and "false" are accepted.
pub(crate) fn parse_bool(s: &str, strict: bool) -> Result<bool, Error> {
    if strict {
        return match s {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(Error::parse_bool(s, true)),
        };
    }

    if s == "1" || s.eq_ignore_ascii_case("t") || s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s == "0" || s.eq_ignore_ascii_case("f") || s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::parse_bool(s, false))
    }
}

/// Parse a base-10 integer at the width of `T`.
///
/// Values that do not fit `T` are rejected rather than truncated; the standard library error
/// (`PosOverflow`/`NegOverflow`) is kept as the cause.
pub(crate) fn parse_int<T>(s: &str) -> Result<T, Error>
where
    T: FromStr<Err = ParseIntError>,
{
    Ok(s.parse::<T>()?)
}

pub(crate) fn parse_float<T>(s: &str) -> Result<T, Error>
where
    T: FromStr<Err = ParseFloatError>,
{
    Ok(s.parse::<T>()?)
}

/// Parse an RFC 3339 date-time, e.g. `2023-01-01T00:00:00Z` or `2023-12-06T12:00:00.5+02:00`.
pub(crate) fn parse_rfc3339(s: &str) -> Result<DateTime<FixedOffset>, Error> {
    Ok(DateTime::parse_from_rfc3339(s)?)
}
