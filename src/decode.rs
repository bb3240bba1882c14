//! Custom decoders: types that turn their raw values into a value themselves.
use crate::convert::{FromParam, Values};
use crate::error::{BoxError, Error};

/// Opt-in decoding for a type.
///
/// The decoder receives every value bound to the field's key and replaces the field with the
/// result. None of the generic conversion rules apply to a type implementing this trait. In a
/// sequence, element `i` receives the values starting at `i`. The decoder builds the value
/// itself, so the type needs no `Default` to appear inside `Option` or `Vec`.
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use query_binding::{DecodeParam, Record};
///
/// /// A day, given as a full RFC 3339 timestamp.
/// #[derive(Debug, Default, PartialEq)]
/// struct Day(String);
///
/// impl DecodeParam for Day {
///     type Error = chrono::ParseError;
///
///     fn decode_param(values: &[String]) -> Result<Self, Self::Error> {
///         let t: DateTime<Utc> = values[0].parse()?;
///         Ok(Day(t.format("%Y-%m-%d").to_string()))
///     }
/// }
///
/// #[derive(Default, Record)]
/// struct Filter {
///     since: Day,
/// }
///
/// let source = std::collections::HashMap::from([(
///     "since".to_string(),
///     vec!["2023-01-01T00:00:00Z".to_string()],
/// )]);
/// let mut filter = Filter::default();
/// query_binding::mapping(&source, &mut filter).unwrap();
/// assert_eq!(filter.since, Day("2023-01-01".into()));
/// ```
pub trait DecodeParam: Sized {
    type Error: Into<BoxError>;

    fn decode_param(values: &[String]) -> Result<Self, Self::Error>;
}

impl<T: DecodeParam> FromParam for T {
    fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
        *self = Self::from_values(values)?;
        Ok(())
    }

    fn from_values(values: Values<'_>) -> Result<Self, Error> {
        T::decode_param(values.as_slice()).map_err(Error::decoder)
    }
}
