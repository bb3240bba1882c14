//! Scalar and collection conversion: one [`FromParam`] implementation per target shape.
//!
//! Supported:
//! - Scalars: `String`, `bool`, all integer widths, `f32`/`f64`, RFC 3339 timestamps.
//! - `Option<T>`: allocated on first write.
//! - `[T; N]`: at most `N` values, extra values are an error.
//! - `Vec<T>`: one element per value. `Vec<u8>` is a list of numbers, not raw bytes.
//! - [`crate::Json`]: an embedded JSON document.
//! - Any [`crate::DecodeParam`] type, through its own decoder only.
//!
//! Scalars read the first value. Sequence element `i` is converted from the values starting
//! at `i`, so elements that consume several values (nested sequences, custom decoders) need
//! no separate code path.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::Error;
use crate::options::Options;
use crate::parse_scalars::{parse_bool, parse_float, parse_int, parse_rfc3339};

/// The raw values bound to one key, with the options of the running binding.
#[derive(Clone, Copy, Debug)]
pub struct Values<'a> {
    raw: &'a [String],
    options: &'a Options,
}

impl<'a> Values<'a> {
    pub(crate) fn new(raw: &'a [String], options: &'a Options) -> Self {
        Self { raw, options }
    }

    /// All values, in input order.
    pub fn as_slice(&self) -> &'a [String] {
        self.raw
    }

    /// The value scalars are read from.
    pub fn first(&self) -> Option<&'a str> {
        self.raw.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The values starting at `start`, handed to sequence element `start`.
    pub fn suffix(&self, start: usize) -> Values<'a> {
        Values {
            raw: self.raw.get(start..).unwrap_or(&[]),
            options: self.options,
        }
    }

    pub fn options(&self) -> &'a Options {
        self.options
    }
}

/// Conversion of raw values into a field.
///
/// Callers pass a non-empty list; an empty one leaves the destination untouched.
pub trait FromParam {
    /// Convert into an existing slot, in place.
    fn from_param(&mut self, values: Values<'_>) -> Result<(), Error>;

    /// Build a fresh value. Used where no slot exists yet: a `None` being bound, a new
    /// sequence element.
    fn from_values(values: Values<'_>) -> Result<Self, Error>
    where
        Self: Sized;
}

/// `from_values` for types with a zero value: convert into `Self::default()`.
fn fresh<T: FromParam + Default>(values: Values<'_>) -> Result<T, Error> {
    let mut value = T::default();
    value.from_param(values)?;
    Ok(value)
}

impl FromParam for String {
    fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
        if let Some(s) = values.first() {
            s.clone_into(self);
        }
        Ok(())
    }

    fn from_values(values: Values<'_>) -> Result<Self, Error> {
        fresh(values)
    }
}

impl FromParam for bool {
    fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
        if let Some(s) = values.first() {
            *self = parse_bool(s, values.options().strict_booleans)?;
        }
        Ok(())
    }

    fn from_values(values: Values<'_>) -> Result<Self, Error> {
        fresh(values)
    }
}

macro_rules! from_param_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromParam for $ty {
                fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
                    if let Some(s) = values.first() {
                        *self = parse_int(s)?;
                    }
                    Ok(())
                }

                fn from_values(values: Values<'_>) -> Result<Self, Error> {
                    fresh(values)
                }
            }
        )*
    };
}

from_param_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! from_param_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromParam for $ty {
                fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
                    if let Some(s) = values.first() {
                        *self = parse_float(s)?;
                    }
                    Ok(())
                }

                fn from_values(values: Values<'_>) -> Result<Self, Error> {
                    fresh(values)
                }
            }
        )*
    };
}

from_param_float!(f32, f64);

impl FromParam for DateTime<FixedOffset> {
    fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
        if let Some(s) = values.first() {
            *self = parse_rfc3339(s)?;
        }
        Ok(())
    }

    fn from_values(values: Values<'_>) -> Result<Self, Error> {
        fresh(values)
    }
}

impl FromParam for DateTime<Utc> {
    fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
        if let Some(s) = values.first() {
            *self = parse_rfc3339(s)?.with_timezone(&Utc);
        }
        Ok(())
    }

    fn from_values(values: Values<'_>) -> Result<Self, Error> {
        fresh(values)
    }
}

/// The nullable shape. A `None` is replaced only when conversion succeeds, so a failed
/// conversion leaves the field `None` rather than pointing at a zero value. A `Some` is
/// converted in place.
impl<T: FromParam> FromParam for Option<T> {
    fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
        if values.is_empty() {
            return Ok(());
        }
        match self {
            Some(inner) => inner.from_param(values),
            None => {
                *self = Some(T::from_values(values)?);
                Ok(())
            }
        }
    }

    fn from_values(values: Values<'_>) -> Result<Self, Error> {
        if values.is_empty() {
            return Ok(None);
        }
        T::from_values(values).map(Some)
    }
}

/// Slots past the number of values are left as they were.
///
/// A fresh array builds every slot from its suffix; slots past the number of values get an
/// empty one.
impl<T: FromParam, const N: usize> FromParam for [T; N] {
    fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
        if values.len() > N {
            return Err(Error::array_length(N, values.len()));
        }
        for (i, slot) in self.iter_mut().enumerate().take(values.len()) {
            slot.from_param(values.suffix(i))?;
        }
        Ok(())
    }

    fn from_values(values: Values<'_>) -> Result<Self, Error> {
        if values.len() > N {
            return Err(Error::array_length(N, values.len()));
        }
        let mut items = Vec::with_capacity(N);
        for i in 0..N {
            items.push(T::from_values(values.suffix(i))?);
        }
        items
            .try_into()
            .map_err(|items: Vec<T>| Error::array_length(N, items.len()))
    }
}

/// The vector is replaced only once every element converted.
impl<T: FromParam> FromParam for Vec<T> {
    fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
        *self = Self::from_values(values)?;
        Ok(())
    }

    fn from_values(values: Values<'_>) -> Result<Self, Error> {
        let mut items = Vec::with_capacity(values.len());
        for i in 0..values.len() {
            items.push(T::from_values(values.suffix(i))?);
        }
        Ok(items)
    }
}
