//! Opaque records carried as a JSON document in a single value.
use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::convert::{FromParam, Values};
use crate::error::Error;

/// A field whose first value is a JSON document, e.g. `filter={"age":30}`.
///
/// ```rust
/// use query_binding::{Json, Record};
/// use serde::Deserialize;
///
/// #[derive(Debug, Default, Deserialize, PartialEq)]
/// struct Range {
///     from: u32,
///     to: u32,
/// }
///
/// #[derive(Default, Record)]
/// struct Report {
///     range: Json<Range>,
/// }
///
/// let source = std::collections::HashMap::from([(
///     "range".to_string(),
///     vec![r#"{"from":1,"to":5}"#.to_string()],
/// )]);
/// let mut report = Report::default();
/// query_binding::mapping(&source, &mut report).unwrap();
/// assert_eq!(*report.range, Range { from: 1, to: 5 });
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}

impl<T: DeserializeOwned> FromParam for Json<T> {
    fn from_param(&mut self, values: Values<'_>) -> Result<(), Error> {
        if let Some(s) = values.first() {
            self.0 = serde_json::from_str(s)?;
        }
        Ok(())
    }

    fn from_values(values: Values<'_>) -> Result<Self, Error> {
        Ok(Json(serde_json::from_str(values.first().unwrap_or_default())?))
    }
}
