//! Structural walker: visits a record's fields, resolves their keys and dispatches each one to
//! embedded recursion or to the converter.
//!
//! Key resolution:
//! - The key is the `rename` override if declared, else the field name (see
//!   [`crate::options::KeySource`]).
//! - `"-"` always skips the field.
//! - A non-embedded field is skipped when its key is empty or has no values. Absent input
//!   leaves the field as it was; this is not an error.
//! - An embedded field has no namespace of its own: its sub-fields are looked up in the same
//!   source as the parent's.
//!
//! The walk stops at the first error. Fields written before it keep their values.

use log::{debug, trace};

use crate::convert::Values;
use crate::error::{Error, Path};
use crate::options::Options;
use crate::record::{Record, Target};
use crate::source::Source;

/// Key that marks a field as never bound.
const SKIP_KEY: &str = "-";

/// Walks the fields of a record against one source.
///
/// Handed to [`crate::Embed`] implementations so embedded records can recurse into the
/// same source.
pub struct Walker<'a> {
    source: &'a dyn Source,
    options: &'a Options,
    path: Path,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(source: &'a dyn Source, options: &'a Options) -> Self {
        Self {
            source,
            options,
            path: Path::UNKNOWN,
        }
    }

    /// Options of the running binding.
    pub fn options(&self) -> &Options {
        self.options
    }

    /// Wrap raw values with the options of the running binding.
    pub fn values<'v>(&'v self, raw: &'v [String]) -> Values<'v> {
        Values::new(raw, self.options)
    }

    /// Bind every field of `record`, in declaration order.
    pub fn walk<R: Record + ?Sized>(&mut self, record: &mut R) -> Result<(), Error> {
        let source = self.source;
        let options = self.options;

        for field in record.fields() {
            let name = field.name();
            let key = options.key_source.resolve(name, field.rename());
            let embedded = field.is_embedded();

            if key == SKIP_KEY {
                trace!("skipping field `{name}`: marked `-`");
                continue;
            }
            if key.is_empty() && !embedded {
                trace!("skipping field `{name}`: no key");
                continue;
            }

            let values = source.get_all(key);
            if values.is_empty() && !embedded {
                trace!("skipping field `{name}`: no values under `{key}`");
                continue;
            }

            match field.into_target() {
                Target::Embedded(target) => {
                    trace!("entering embedded field `{name}`");
                    self.path.push(name);
                    let result = target.embed(self, values);
                    self.path.pop();
                    if let Err(err) = result {
                        return Err(self.locate(err, if key.is_empty() { name } else { key }));
                    }
                }
                Target::Value(target) => {
                    trace!("binding field `{name}` from `{key}` ({} values)", values.len());
                    if let Err(err) = target.from_param(Values::new(values, options)) {
                        return Err(self.locate(err, key));
                    }
                }
            }
        }

        Ok(())
    }

    /// Give `err` the path of `segment` below the current position, unless a nested walk
    /// already did.
    fn locate(&self, err: Error, segment: &'static str) -> Error {
        if err.path().is_some() {
            return err;
        }
        let path = self.path.join(segment);
        debug!("binding failed at `{path}`: {err}");
        err.with_path(path)
    }
}

/// Bind `record` from `source` with default [`Options`].
///
/// Every field found in `source` is converted into the field's type, embedded records are
/// filled from the same keys, and fields without input are left untouched.
///
/// ```rust
/// use std::collections::HashMap;
///
/// use query_binding::Record;
///
/// #[derive(Default, Record)]
/// struct Common {
///     page: i32,
///     #[param(rename = "pageSize")]
///     page_size: i32,
/// }
///
/// #[derive(Default, Record)]
/// struct Query {
///     name: String,
///     ids: Vec<u64>,
///     #[param(flatten)]
///     common: Common,
/// }
///
/// let source = HashMap::from([
///     ("name".to_string(), vec!["rust".to_string()]),
///     ("ids".to_string(), vec!["1".to_string(), "2".to_string()]),
///     ("page".to_string(), vec!["10".to_string()]),
///     ("pageSize".to_string(), vec!["100".to_string()]),
/// ]);
///
/// let mut query = Query::default();
/// query_binding::mapping(&source, &mut query).unwrap();
/// assert_eq!(query.name, "rust");
/// assert_eq!(query.ids, [1, 2]);
/// assert_eq!(query.common.page, 10);
/// assert_eq!(query.common.page_size, 100);
/// ```
pub fn mapping<S, R>(source: &S, record: &mut R) -> Result<(), Error>
where
    S: Source,
    R: Record + ?Sized,
{
    mapping_with_options(source, record, &Options::default())
}

/// Bind `record` from `source` with configurable [`Options`].
pub fn mapping_with_options<S, R>(source: &S, record: &mut R, options: &Options) -> Result<(), Error>
where
    S: Source,
    R: Record + ?Sized,
{
    let mut walker = Walker::new(source, options);
    walker.walk(record)
}

/// Allocate `R::default()` and bind it from `source`.
pub fn from_source<R, S>(source: &S) -> Result<R, Error>
where
    R: Record + Default,
    S: Source,
{
    from_source_with_options(source, &Options::default())
}

/// Allocate `R::default()` and bind it from `source` with configurable [`Options`].
pub fn from_source_with_options<R, S>(source: &S, options: &Options) -> Result<R, Error>
where
    R: Record + Default,
    S: Source,
{
    let mut record = R::default();
    mapping_with_options(source, &mut record, options)?;
    Ok(record)
}
