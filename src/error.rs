//! Defines error and the field path it was raised at
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use smallvec::SmallVec;

/// Boxed error produced by custom decoders and validators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dotted path of the field that failed, e.g. `Common.page`.
///
/// Embedded fields contribute their declared name, the failing field contributes the key it
/// was looked up under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    segments: SmallVec<[&'static str; 4]>,
}

impl Path {
    /// Sentinel value meaning "path unknown".
    ///
    /// Converters raise errors without knowing which field they work on; the walker fills the
    /// path in afterwards.
    pub const UNKNOWN: Self = Self {
        segments: SmallVec::new_const(),
    };

    pub(crate) fn push(&mut self, segment: &'static str) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    /// Return a copy of this path with `segment` appended.
    pub(crate) fn join(&self, segment: &'static str) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    /// Path segments, outermost first.
    pub fn segments(&self) -> &[&'static str] {
        &self.segments
    }

    fn is_known(&self) -> bool {
        !self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// The first failure encountered while binding a record.
///
/// Parser and decoder errors are carried unmodified and are available through
/// [`std::error::Error::source`].
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A fixed-size array received more values than it can hold.
    ArrayLength {
        capacity: usize,
        given: usize,
        path: Path,
    },
    /// Integer parse failure, including values out of range for the declared width.
    ParseInt { cause: ParseIntError, path: Path },
    /// Floating point parse failure.
    ParseFloat { cause: ParseFloatError, path: Path },
    /// The value is not a recognised boolean literal.
    ParseBool {
        value: String,
        strict: bool,
        path: Path,
    },
    /// The value is not an RFC 3339 timestamp.
    Timestamp {
        cause: chrono::ParseError,
        path: Path,
    },
    /// The value of a [`crate::Json`] field is not a well-formed document for the target type.
    Document {
        cause: serde_json::Error,
        path: Path,
    },
    /// A [`crate::DecodeParam`] implementation rejected the values.
    Decoder { cause: BoxError, path: Path },
    /// The record was bound but the validator rejected it.
    Validation { cause: BoxError },
}

impl Error {
    pub(crate) fn array_length(capacity: usize, given: usize) -> Self {
        Error::ArrayLength {
            capacity,
            given,
            path: Path::UNKNOWN,
        }
    }

    pub(crate) fn parse_bool(value: &str, strict: bool) -> Self {
        Error::ParseBool {
            value: value.to_owned(),
            strict,
            path: Path::UNKNOWN,
        }
    }

    pub(crate) fn decoder(cause: impl Into<BoxError>) -> Self {
        Error::Decoder {
            cause: cause.into(),
            path: Path::UNKNOWN,
        }
    }

    pub(crate) fn validation(cause: impl Into<BoxError>) -> Self {
        Error::Validation {
            cause: cause.into(),
        }
    }

    /// Attach/override the field path of this error and return it.
    ///
    /// Arguments:
    /// - `set_path`: path to store in the error.
    ///
    /// Called by:
    /// - The walker, once the failing field is known.
    pub(crate) fn with_path(mut self, set_path: Path) -> Self {
        match &mut self {
            Error::ArrayLength { path, .. }
            | Error::ParseInt { path, .. }
            | Error::ParseFloat { path, .. }
            | Error::ParseBool { path, .. }
            | Error::Timestamp { path, .. }
            | Error::Document { path, .. }
            | Error::Decoder { path, .. } => {
                *path = set_path;
            }
            Error::Validation { .. } => {} // validation covers the whole record
        }
        self
    }

    /// If the failing field is known, return its path.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::ArrayLength { path, .. }
            | Error::ParseInt { path, .. }
            | Error::ParseFloat { path, .. }
            | Error::ParseBool { path, .. }
            | Error::Timestamp { path, .. }
            | Error::Document { path, .. }
            | Error::Decoder { path, .. } => path.is_known().then_some(path),
            Error::Validation { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ArrayLength {
                capacity,
                given,
                path,
            } => fmt_with_path(
                f,
                &format!("array length mismatch: capacity is {capacity}, got {given} values"),
                path,
            ),
            Error::ParseInt { cause, path } => fmt_with_path(f, cause, path),
            Error::ParseFloat { cause, path } => fmt_with_path(f, cause, path),
            Error::ParseBool {
                value,
                strict,
                path,
            } => {
                let expected = if *strict {
                    "`true` or `false`"
                } else {
                    "one of `1`, `0`, `t`, `f`, `true`, `false`"
                };
                fmt_with_path(
                    f,
                    &format!("invalid boolean {value:?}, expected {expected}"),
                    path,
                )
            }
            Error::Timestamp { cause, path } => fmt_with_path(f, cause, path),
            Error::Document { cause, path } => fmt_with_path(f, cause, path),
            Error::Decoder { cause, path } => fmt_with_path(f, cause, path),
            Error::Validation { cause } => write!(f, "validation error: {cause}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ParseInt { cause, .. } => Some(cause),
            Error::ParseFloat { cause, .. } => Some(cause),
            Error::Timestamp { cause, .. } => Some(cause),
            Error::Document { cause, .. } => Some(cause),
            Error::Decoder { cause, .. } | Error::Validation { cause } => Some(&**cause),
            Error::ArrayLength { .. } | Error::ParseBool { .. } => None,
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(cause: ParseIntError) -> Self {
        Error::ParseInt {
            cause,
            path: Path::UNKNOWN,
        }
    }
}

impl From<ParseFloatError> for Error {
    fn from(cause: ParseFloatError) -> Self {
        Error::ParseFloat {
            cause,
            path: Path::UNKNOWN,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(cause: chrono::ParseError) -> Self {
        Error::Timestamp {
            cause,
            path: Path::UNKNOWN,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(cause: serde_json::Error) -> Self {
        Error::Document {
            cause,
            path: Path::UNKNOWN,
        }
    }
}

fn fmt_with_path(f: &mut fmt::Formatter<'_>, msg: &dyn fmt::Display, path: &Path) -> fmt::Result {
    if path.is_known() {
        write!(f, "field `{path}`: {msg}")
    } else {
        write!(f, "{msg}")
    }
}
