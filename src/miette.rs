//! `miette` integration.
//!
//! This module is feature-gated behind the `miette` feature.

use std::fmt;

use miette::Diagnostic;

use crate::Error;

/// Convert a binding [`Error`] into a `miette::Report`.
///
/// ```rust
/// use query_binding::Record;
///
/// #[derive(Debug, Default, Record)]
/// struct Paging {
///     page: u32,
/// }
///
/// let source = std::collections::HashMap::from([(
///     "page".to_string(),
///     vec!["ten".to_string()],
/// )]);
/// let err = query_binding::from_source::<Paging, _>(&source).unwrap_err();
/// let report = query_binding::miette::to_miette_report(err);
///
/// // `Debug` formatting uses miette's graphical reporter.
/// eprintln!("{report:?}");
/// ```
pub fn to_miette_report(err: Error) -> miette::Report {
    miette::Report::new(err)
}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            Error::ArrayLength { .. } => "query_binding::array_length",
            Error::ParseInt { .. } => "query_binding::parse_int",
            Error::ParseFloat { .. } => "query_binding::parse_float",
            Error::ParseBool { .. } => "query_binding::parse_bool",
            Error::Timestamp { .. } => "query_binding::timestamp",
            Error::Document { .. } => "query_binding::document",
            Error::Decoder { .. } => "query_binding::decoder",
            Error::Validation { .. } => "query_binding::validation",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: Box<dyn fmt::Display + 'a> = match self {
            Error::ArrayLength { capacity, .. } => {
                Box::new(format!("send at most {capacity} values for this parameter"))
            }
            Error::ParseInt { .. } => {
                Box::new("expected a base-10 integer within the range of the field type")
            }
            Error::ParseFloat { .. } => Box::new("expected a decimal number"),
            Error::ParseBool { strict: true, .. } => Box::new("expected `true` or `false`"),
            Error::ParseBool { .. } => Box::new("expected `1`, `0`, `t`, `f`, `true` or `false`"),
            Error::Timestamp { .. } => {
                Box::new("expected an RFC 3339 timestamp such as `2023-01-01T00:00:00Z`")
            }
            Error::Document { .. } => Box::new("expected a JSON document"),
            Error::Decoder { .. } | Error::Validation { .. } => return None,
        };
        Some(help)
    }
}
