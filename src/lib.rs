#![doc = include_str!("../README.md")]

// Lets the derive's `::query_binding::...` paths resolve inside this crate's own tests.
extern crate self as query_binding;

pub use binding::{bind, QueryBinding, StructValidator};
#[cfg(feature = "garde")]
pub use binding::{bind_valid, Garde};
#[cfg(feature = "validator")]
pub use binding::{bind_validate, ValidatorEngine};
pub use convert::{FromParam, Values};
pub use decode::DecodeParam;
pub use error::{BoxError, Error, Path};
pub use json::Json;
pub use options::Options;
pub use record::{Embed, Field, Record, Target};
pub use source::Source;
pub use walk::{from_source, from_source_with_options, mapping, mapping_with_options, Walker};

#[cfg(feature = "derive")]
pub use query_binding_derive::Record;

mod binding;
mod convert;
mod decode;
mod error;
mod json;
mod macros;
#[cfg(feature = "miette")]
pub mod miette;
pub mod options;
mod parse_scalars;
mod record;
mod source;
mod walk;
