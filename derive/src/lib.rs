extern crate proc_macro;

mod expand;
mod field;
mod record;

use proc_macro::TokenStream;

/// Derives `query_binding::Record` and `query_binding::Embed` for a struct with named fields.
///
/// Field attributes:
///
/// - `#[param(rename = "key")]`: look the field up under `key` instead of its name.
///   `rename = "-"` keeps the field in the descriptor list but the walker always skips it.
/// - `#[param(skip)]`: the field is not writable by the binder at all.
/// - `#[param(flatten)]`: the field is embedded; its own fields share the parent's keys.
#[proc_macro_derive(Record, attributes(param))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match record::Record::parse(input.into()) {
        Ok(record) => expand::record(&record).into(),
        Err(e) => e.to_compile_error().into(),
    }
}
