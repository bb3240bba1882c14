//! Public macros.

/// Construct [`crate::Options`] from `Default` and a list of field assignments.
///
/// Example:
///
/// ```rust
/// use query_binding::options::KeySource;
///
/// let options = query_binding::options! {
///     key_source: KeySource::FieldName,
///     strict_booleans: true,
/// };
/// assert!(options.strict_booleans);
/// ```
#[macro_export]
macro_rules! options {
    ( $( $field:ident : $value:expr ),* $(,)? ) => {{
        let mut opt = $crate::Options::default();
        $(
            opt.$field = $value;
        )*
        opt
    }};
}

/// Implement [`crate::Embed`] for types that decode themselves through [`crate::DecodeParam`].
///
/// An embedded custom decoder receives every value found under the embedded field's own key,
/// including an empty list when the key is absent.
///
/// ```rust
/// use query_binding::{DecodeParam, Record};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Tags(Vec<String>);
///
/// impl DecodeParam for Tags {
///     type Error = std::convert::Infallible;
///
///     fn decode_param(values: &[String]) -> Result<Self, Self::Error> {
///         Ok(Tags(values.to_vec()))
///     }
/// }
///
/// query_binding::embed_with_decoder!(Tags);
///
/// #[derive(Default, Record)]
/// struct Search {
///     #[param(flatten, rename = "tag")]
///     tags: Tags,
/// }
///
/// let source = std::collections::HashMap::from([(
///     "tag".to_string(),
///     vec!["a".to_string(), "b".to_string()],
/// )]);
/// let mut search = Search::default();
/// query_binding::mapping(&source, &mut search).unwrap();
/// assert_eq!(search.tags, Tags(vec!["a".into(), "b".into()]));
/// ```
#[macro_export]
macro_rules! embed_with_decoder {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl $crate::Embed for $ty {
                fn embed(
                    &mut self,
                    walker: &mut $crate::Walker<'_>,
                    values: &[::std::string::String],
                ) -> ::std::result::Result<(), $crate::Error> {
                    $crate::FromParam::from_param(self, walker.values(values))
                }
            }
        )+
    };
}
