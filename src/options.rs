use serde::{Deserialize, Serialize};

/// How a field's key in the source collection is derived from its declaration.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeySource {
    /// The `#[param(rename = "...")]` override if present, else the declared field name.
    #[default]
    Declared,
    /// Only explicit overrides name a key. Fields without one resolve to the empty key and are
    /// skipped, unless they are embedded.
    RenameOnly,
    /// The declared field name; overrides (including the `"-"` sentinel) are ignored.
    FieldName,
}

impl KeySource {
    /// Resolve the key a field is looked up under.
    pub(crate) fn resolve(self, name: &'static str, rename: Option<&'static str>) -> &'static str {
        match self {
            KeySource::Declared => rename.unwrap_or(name),
            KeySource::RenameOnly => rename.unwrap_or(""),
            KeySource::FieldName => name,
        }
    }
}

/// Binding configuration options.
///
/// Example: bind a record with only explicitly renamed fields.
///
/// ```rust
/// use std::collections::HashMap;
///
/// use query_binding::options::KeySource;
/// use query_binding::Record;
///
/// #[derive(Default, Record)]
/// struct Page {
///     #[param(rename = "page")]
///     number: u32,
///     internal: String,
/// }
///
/// let source = HashMap::from([
///     ("page".to_string(), vec!["3".to_string()]),
///     ("internal".to_string(), vec!["ignored".to_string()]),
/// ]);
///
/// let options = query_binding::options! {
///     key_source: KeySource::RenameOnly,
/// };
///
/// let mut page = Page::default();
/// query_binding::mapping_with_options(&source, &mut page, &options).unwrap();
/// assert_eq!(page.number, 3);
/// assert_eq!(page.internal, "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Policy for deriving field keys. Default: [`KeySource::Declared`].
    pub key_source: KeySource,
    /// If true, interpret only the exact literals `true` and `false` as booleans.
    /// Default: false (`1`, `0`, `t`, `f`, `true`, `false` in any letter case).
    pub strict_booleans: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            key_source: KeySource::Declared,
            strict_booleans: false,
        }
    }
}
