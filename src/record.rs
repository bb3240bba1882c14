//! Record descriptors: the declared, writable fields of a target record.
//!
//! `#[derive(Record)]` generates these; implementing [`Record`] by hand is equally supported.
use crate::convert::FromParam;
use crate::error::Error;
use crate::walk::Walker;

/// A record whose fields can be bound from a [`crate::Source`].
///
/// ```rust
/// use query_binding::{Field, Record};
///
/// #[derive(Default)]
/// struct Paging {
///     page: u32,
///     size: u32,
/// }
///
/// impl Record for Paging {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::value("page", None, &mut self.page),
///             Field::value("size", Some("pageSize"), &mut self.size),
///         ]
///     }
/// }
///
/// let source = std::collections::HashMap::from([
///     ("page".to_string(), vec!["2".to_string()]),
///     ("pageSize".to_string(), vec!["50".to_string()]),
/// ]);
/// let mut paging = Paging::default();
/// query_binding::mapping(&source, &mut paging).unwrap();
/// assert_eq!((paging.page, paging.size), (2, 50));
/// ```
pub trait Record {
    /// Writable fields in declaration order, each borrowing its slot.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&mut self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for &mut R {
    fn fields(&mut self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// A field in embedded position.
///
/// Derived records implement this by walking their own fields against the parent's source.
/// Types decoding themselves get it through [`crate::embed_with_decoder!`].
pub trait Embed {
    /// Bind the embedded field. `values` are the values found under the field's own key and
    /// may be empty.
    fn embed(&mut self, walker: &mut Walker<'_>, values: &[String]) -> Result<(), Error>;
}

impl<E: Embed + ?Sized> Embed for Box<E> {
    fn embed(&mut self, walker: &mut Walker<'_>, values: &[String]) -> Result<(), Error> {
        (**self).embed(walker, values)
    }
}

/// How a field is written.
pub enum Target<'a> {
    /// Converted from the values bound to the field's key.
    Value(&'a mut dyn FromParam),
    /// Sub-fields are promoted into the parent's key namespace.
    Embedded(&'a mut dyn Embed),
}

/// One declared field of a record.
pub struct Field<'a> {
    name: &'static str,
    rename: Option<&'static str>,
    target: Target<'a>,
}

impl<'a> Field<'a> {
    /// A field converted from the values bound to its key.
    pub fn value(
        name: &'static str,
        rename: Option<&'static str>,
        target: &'a mut dyn FromParam,
    ) -> Self {
        Self {
            name,
            rename,
            target: Target::Value(target),
        }
    }

    /// An embedded field.
    pub fn embedded(
        name: &'static str,
        rename: Option<&'static str>,
        target: &'a mut dyn Embed,
    ) -> Self {
        Self {
            name,
            rename,
            target: Target::Embedded(target),
        }
    }

    /// Declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Explicit key override, if any.
    pub fn rename(&self) -> Option<&'static str> {
        self.rename
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.target, Target::Embedded(_))
    }

    pub(crate) fn into_target(self) -> Target<'a> {
        self.target
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("rename", &self.rename)
            .field("embedded", &self.is_embedded())
            .finish()
    }
}
