use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier, used to borrow the slot
    pub(crate) ident: syn::Ident,

    /// Declared name, with any `r#` prefix removed
    pub(crate) name: String,

    /// Key override from `#[param(rename = "...")]`
    pub(crate) rename: Option<syn::LitStr>,

    /// True if the field is annotated with `#[param(flatten)]`
    pub(crate) flatten: bool,
}

#[derive(Default)]
struct FieldAttr {
    rename: Option<syn::LitStr>,
    flatten: Option<syn::Path>,
    skip: Option<syn::Path>,
}

impl Field {
    /// Returns `None` for fields marked `#[param(skip)]`.
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "`Record` fields must be named"));
        };

        let mut attr = FieldAttr::default();

        for a in &field.attrs {
            if !a.path().is_ident("param") {
                continue;
            }

            a.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if attr.rename.is_some() {
                        return Err(meta.error("duplicate `rename` attribute"));
                    }
                    attr.rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("flatten") {
                    if attr.flatten.is_some() {
                        return Err(meta.error("duplicate `flatten` attribute"));
                    }
                    attr.flatten = Some(meta.path.clone());
                } else if meta.path.is_ident("skip") {
                    if attr.skip.is_some() {
                        return Err(meta.error("duplicate `skip` attribute"));
                    }
                    attr.skip = Some(meta.path.clone());
                } else {
                    return Err(meta.error(
                        "unknown `param` attribute, expected `rename`, `flatten` or `skip`",
                    ));
                }
                Ok(())
            })?;
        }

        if let Some(skip) = &attr.skip {
            if attr.rename.is_some() || attr.flatten.is_some() {
                return Err(syn::Error::new_spanned(
                    skip,
                    "`skip` cannot be combined with other `param` attributes",
                ));
            }
            return Ok(None);
        }

        Ok(Some(Self {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            rename: attr.rename,
            flatten: attr.flatten.is_some(),
        }))
    }
}
