use crate::field::Field;

use proc_macro2::TokenStream;

#[derive(Debug)]
pub(crate) struct Record {
    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Struct generics, forwarded verbatim to the generated impls
    pub(crate) generics: syn::Generics,

    /// Writable fields in declaration order. `#[param(skip)]` fields are not listed.
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn parse(input: TokenStream) -> syn::Result<Self> {
        let ast: syn::DeriveInput = syn::parse2(input)?;

        let data = match &ast.data {
            syn::Data::Struct(data) => data,
            syn::Data::Enum(data) => {
                return Err(syn::Error::new_spanned(
                    data.enum_token,
                    "`Record` can only be derived for structs",
                ));
            }
            syn::Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "`Record` can only be derived for structs",
                ));
            }
        };

        let named = match &data.fields {
            syn::Fields::Named(named) => named,
            syn::Fields::Unit => return Ok(Self::new(ast.ident, ast.generics, vec![])),
            syn::Fields::Unnamed(fields) => {
                return Err(syn::Error::new_spanned(
                    fields,
                    "`Record` fields must be named",
                ));
            }
        };

        let mut errors: Option<syn::Error> = None;
        let mut fields = vec![];

        for field in &named.named {
            match Field::from_ast(field) {
                Ok(Some(field)) => fields.push(field),
                Ok(None) => {}
                Err(e) => match &mut errors {
                    Some(errors) => errors.combine(e),
                    None => errors = Some(e),
                },
            }
        }

        if let Some(errors) = errors {
            return Err(errors);
        }

        Ok(Self::new(ast.ident, ast.generics, fields))
    }

    fn new(ident: syn::Ident, generics: syn::Generics, fields: Vec<Field>) -> Self {
        Self {
            ident,
            generics,
            fields,
        }
    }
}
