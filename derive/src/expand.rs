use crate::{field::Field, record::Record};

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn record(record: &Record) -> TokenStream {
    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();
    let fields = record.fields.iter().map(field);

    quote! {
        impl #impl_generics ::query_binding::Record for #ident #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::query_binding::Field<'_>> {
                ::std::vec![#(#fields),*]
            }
        }

        impl #impl_generics ::query_binding::Embed for #ident #ty_generics #where_clause {
            fn embed(
                &mut self,
                walker: &mut ::query_binding::Walker<'_>,
                _values: &[::std::string::String],
            ) -> ::std::result::Result<(), ::query_binding::Error> {
                walker.walk(self)
            }
        }
    }
}

fn field(field: &Field) -> TokenStream {
    let ident = &field.ident;
    let name = &field.name;
    let rename = match &field.rename {
        Some(lit) => quote!(::std::option::Option::Some(#lit)),
        None => quote!(::std::option::Option::None),
    };

    if field.flatten {
        quote!(::query_binding::Field::embedded(#name, #rename, &mut self.#ident))
    } else {
        quote!(::query_binding::Field::value(#name, #rename, &mut self.#ident))
    }
}
