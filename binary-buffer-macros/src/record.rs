//! Record derive macro implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, LitStr, Member, parse_macro_input};

/// Derive the `Record` trait for a struct.
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Record derive is not supported for enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Record derive is not supported for unions.",
            ));
        }
    };

    let order = match pinned_order(input)? {
        Some(order) => order,
        None => quote! { __O },
    };

    let members = members(fields);
    let tys: Vec<_> = fields.iter().map(|f| &f.ty).collect();

    Ok(quote! {
        impl #impl_generics ::binary_buffer::Record for #name #ty_generics #where_clause {
            const WIDTH: usize = 0 #(+ <#tys as ::binary_buffer::Record>::WIDTH)*;

            #[inline]
            #[allow(unused_variables)]
            fn read_fields<__O: ::binary_buffer::ByteOrder, __B: ::core::convert::AsRef<[u8]>>(
                cursor: &mut ::binary_buffer::Cursor<__B>,
            ) -> ::binary_buffer::Result<Self> {
                ::core::result::Result::Ok(Self {
                    #(
                        #members: <#tys as ::binary_buffer::Record>::read_fields::<#order, __B>(cursor)?,
                    )*
                })
            }

            #[inline]
            #[allow(unused_variables)]
            fn write_fields<
                __O: ::binary_buffer::ByteOrder,
                __B: ::core::convert::AsRef<[u8]> + ::core::convert::AsMut<[u8]>,
            >(
                &self,
                cursor: &mut ::binary_buffer::Cursor<__B>,
            ) -> ::binary_buffer::Result<()> {
                #(
                    <#tys as ::binary_buffer::Record>::write_fields::<#order, __B>(&self.#members, cursor)?;
                )*
                ::core::result::Result::Ok(())
            }
        }
    })
}

/// Field accessors: `name` for named fields, `0`, `1`, ... for tuple fields.
fn members(fields: &Fields) -> Vec<Member> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(i)),
        })
        .collect()
}

/// Parse `#[record(order = "host" | "network")]`.
fn pinned_order(input: &DeriveInput) -> syn::Result<Option<TokenStream2>> {
    let mut order = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("order") {
                return Err(meta.error("unsupported record attribute, expected `order`"));
            }
            let value: LitStr = meta.value()?.parse()?;
            order = Some(match value.value().as_str() {
                "host" | "little" => quote! { ::binary_buffer::Host },
                "network" | "big" => quote! { ::binary_buffer::Network },
                _ => {
                    return Err(syn::Error::new_spanned(
                        value,
                        "expected \"host\" or \"network\"",
                    ));
                }
            });
            Ok(())
        })?;
    }
    Ok(order)
}
