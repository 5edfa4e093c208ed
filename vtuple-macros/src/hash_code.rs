//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Fields};

/// `(pattern, bindings)` destructuring `fields`.
fn bind(fields: &Fields) -> (TokenStream, Vec<Ident>) {
    let bindings: Vec<_> = (0..fields.iter().count())
        .map(|i| Ident::new(&format!("_{i}"), Span::call_site()))
        .collect();
    let pattern = match fields {
        Fields::Named(named) => {
            let names = named.named.iter().map(|f| &f.ident);
            quote!({ #(#names: #bindings),* })
        }
        Fields::Unnamed(_) => quote!(( #(#bindings),* )),
        Fields::Unit => quote!(),
    };
    (pattern, bindings)
}

pub fn derive(input: DeriveInput) -> syn::Result<TokenStream> {
    let vt = crate::vt_mod();
    let DeriveInput {
        ident,
        mut generics,
        data,
        ..
    } = input;
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(#vt::HashCode));
    }
    let body = match data {
        Data::Struct(data) if data.fields.iter().next().is_none() => quote!(0),
        Data::Struct(data) => {
            let (pattern, bindings) = bind(&data.fields);
            quote! {
                let Self #pattern = self;
                #vt::hash::combine([#(#vt::HashCode::hash_code(#bindings)),*])
            }
        }
        Data::Enum(data) if data.variants.is_empty() => quote!(match *self {}),
        Data::Enum(data) => {
            let arms = data.variants.iter().enumerate().map(|(index, variant)| {
                let name = &variant.ident;
                let index = index as i32;
                let (pattern, bindings) = bind(&variant.fields);
                quote! {
                    Self::#name #pattern => #vt::hash::combine([#index #(, #vt::HashCode::hash_code(#bindings))*]),
                }
            });
            quote! {
                match self {
                    #(#arms)*
                }
            }
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "HashCode cannot be derived for unions",
            ))
        }
    };
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #vt::HashCode for #ident #ty_generics #where_clause {
            fn hash_code(&self) -> i32 {
                #body
            }
        }
    })
}
