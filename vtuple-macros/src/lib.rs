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

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

mod hash_code;

/// The path at which the `vtuple` items can be found from the calling crate.
pub(crate) fn vt_mod() -> proc_macro2::TokenStream {
    match proc_macro_crate::crate_name("vtuple-core") {
        Ok(proc_macro_crate::FoundCrate::Itself) => return quote!(crate),
        Ok(proc_macro_crate::FoundCrate::Name(crate_name)) => {
            let crate_name = Ident::new(&crate_name, Span::call_site());
            return quote!(::#crate_name);
        }
        _ => {}
    }
    match proc_macro_crate::crate_name("vtuple")
        .expect("Couldn't find `vtuple` in your dependencies")
    {
        proc_macro_crate::FoundCrate::Itself => quote!(crate),
        proc_macro_crate::FoundCrate::Name(crate_name) => {
            let crate_name = Ident::new(&crate_name, Span::call_site());
            quote!(::#crate_name)
        }
    }
}

/// Implements `HashCode` by combining the hash codes of the fields, in declaration order, exactly
/// as a tuple of those fields would.
///
/// For enums, the variant's index is combined in front of its fields.
#[proc_macro_derive(HashCode)]
pub fn hash_code(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);
    hash_code::derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Implements `Render` by forwarding to the type's `Display` implementation.
#[proc_macro_derive(Render)]
pub fn render(tokens: TokenStream) -> TokenStream {
    let DeriveInput {
        ident, generics, ..
    } = parse_macro_input!(tokens as DeriveInput);
    let vt = vt_mod();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let mut where_clause = where_clause.cloned().unwrap_or_else(|| syn::WhereClause {
        where_token: Default::default(),
        predicates: Default::default(),
    });
    where_clause
        .predicates
        .push(syn::parse_quote!(Self: ::core::fmt::Display));
    quote! {
        impl #impl_generics #vt::Render for #ident #ty_generics #where_clause {
            fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }
    }
    .into()
}
