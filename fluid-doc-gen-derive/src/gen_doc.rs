//! Code generation for embedding the module tree of a documented library.
//!
//! Each annotated item is followed by an `inventory::submit!` block like:
//!
//! ```rust
//! # use fluid_doc_gen::type_info::*;
//! fluid_doc_gen::inventory::submit! {
//!     ObjectInfo {
//!         name: "Linear",
//!         module: Some("layers.nn"),
//!         kind: ObjectKind::Class,
//!     }
//! }
//! ```
//!
//! Code generation takes three steps:
//!
//! 1. Parse the attribute arguments into [DocAttr] and the item into a [syn::Item].
//! 2. Convert both into [ObjectInfo], checking that the item kind fits the macro.
//! 3. Generate tokens using the [quote::ToTokens] implementation of [ObjectInfo].

mod attr;
mod object;
mod util;

use attr::*;
use object::*;

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse2, Item, Result};

pub fn class(attr: TokenStream2, item: TokenStream2) -> Result<TokenStream2> {
    expand(Kind::Class, attr, item)
}

pub fn function(attr: TokenStream2, item: TokenStream2) -> Result<TokenStream2> {
    expand(Kind::Function, attr, item)
}

pub fn object(attr: TokenStream2, item: TokenStream2) -> Result<TokenStream2> {
    expand(Kind::Other, attr, item)
}

fn expand(kind: Kind, attr: TokenStream2, item: TokenStream2) -> Result<TokenStream2> {
    let attr = parse2::<DocAttr>(attr)?;
    let item = parse2::<Item>(item)?;
    let inner = ObjectInfo::new(kind, attr, &item)?;
    Ok(quote! {
        #item
        ::fluid_doc_gen::inventory::submit! {
            #inner
        }
    })
}
