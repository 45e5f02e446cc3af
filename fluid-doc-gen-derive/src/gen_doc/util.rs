use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};

pub fn quote_option<T: ToTokens>(a: &Option<T>) -> TokenStream2 {
    if let Some(a) = a {
        quote! { Some(#a) }
    } else {
        quote! { None }
    }
}
