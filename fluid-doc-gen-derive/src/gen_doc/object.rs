use super::util::quote_option;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens, TokenStreamExt};
use syn::{ext::IdentExt, Error, Item, Result};

use super::DocAttr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Class,
    Function,
    Other,
}

impl Kind {
    fn misuse(self) -> &'static str {
        match self {
            Kind::Class => "#[gen_doc_class] can only be applied to a struct or an enum",
            Kind::Function => "#[gen_doc_function] can only be applied to a fn",
            Kind::Other => "#[gen_doc_object] can only be applied to a const or a static",
        }
    }
}

impl ToTokens for Kind {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        tokens.append_all(match self {
            Kind::Class => quote! { ::fluid_doc_gen::type_info::ObjectKind::Class },
            Kind::Function => quote! { ::fluid_doc_gen::type_info::ObjectKind::Function },
            Kind::Other => quote! { ::fluid_doc_gen::type_info::ObjectKind::Other },
        })
    }
}

pub struct ObjectInfo {
    name: String,
    module: Option<String>,
    kind: Kind,
}

impl ObjectInfo {
    pub fn new(kind: Kind, attr: DocAttr, item: &Item) -> Result<Self> {
        let ident = match (kind, item) {
            (Kind::Class, Item::Struct(item)) => &item.ident,
            (Kind::Class, Item::Enum(item)) => &item.ident,
            (Kind::Function, Item::Fn(item)) => &item.sig.ident,
            (Kind::Other, Item::Const(item)) => &item.ident,
            (Kind::Other, Item::Static(item)) => &item.ident,
            _ => return Err(Error::new_spanned(item, kind.misuse())),
        };
        Ok(Self {
            name: attr.name.unwrap_or_else(|| ident.unraw().to_string()),
            module: attr.module,
            kind,
        })
    }
}

impl ToTokens for ObjectInfo {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let Self { name, module, kind } = self;
        let module_tt = quote_option(module);
        tokens.append_all(quote! {
            ::fluid_doc_gen::type_info::ObjectInfo {
                name: #name,
                module: #module_tt,
                kind: #kind,
            }
        })
    }
}
