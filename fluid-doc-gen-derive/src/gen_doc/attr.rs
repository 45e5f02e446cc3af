use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Error, Expr, ExprLit, Lit, MetaNameValue, Result, Token,
};

/// Arguments of `#[gen_doc_*(module = "...", name = "...")]`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocAttr {
    pub module: Option<String>,
    pub name: Option<String>,
}

impl Parse for DocAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = Self::default();
        for item in Punctuated::<MetaNameValue, Token![,]>::parse_terminated(input)? {
            let value = match &item.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(value),
                    ..
                }) => value.value(),
                other => return Err(Error::new_spanned(other, "expected a string literal")),
            };
            if item.path.is_ident("module") {
                if value.split('.').any(str::is_empty) {
                    return Err(Error::new_spanned(
                        &item.value,
                        "module must be a dotted path like `layers.nn`",
                    ));
                }
                attr.module = Some(value);
            } else if item.path.is_ident("name") {
                attr.name = Some(value);
            } else {
                return Err(Error::new_spanned(
                    &item.path,
                    "unknown argument, expected `module` or `name`",
                ));
            }
        }
        Ok(attr)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quote::quote;

    #[test]
    fn test_parse() -> Result<()> {
        assert_eq!(syn::parse2::<DocAttr>(quote! {})?, DocAttr::default());
        assert_eq!(
            syn::parse2::<DocAttr>(quote! { module = "layers.nn", name = "relu" })?,
            DocAttr {
                module: Some("layers.nn".to_string()),
                name: Some("relu".to_string()),
            }
        );
        Ok(())
    }

    #[test]
    fn test_errors() {
        let err = syn::parse2::<DocAttr>(quote! { module = layers }).unwrap_err();
        assert_eq!(err.to_string(), "expected a string literal");
        let err = syn::parse2::<DocAttr>(quote! { module = "layers..nn" }).unwrap_err();
        assert_eq!(err.to_string(), "module must be a dotted path like `layers.nn`");
        let err = syn::parse2::<DocAttr>(quote! { rename = "x" }).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument, expected `module` or `name`");
    }
}
