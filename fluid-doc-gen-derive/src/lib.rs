mod gen_doc;

use proc_macro::TokenStream;

/// Register a struct or an enum as a class of the documented library
///
/// ```
/// # use fluid_doc_gen::derive::*;
/// #[gen_doc_class(module = "layers.nn")]
/// pub struct Linear {
///     pub in_features: usize,
///     pub out_features: usize,
/// }
/// ```
///
/// The class is registered in the library root if `module` is omitted,
/// and under its Rust name unless `name` is given.
#[proc_macro_attribute]
pub fn gen_doc_class(attr: TokenStream, item: TokenStream) -> TokenStream {
    gen_doc::class(attr.into(), item.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Register a function of the documented library
///
/// ```
/// # use fluid_doc_gen::derive::*;
/// #[gen_doc_function(module = "layers.nn", name = "relu")]
/// pub fn relu_f32(x: f32) -> f32 {
///     x.max(0.0)
/// }
/// ```
#[proc_macro_attribute]
pub fn gen_doc_function(attr: TokenStream, item: TokenStream) -> TokenStream {
    gen_doc::function(attr.into(), item.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Register a `const` or `static` of the documented library
///
/// Such objects appear in the module tree but are never documented by autodoc.
///
/// ```
/// # use fluid_doc_gen::derive::*;
/// #[gen_doc_object(name = "__version__")]
/// pub const VERSION: &str = "1.5.0";
/// ```
#[proc_macro_attribute]
pub fn gen_doc_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    gen_doc::object(attr.into(), item.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
