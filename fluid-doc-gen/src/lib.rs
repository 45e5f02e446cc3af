//! Generate reStructuredText API reference pages for Sphinx autodoc.
//!
//! A library describes its public surface as a tree of modules, each with an
//! exported-name list (`__all__`) and members tagged as class, function or
//! something else. The tree comes either from items annotated with the
//! attribute macros in [derive] and gathered with [define_library_gatherer!],
//! or from a manifest file read by [Manifest].
//!
//! [DocGenerator] then walks one module of that tree and writes an `.rst`
//! page with a title, cross-reference anchors and `autoclass` /
//! `autofunction` directives.

pub use fluid_doc_gen_derive as derive;
pub use inventory;

pub mod cli;
pub mod docgen;
mod error;
mod library;
mod manifest;
pub mod object;
pub mod type_info;

pub type Result<T> = anyhow::Result<T>;
pub use docgen::{DocGenConfig, DocGenerator};
pub use error::DocGenError;
pub use library::{Library, LibraryBuilder};
pub use manifest::{LibraryTable, Manifest, ModuleTable};

/// Define a function gathering every registry entry linked into the binary
///
/// ```rust
/// fluid_doc_gen::define_library_gatherer!(library, "fluid", package = "paddle");
///
/// fn main() -> fluid_doc_gen::Result<()> {
///     let library = library()?;
///     assert_eq!(library.name, "fluid");
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! define_library_gatherer {
    ($function_name:ident, $root:literal) => {
        pub fn $function_name() -> $crate::Result<$crate::Library> {
            $crate::Library::gather($root, None)
        }
    };
    ($function_name:ident, $root:literal, package = $package:literal) => {
        pub fn $function_name() -> $crate::Result<$crate::Library> {
            $crate::Library::gather($root, Some($package))
        }
    };
}

/// Declare the exported-name list (`__all__`) of a module
///
/// The path is relative to the library root, `""` being the root itself.
///
/// ```rust
/// fluid_doc_gen::export_module!("layers.nn", ["fc", "Linear", "relu"]);
/// ```
#[macro_export]
macro_rules! export_module {
    ($path:literal, [$($name:literal),* $(,)?]) => {
        $crate::inventory::submit! {
            $crate::type_info::ModuleInfo {
                path: $path,
                all: &[$($name),*],
            }
        }
    };
}
