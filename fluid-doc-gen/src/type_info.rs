//! Store of metadata describing the public surface of a library
//!
//! Documentation generation takes two steps:
//!
//! Store metadata (compile time)
//! ------------------------------
//! Items annotated with `#[gen_doc_class]`, `#[gen_doc_function]` or
//! `#[gen_doc_object]` embed an [ObjectInfo] using
//! [inventory::submit!](https://docs.rs/inventory/latest/inventory/macro.submit.html),
//! and [export_module!](crate::export_module) embeds a [ModuleInfo] carrying
//! the module's `__all__`.
//!
//! Gathering metadata and generating documents (runtime)
//! -------------------------------------------------------
//! [Library::gather](crate::Library::gather) collects every submission with
//! [inventory::iter](https://docs.rs/inventory/latest/inventory/struct.iter.html)
//! and rebuilds the module tree walked by [DocGenerator](crate::DocGenerator).

use serde::{Deserialize, Serialize};

/// Kind of an exported object, deciding which autodoc directive documents it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Class,
    Function,
    /// Constants, instances and anything else autodoc is not asked to render
    Other,
}

/// Info of an item annotated by one of the `gen_doc_*` attribute macros
#[derive(Debug)]
pub struct ObjectInfo {
    /// The name exposed by the library
    pub name: &'static str,
    /// Module path relative to the library root, `None` for the root itself
    pub module: Option<&'static str>,
    pub kind: ObjectKind,
}

inventory::collect!(ObjectInfo);

/// Info of a module's exported-name list, submitted by `export_module!`
#[derive(Debug)]
pub struct ModuleInfo {
    /// Module path relative to the library root, `""` for the root itself
    pub path: &'static str,
    pub all: &'static [&'static str],
}

inventory::collect!(ModuleInfo);
