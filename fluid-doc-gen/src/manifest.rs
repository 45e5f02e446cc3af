use crate::{docgen::DocGenConfig, library::*, type_info::ObjectKind};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::*};

/// Description of a library's module tree, written in TOML or JSON
///
/// ```toml
/// [library]
/// name = "fluid"
/// package = "paddle"
///
/// [[module]]
/// path = "layers"
/// all = ["fc", "Linear"]
/// classes = ["Linear"]
/// functions = ["fc"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub library: LibraryTable,
    /// Defaults for the command line options
    #[serde(rename = "doc-gen", default)]
    pub doc_gen: Option<DocGenConfig>,
    #[serde(rename = "module", default)]
    pub modules: Vec<ModuleTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryTable {
    pub name: String,
    pub package: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleTable {
    /// Path relative to the library root, empty for the root module
    #[serde(default)]
    pub path: String,
    pub all: Option<Vec<String>>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub others: Vec<String>,
}

impl Manifest {
    pub fn parse(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read manifest {}", path.display()))?;
        let manifest = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => bail!("{} is neither a .toml nor a .json manifest", path.display()),
        };
        manifest.with_context(|| format!("Invalid manifest {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn into_library(self) -> Result<Library> {
        let mut builder = LibraryBuilder::new(&self.library.name);
        if let Some(package) = &self.library.package {
            builder = builder.package(package);
        }
        for module in self.modules {
            builder.add_module(&module.path, module.all)?;
            let objects = [
                (module.classes, ObjectKind::Class),
                (module.functions, ObjectKind::Function),
                (module.others, ObjectKind::Other),
            ];
            for (names, kind) in objects {
                for name in names {
                    builder.add_object(&module.path, &name, kind)?;
                }
            }
        }
        Ok(builder.build())
    }
}
