use crate::{
    error::DocGenError,
    manifest::Manifest,
    object::{Module, Object},
    type_info::*,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Public surface of a library, rooted at a module named after the library
#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    /// Root module name, e.g. `fluid`
    pub name: String,
    /// Package qualifying autodoc targets, e.g. `paddle` for `paddle.fluid.layers.fc`
    pub package: Option<String>,
    pub root: Module,
}

impl Library {
    /// Gather every [ObjectInfo] and [ModuleInfo] linked into the current binary
    pub fn gather(name: &str, package: Option<&str>) -> Result<Self> {
        let mut builder = LibraryBuilder::new(name);
        if let Some(package) = package {
            builder = builder.package(package);
        }
        // `inventory` yields submissions in link order, sort them to keep output reproducible
        let mut modules: Vec<&ModuleInfo> = inventory::iter::<ModuleInfo>.into_iter().collect();
        modules.sort_by_key(|info| info.path);
        for info in modules {
            let all = info.all.iter().map(|name| name.to_string()).collect();
            builder.add_module(info.path, Some(all))?;
        }
        let mut objects: Vec<&ObjectInfo> = inventory::iter::<ObjectInfo>.into_iter().collect();
        objects.sort_by_key(|info| (info.module.unwrap_or_default(), info.name));
        for info in objects {
            builder.add_object(info.module.unwrap_or_default(), info.name, info.kind)?;
        }
        Ok(builder.build())
    }

    pub fn from_manifest(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Manifest::parse(path)?
            .into_library()
            .with_context(|| format!("Invalid manifest {}", path.display()))
    }

    /// Walk a dotted module path from the root, one member lookup per segment
    pub fn resolve(&self, module_name: Option<&str>) -> Result<&Module> {
        let mut current = &self.root;
        let Some(module_name) = module_name else {
            return Ok(current);
        };
        let mut walked = self.name.clone();
        for segment in module_name.split('.') {
            walked.push('.');
            walked.push_str(segment);
            current = match current.getattr(segment) {
                Some(Object::Module(module)) => module,
                Some(_) => return Err(DocGenError::NotAModule(walked).into()),
                None => return Err(DocGenError::ModuleNotFound(walked).into()),
            };
        }
        Ok(current)
    }
}

/// Assembles a [Library] from module declarations and object registrations
///
/// Parent modules are created on demand and registered as members of their parent.
#[derive(Debug)]
pub struct LibraryBuilder {
    name: String,
    package: Option<String>,
    root: Module,
}

impl LibraryBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            package: None,
            root: Module::new(name),
        }
    }

    pub fn package(mut self, package: &str) -> Self {
        self.package = Some(package.to_string());
        self
    }

    fn module_mut(&mut self, path: &str) -> Result<&mut Module> {
        let mut current = &mut self.root;
        if path.is_empty() {
            return Ok(current);
        }
        if path.split('.').any(str::is_empty) {
            return Err(DocGenError::InvalidModulePath(path.to_string()).into());
        }
        for segment in path.split('.') {
            let name = format!("{}.{}", current.name, segment);
            let entry = current
                .members
                .entry(segment.to_string())
                .or_insert_with(|| Object::Module(Module::new(name.clone())));
            current = match entry {
                Object::Module(module) => module,
                _ => return Err(DocGenError::NotAModule(name).into()),
            };
        }
        Ok(current)
    }

    /// Declare a module, with its `__all__` if known
    pub fn add_module(&mut self, path: &str, all: Option<Vec<String>>) -> Result<()> {
        let module = self.module_mut(path)?;
        if let Some(all) = all {
            if module.all.is_some() {
                return Err(DocGenError::DuplicateExports(module.name.clone()).into());
            }
            module.all = Some(all);
        }
        Ok(())
    }

    pub fn add_object(&mut self, module: &str, name: &str, kind: ObjectKind) -> Result<()> {
        let module = self.module_mut(module)?;
        if module.members.contains_key(name) {
            return Err(DocGenError::DuplicateMember {
                module: module.name.clone(),
                name: name.to_string(),
            }
            .into());
        }
        module.members.insert(name.to_string(), Object::from(kind));
        Ok(())
    }

    pub fn build(self) -> Library {
        Library {
            name: self.name,
            package: self.package,
            root: self.root,
        }
    }
}
