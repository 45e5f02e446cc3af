//! Object graph of a documented library

use crate::type_info::ObjectKind;
use indexmap::IndexMap;
use itertools::Itertools;

/// A member of a module
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Module(Module),
    Class,
    Function,
    Other,
}

impl Object {
    pub fn as_module(&self) -> Option<&Module> {
        match self {
            Object::Module(module) => Some(module),
            _ => None,
        }
    }

    /// Kind used to pick a directive. Modules are never documented as items.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Class => ObjectKind::Class,
            Object::Function => ObjectKind::Function,
            Object::Module(_) | Object::Other => ObjectKind::Other,
        }
    }
}

impl From<ObjectKind> for Object {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Class => Object::Class,
            ObjectKind::Function => Object::Function,
            ObjectKind::Other => Object::Other,
        }
    }
}

/// A module with its exported-name list and members in registration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    /// Fully qualified dotted name, starting with the library root
    pub name: String,
    /// `__all__`, if the module declares one
    pub all: Option<Vec<String>>,
    pub members: IndexMap<String, Object>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn getattr(&self, name: &str) -> Option<&Object> {
        self.members.get(name)
    }

    pub fn submodule(&self, name: &str) -> Option<&Module> {
        self.getattr(name).and_then(Object::as_module)
    }

    /// Exported names in declaration order
    ///
    /// Without `__all__`, every member whose name does not start with `_` is exported.
    pub fn exports(&self) -> Vec<&str> {
        match &self.all {
            Some(all) => all.iter().map(String::as_str).collect(),
            None => {
                log::warn!(
                    "{} declares no __all__, exporting its public members",
                    self.name
                );
                self.members
                    .keys()
                    .map(String::as_str)
                    .filter(|name| !name.starts_with('_'))
                    .collect()
            }
        }
    }

    /// Exported names sorted case-insensitively, keeping declaration order for ties
    pub fn sorted_exports(&self) -> Vec<&str> {
        sort_case_insensitive(self.exports())
    }
}

pub fn sort_case_insensitive<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    names
        .into_iter()
        .sorted_by_cached_key(|name| name.to_lowercase())
        .collect()
}
