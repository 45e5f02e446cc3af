//! Configuration for documentation generation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to document and where to write it
///
/// Read from the `[doc-gen]` table of a manifest and from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct DocGenConfig {
    /// Dotted path of the documented module under the library root
    pub module: Option<String>,

    /// Prefix stripped from the title and used for anchors and autodoc targets
    pub module_prefix: Option<String>,

    /// Submodules documented as separate sections, the module itself if `None`
    pub submodules: Option<Vec<String>>,

    /// Output file, standard output if `None`
    pub output: Option<PathBuf>,
}

impl DocGenConfig {
    /// Overlay `other` on top of `self`, field by field
    pub fn merge(self, other: DocGenConfig) -> Self {
        Self {
            module: other.module.or(self.module),
            module_prefix: other.module_prefix.or(self.module_prefix),
            submodules: other.submodules.or(self.submodules),
            output: other.output.or(self.output),
        }
    }
}
