use thiserror::Error;

/// Failures worth telling apart when resolving modules and building the library tree.
///
/// They travel inside [anyhow::Error]; use `downcast_ref::<DocGenError>()` to match on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocGenError {
    /// A segment of a `--module` path does not exist. Carries the dotted path up to that segment.
    #[error("Cannot find {0}")]
    ModuleNotFound(String),

    #[error("Cannot find submodule {0}")]
    SubmoduleNotFound(String),

    #[error("{0} is not a module")]
    NotAModule(String),

    #[error("module_prefix must be prefix of module_name: `{prefix}` is not a prefix of `{module}`")]
    PrefixMismatch { prefix: String, module: String },

    #[error("Invalid module path `{0}`")]
    InvalidModulePath(String),

    #[error("`{name}` is registered twice in {module}")]
    DuplicateMember { module: String, name: String },

    #[error("Exported names of {0} are declared twice")]
    DuplicateExports(String),
}
