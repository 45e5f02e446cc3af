//! Documentation generation module
//!
//! Turns one module of a [Library] into a Sphinx page of `autoclass` and
//! `autofunction` directives.

mod config;
mod generator;
pub mod rst;

pub use config::DocGenConfig;
pub use generator::{header_name, DocGenerator};

use crate::{Library, Result};
use std::io::Write;

/// Write the page described by `config` into `stream` and hand the stream back
pub fn generate<W: Write>(library: &Library, config: &DocGenConfig, stream: W) -> Result<W> {
    let mut generator = DocGenerator::new(
        library,
        config.module.as_deref(),
        config.module_prefix.as_deref(),
        stream,
    )?;
    match &config.submodules {
        Some(submodules) => {
            for submodule in submodules {
                generator.print_submodule(submodule)?;
            }
        }
        None => generator.print_current_module()?,
    }
    log::info!(
        "Generate API reference of `{}` with prefix `{}`",
        generator.module_name(),
        generator.module_prefix()
    );
    Ok(generator.into_inner())
}
