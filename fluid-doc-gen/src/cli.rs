//! Command line shared by every `gen_doc` binary

use crate::{docgen, DocGenConfig, Library, Result};
use anyhow::Context;
use clap::{Args, Parser};
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenDocArgs {
    #[arg(long, help = "Generate the documentation of which module")]
    pub module: Option<String>,
    #[arg(
        long = "module_prefix",
        alias = "module-prefix",
        help = "Generate the prefix of module"
    )]
    pub module_prefix: Option<String>,
    #[arg(
        long,
        num_args = 0..,
        help = "Document these submodules as separate sections"
    )]
    pub submodules: Option<Vec<String>>,
    #[arg(short, long, help = "Write to this file instead of standard output")]
    pub output: Option<PathBuf>,
}

impl From<GenDocArgs> for DocGenConfig {
    fn from(args: GenDocArgs) -> Self {
        Self {
            module: args.module,
            module_prefix: args.module_prefix,
            submodules: args.submodules,
            output: args.output,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gen_doc", version, about = "Generate reStructuredText API reference")]
struct Cli {
    #[command(flatten)]
    args: GenDocArgs,
}

/// Generate the page of `library` described by `config`
pub fn run(library: &Library, config: &DocGenConfig) -> Result<()> {
    match &config.output {
        Some(path) => {
            let f = fs::File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            docgen::generate(library, config, BufWriter::new(f))?.flush()?;
            log::info!("Written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            docgen::generate(library, config, BufWriter::new(stdout.lock()))?.flush()?;
        }
    }
    Ok(())
}

/// Entry point for binaries documenting a gathered library
///
/// ```rust,no_run
/// fluid_doc_gen::define_library_gatherer!(library, "fluid");
///
/// fn main() -> fluid_doc_gen::Result<()> {
///     fluid_doc_gen::cli::main_with(library()?)
/// }
/// ```
pub fn main_with(library: Library) -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run(&library, &cli.args.into())
}
