use anyhow::Context;
use clap::Parser;
use fluid_doc_gen::{cli::GenDocArgs, DocGenConfig, Manifest, Result};
use std::path::PathBuf;

/// Generate reStructuredText API reference of a library described by a manifest
#[derive(Parser, Debug)]
#[command(name = "gen_doc_manifest", version)]
struct Cli {
    #[arg(long, default_value = "doc-gen.toml", help = "Library manifest (.toml or .json)")]
    manifest: PathBuf,
    #[command(flatten)]
    args: GenDocArgs,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut manifest = Manifest::parse(&cli.manifest)?;
    let config = manifest
        .doc_gen
        .take()
        .unwrap_or_default()
        .merge(DocGenConfig::from(cli.args));
    let library = manifest
        .into_library()
        .with_context(|| format!("Invalid manifest {}", cli.manifest.display()))?;
    fluid_doc_gen::cli::run(&library, &config)
}
