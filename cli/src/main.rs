//! arborc - compile a class model into a containment tree and a
//! metadata listing.
//!
//! This is the entry point for the arborc binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "arborc",
    version,
    about = "Compile a class model into a containment tree and a metadata listing"
)]
struct Args {
    /// Input interchange document.
    input: PathBuf,

    /// Output path for the containment tree document.
    #[arg(short, long, default_value = "output.xml")]
    tree: PathBuf,

    /// Output path for the metadata listing.
    #[arg(short, long, default_value = "output.json")]
    meta: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    tracing::debug!(input = %args.input.display(), "starting compilation");
    let raw = arbor_loader::load_file(&args.input)?;
    let model = arbor_analyzer::validate(raw)
        .with_context(|| format!("invalid model in '{}'", args.input.display()))?;
    let artifacts = arbor_compiler::compile(&model)?;

    // Both artifacts are fully derived before either file is written:
    // a failed compilation leaves no partial or stale output behind.
    arbor_emit::write_tree_file(&args.tree, &artifacts.tree)?;
    arbor_emit::write_descriptors_file(&args.meta, &artifacts.descriptors)?;

    println!(
        "compiled {} ({} classes) -> {}, {}",
        args.input.display(),
        model.classes.len(),
        args.tree.display(),
        args.meta.display()
    );
    Ok(())
}
