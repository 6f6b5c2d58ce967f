//! vmd-export - glTF to VMD conversion tool
//!
//! Converts glTF scenes (.gltf + external .bin buffers) to the VMD binary
//! container (.vmd), one output file per input file.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use vmd_export::{process_dir, BatchOptions};

#[derive(Parser)]
#[command(name = "vmd-export")]
#[command(about = "Converts glTF scenes in a directory to VMD files")]
#[command(version)]
struct Cli {
    /// Directory containing .gltf files to convert
    dir: PathBuf,

    /// Also process subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Skip .gltf files whose .vmd output already exists
    #[arg(long)]
    skip_built: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if !cli.dir.is_dir() {
        anyhow::bail!("{:?} is not a directory", cli.dir);
    }

    let options = BatchOptions {
        recursive: cli.recursive,
        skip_built: cli.skip_built,
    };
    let summary = process_dir(&cli.dir, &options)?;

    tracing::info!(
        "Done: {} converted, {} skipped, {} failed",
        summary.converted,
        summary.skipped,
        summary.failed
    );
    if summary.failed > 0 {
        anyhow::bail!("{} file(s) failed to convert", summary.failed);
    }
    Ok(())
}
