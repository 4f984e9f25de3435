//! Command-line interface for repo-scraper
//!
//! Every subcommand scans a repository with the shared scan flags, then either
//! prints files or prints the chunks built from them.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod chunks;
mod files;
mod utils;

/// Walk a repository and split its files into chunks for RAG pipelines
#[derive(Parser)]
#[command(name = "repo-scraper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selected files in scan order
    List(files::ListArgs),

    /// Print the content of one file
    Show(files::ShowArgs),

    /// Print the content of every selected file
    Dump(files::DumpArgs),

    /// Print the chunk list built from all selected files
    Chunks(chunks::ChunksArgs),

    /// Print the chunks of a single file
    FileChunks(chunks::FileChunksArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let default_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::List(args) => files::run_list(args),
        Commands::Show(args) => files::run_show(args),
        Commands::Dump(args) => files::run_dump(args),
        Commands::Chunks(args) => chunks::run_chunks(args),
        Commands::FileChunks(args) => chunks::run_file_chunks(args),
    };

    // A reader that stops early (`| head`) is not a failure.
    match result {
        Err(e) if is_broken_pipe(&e) => Ok(()),
        other => other,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}
