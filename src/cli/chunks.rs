//! Chunk printing commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};

use super::utils::{build_scraper, ChunkArgs, ScanArgs};

const SEPARATOR: &str = "---";

#[derive(Args)]
pub struct ChunksArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub chunk: ChunkArgs,

    /// Emit one JSON object per chunk instead of `---` separated text
    #[arg(long)]
    pub jsonl: bool,
}

#[derive(Args)]
pub struct FileChunksArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub chunk: ChunkArgs,

    /// Position of the file in the list printed by `list`
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub index: i64,

    /// Emit one JSON object per chunk instead of `---` separated text
    #[arg(long)]
    pub jsonl: bool,
}

#[derive(Serialize)]
struct ChunkRecord<'a> {
    index: usize,
    content: &'a str,
}

fn write_chunks<W: Write>(out: &mut W, chunks: &[String], jsonl: bool) -> Result<()> {
    for (index, content) in chunks.iter().enumerate() {
        if jsonl {
            let record = serde_json::to_string(&ChunkRecord { index, content })?;
            writeln!(out, "{record}")?;
        } else {
            if index > 0 {
                writeln!(out, "{SEPARATOR}")?;
            }
            writeln!(out, "{content}")?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn run_chunks(args: ChunksArgs) -> Result<()> {
    let scraper = build_scraper(&args.scan, Some(&args.chunk))?;
    let mode = if scraper.has_chunker() { "per-file chunking" } else { "merged corpus" };
    tracing::info!("{} files, {} chunks ({})", scraper.len(), scraper.chunks().len(), mode);
    write_chunks(&mut io::stdout().lock(), scraper.chunks(), args.jsonl)
}

pub fn run_file_chunks(args: FileChunksArgs) -> Result<()> {
    let scraper = build_scraper(&args.scan, Some(&args.chunk))?;
    let idx = scraper.check_index(args.index)?;
    let chunks = scraper.chunks_for_file(idx)?;
    write_chunks(&mut io::stdout().lock(), &chunks, args.jsonl)
}
