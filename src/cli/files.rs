//! File listing and printing commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};

use super::utils::{build_scraper, ScanArgs};

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Print a JSON array instead of tab-separated lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Position of the file in the list printed by `list`
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub index: i64,

    /// Frame the content with the file path and separator banners
    #[arg(short, long)]
    pub extended: bool,
}

#[derive(Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Frame each file with its path and separator banners
    #[arg(short, long)]
    pub extended: bool,
}

#[derive(Serialize)]
struct FileEntry {
    index: usize,
    path: String,
}

pub fn run_list(args: ListArgs) -> Result<()> {
    let scraper = build_scraper(&args.scan, None)?;

    let mut out = io::stdout().lock();
    if args.json {
        let entries: Vec<FileEntry> = scraper
            .files()
            .iter()
            .enumerate()
            .map(|(index, path)| FileEntry { index, path: path.to_string_lossy().into_owned() })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        for (index, path) in scraper.files().iter().enumerate() {
            writeln!(out, "{}\t{}", index, path.display())?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn run_show(args: ShowArgs) -> Result<()> {
    let scraper = build_scraper(&args.scan, None)?;
    let idx = scraper.check_index(args.index)?;
    scraper.print_file(idx, args.extended)?;
    Ok(())
}

pub fn run_dump(args: DumpArgs) -> Result<()> {
    let scraper = build_scraper(&args.scan, None)?;
    scraper.print_all_files(args.extended)?;
    Ok(())
}
