//! repo-scraper: walk a repository and turn its files into text chunks
//!
//! Lists, prints and chunks the files of a directory tree for
//! retrieval-augmented generation (RAG) corpora.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
