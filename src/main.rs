//! corpus - Comparative text analysis from the command line
//!
//! corpus provides:
//! - Words common to every text, with frequency statistics
//! - Word sequences (n-grams) shared verbatim by every text
//! - Part-of-speech classification of a text's vocabulary
//! - Unified output format (table/jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;
mod lexicon;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
