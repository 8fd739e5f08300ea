//! Vigor - page metadata and JSON-LD generator.

use anyhow::Result;
use clap::Parser;
use vigor_seo::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(&cli)
}
