//! Changelog section extractor for release tooling.
//!
//! Reads a Markdown changelog from stdin, finds the `## [<version>]` heading
//! for the requested release, and prints that section's body (up to the next
//! `## [v...]` heading) with trailing blank lines removed:
//!
//! ```text
//! relnotes v1.2.0 < CHANGELOG.md
//! ```
//!
//! A version that never appears prints an empty line and exits 0 — callers
//! that require presence must check for empty output themselves.

mod extract;
mod heading;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead};

#[derive(Parser)]
#[command(
    name = "relnotes",
    about = "Extract one release's section from a changelog on stdin"
)]
struct Cli {
    /// Release version whose section to print (e.g. "v1.2.0")
    version: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let section = extract::section(stdin.lock().lines(), &cli.version)
        .context("failed to read stdin")?;
    println!("{section}");

    Ok(())
}
