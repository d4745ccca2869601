//! fmtkit: format numbers, byte sizes and record diffs from the command line.

use anyhow::Result;

mod bytes;
mod cli;
mod config;
mod diff;
mod domain;
mod format;

fn main() -> Result<()> {
    cli::run()
}
