//! Command-line interface for fmtkit
//!
//! Provides `floats`, `number`, `to-bytes`, `bytes`, `diff`, `config` and
//! `completions` subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_config;
use crate::domain::Config;

mod bytes;
mod completions;
mod config;
mod diff;
mod floats;
mod number;
mod to_bytes;
mod utils;

/// Format numbers, byte sizes and record diffs
#[derive(Parser)]
#[command(name = "fmtkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (fmtkit.toml or .fmtkit.yml)
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Round every number of a JSON array or object
    Floats(floats::FloatsArgs),

    /// Render a number with thousands separators
    Number(number::NumberArgs),

    /// Convert a value in some unit to bytes
    ToBytes(to_bytes::ToBytesArgs),

    /// Show a byte quantity in its most readable unit
    Bytes(bytes::BytesArgs),

    /// Compare two JSON objects
    Diff(diff::DiffArgs),

    /// Print the effective configuration
    Config(config::ConfigArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let explicit = cli.config.as_deref();
    match cli.command {
        Commands::Floats(args) => floats::run(args, file_config(explicit)?),
        Commands::Number(args) => number::run(args, file_config(explicit)?),
        Commands::ToBytes(args) => to_bytes::run(args, file_config(explicit)?),
        Commands::Bytes(args) => bytes::run(args, file_config(explicit)?),
        Commands::Diff(args) => diff::run(args),
        Commands::Config(args) => config::run(args, file_config(explicit)?),
        Commands::Completions(args) => completions::run(args),
    }
}

fn file_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    load_config(&cwd, explicit).context("Failed to load configuration")
}
