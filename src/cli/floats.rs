//! Floats command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{json_kind, parse_json};
use crate::config::{merge_cli_with_config, CliOverrides};
use crate::domain::{Config, Numbers};
use crate::format::format_floats;

#[derive(Args)]
pub struct FloatsArgs {
    /// JSON array or object of numbers
    #[arg(value_name = "JSON")]
    pub input: String,

    /// Decimal digits to keep
    #[arg(short, long, value_name = "DIGITS")]
    pub precision: Option<u32>,
}

pub fn run(args: FloatsArgs, file_config: Config) -> Result<()> {
    let config = merge_cli_with_config(
        file_config,
        CliOverrides { precision: args.precision, ..CliOverrides::default() },
    );

    let value = parse_json(&args.input, "JSON")?;
    let Some(numbers) = Numbers::from_json(&value) else {
        anyhow::bail!("Expected a JSON array or object, got {}", json_kind(&value));
    };

    let rounded = format_floats(&numbers, config.precision);
    println!("{}", serde_json::to_string(&rounded.to_json())?);
    Ok(())
}
