//! Number command implementation

use anyhow::Result;
use clap::Args;

use crate::config::{merge_cli_with_config, CliOverrides};
use crate::domain::Config;
use crate::format::format_number;

#[derive(Args)]
pub struct NumberArgs {
    /// Number to render (NaN and inf are accepted)
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: f64,

    /// Zero-pad to this many characters
    #[arg(long, value_name = "WIDTH")]
    pub padding: Option<usize>,
}

pub fn run(args: NumberArgs, file_config: Config) -> Result<()> {
    let config = merge_cli_with_config(
        file_config,
        CliOverrides { padding: args.padding, ..CliOverrides::default() },
    );

    println!("{}", format_number(args.value, config.padding));
    Ok(())
}
