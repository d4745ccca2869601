//! To-bytes command implementation

use anyhow::Result;
use clap::Args;

use crate::bytes::to_bytes;
use crate::config::{merge_cli_with_config, CliOverrides};
use crate::domain::{Config, Unit};

#[derive(Args)]
pub struct ToBytesArgs {
    /// Quantity expressed in UNIT
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: f64,

    /// Unit of VALUE: b, kb, mb, gb, tb, pb or eb
    #[arg(short, long, value_name = "UNIT")]
    pub unit: Option<Unit>,

    /// Use powers of 1000 instead of 1024
    #[arg(long)]
    pub decimal: bool,
}

pub fn run(args: ToBytesArgs, file_config: Config) -> Result<()> {
    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            unit: args.unit,
            decimal: if args.decimal { Some(true) } else { None },
            ..CliOverrides::default()
        },
    );

    println!("{}", to_bytes(args.value, config.unit.key(), config.decimal));
    Ok(())
}
