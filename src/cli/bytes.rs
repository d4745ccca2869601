//! Bytes command implementation

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::bytes::format_bytes;
use crate::config::{merge_cli_with_config, CliOverrides};
use crate::domain::{Config, Unit};

#[derive(Args)]
pub struct BytesArgs {
    /// Quantity expressed in the base unit
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: f64,

    /// Smallest readable value (inclusive)
    #[arg(long, value_name = "X", allow_hyphen_values = true)]
    pub lower: Option<f64>,

    /// Largest readable value (exclusive)
    #[arg(long, value_name = "Y")]
    pub upper: Option<f64>,

    /// Unit VALUE is expressed in
    #[arg(short = 'u', long, value_name = "UNIT")]
    pub base_unit: Option<Unit>,

    /// Digits kept in every unit
    #[arg(short, long, value_name = "DIGITS")]
    pub precision: Option<u32>,

    /// Use powers of 1000
    #[arg(long, conflicts_with = "binary")]
    pub decimal: bool,

    /// Use powers of 1024
    #[arg(long)]
    pub binary: bool,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: BytesArgs, file_config: Config) -> Result<()> {
    let bytes_decimal = match (args.decimal, args.binary) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            base_unit: args.base_unit,
            bytes_precision: args.precision,
            lower: args.lower,
            upper: args.upper,
            bytes_decimal,
            ..CliOverrides::default()
        },
    );

    if config.bytes.lower >= config.bytes.upper {
        anyhow::bail!(
            "Empty range: --lower ({}) must be below --upper ({})",
            config.bytes.lower,
            config.bytes.upper
        );
    }

    let options = config.bytes.table_options();
    debug!(?options, "formatting bytes");
    let display = format_bytes(args.value, config.bytes.lower, config.bytes.upper, Some(&options));

    if args.json {
        println!("{}", serde_json::to_string(&display)?);
    } else {
        println!("{display}");
    }
    Ok(())
}
