//! Config command: print the effective configuration

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::domain::Config;

#[derive(Args)]
pub struct ConfigArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

pub fn run(args: ConfigArgs, config: Config) -> Result<()> {
    let rendered = match args.format {
        ConfigFormat::Toml => toml::to_string_pretty(&config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(&config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(&config)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
