//! Configuration loading
//!
//! Layers, lowest to highest precedence: built-in defaults, a config file
//! (explicit path or discovered in the anchor directory), `FMTKIT_*`
//! environment variables. CLI flags are applied on top with
//! [`merge_cli_with_config`].

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

use crate::domain::Config;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: &[&str] =
    &["fmtkit.toml", ".fmtkit.toml", "fmtkit.yml", ".fmtkit.yml"];

/// Environment variable prefix. Nested keys use `__` (`FMTKIT_BYTES__LOWER`).
pub const ENV_PREFIX: &str = "FMTKIT_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Find the first known config file in `dir`.
pub fn discover_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

/// Load the layered configuration.
///
/// An `explicit` path must exist; otherwise the anchor directory is searched
/// and a missing file just means defaults.
pub fn load_config(anchor: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match explicit {
        Some(path) if !path.is_file() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(anchor),
    };

    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(path) = &file {
        debug!(path = %path.display(), "loading config file");
        figment = if is_yaml(path) {
            figment.merge(Yaml::file(path))
        } else {
            figment.merge(Toml::file(path))
        };
    }
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment.extract().map_err(|err| ConfigError::Invalid(Box::new(err)))
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|ext| ext.to_str()), Some("yml" | "yaml"))
}
