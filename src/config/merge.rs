//! CLI argument merging with config

use crate::domain::{Config, Unit};

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub precision: Option<u32>,
    pub padding: Option<usize>,
    pub unit: Option<Unit>,
    pub decimal: Option<bool>,
    pub base_unit: Option<Unit>,
    pub bytes_precision: Option<u32>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub bytes_decimal: Option<bool>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(precision) = cli.precision {
        base_config.precision = precision;
    }
    if let Some(padding) = cli.padding {
        base_config.padding = padding;
    }
    if let Some(unit) = cli.unit {
        base_config.unit = unit;
    }
    if let Some(decimal) = cli.decimal {
        base_config.decimal = decimal;
    }

    if let Some(base_unit) = cli.base_unit {
        base_config.bytes.base_unit = base_unit;
    }
    if let Some(bytes_precision) = cli.bytes_precision {
        base_config.bytes.precision = bytes_precision;
    }
    if let Some(lower) = cli.lower {
        base_config.bytes.lower = lower;
    }
    if let Some(upper) = cli.upper {
        base_config.bytes.upper = upper;
    }
    if let Some(bytes_decimal) = cli.bytes_decimal {
        base_config.bytes.decimal = bytes_decimal;
    }

    base_config
}

#[cfg(test)]
mod tests {
    use super::{merge_cli_with_config, CliOverrides};
    use crate::domain::{Config, Unit};

    #[test]
    fn cli_overrides_replace_base_values() {
        let mut base = Config { precision: 1, padding: 3, ..Config::default() };
        base.bytes.lower = 5.0;

        let cli = CliOverrides {
            precision: Some(4),
            unit: Some(Unit::Gb),
            upper: Some(1024.0),
            bytes_decimal: Some(false),
            ..CliOverrides::default()
        };

        let merged = merge_cli_with_config(base, cli);
        assert_eq!(merged.precision, 4);
        assert_eq!(merged.padding, 3);
        assert_eq!(merged.unit, Unit::Gb);
        assert_eq!(merged.bytes.lower, 5.0);
        assert_eq!(merged.bytes.upper, 1024.0);
        assert!(!merged.bytes.decimal);
    }

    #[test]
    fn empty_overrides_keep_config() {
        let merged = merge_cli_with_config(Config::default(), CliOverrides::default());
        assert_eq!(merged, Config::default());
    }
}
