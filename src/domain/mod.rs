//! Core domain types
//!
//! Units, numeric containers, value tables and the configuration model shared
//! by the formatters and the CLI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A byte unit, ordered from smallest to largest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    B,
    Kb,
    Mb,
    Gb,
    Tb,
    Pb,
    Eb,
}

impl Unit {
    /// All units in ascending order. Unit selection scans in this order.
    pub const ALL: [Unit; 7] =
        [Unit::B, Unit::Kb, Unit::Mb, Unit::Gb, Unit::Tb, Unit::Pb, Unit::Eb];

    pub fn key(self) -> &'static str {
        match self {
            Unit::B => "b",
            Unit::Kb => "kb",
            Unit::Mb => "mb",
            Unit::Gb => "gb",
            Unit::Tb => "tb",
            Unit::Pb => "pb",
            Unit::Eb => "eb",
        }
    }

    /// Uppercase display label (`"KB"` for `kb`).
    pub fn label(self) -> &'static str {
        match self {
            Unit::B => "B",
            Unit::Kb => "KB",
            Unit::Mb => "MB",
            Unit::Gb => "GB",
            Unit::Tb => "TB",
            Unit::Pb => "PB",
            Unit::Eb => "EB",
        }
    }

    /// Position in [`Unit::ALL`], also the exponent applied to the base.
    pub fn power(self) -> i32 {
        match self {
            Unit::B => 0,
            Unit::Kb => 1,
            Unit::Mb => 2,
            Unit::Gb => 3,
            Unit::Tb => 4,
            Unit::Pb => 5,
            Unit::Eb => 6,
        }
    }

    /// Exact key lookup used by conversions. Unknown keys, including
    /// differently cased ones, yield `None` so the caller can fall back.
    pub fn lookup(key: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| unit.key() == key)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned by strict unit parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid unit '{0}'. Expected one of: b, kb, mb, gb, tb, pb, eb")]
pub struct ParseUnitError(pub String);

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Unit::lookup(&key).ok_or_else(|| ParseUnitError(s.to_string()))
    }
}

/// A numeric container: either an ordered sequence or a keyed record.
///
/// Formatting preserves the variant, so a sequence stays a sequence and a
/// record keeps its keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numbers {
    Seq(Vec<f64>),
    Record(BTreeMap<String, f64>),
}

impl Numbers {
    /// Build a container from an arbitrary JSON array or object.
    ///
    /// Entries that are not JSON numbers become NaN, which formatting then
    /// normalizes to 0. Returns `None` for scalars.
    pub fn from_json(value: &serde_json::Value) -> Option<Numbers> {
        match value {
            serde_json::Value::Array(items) => {
                Some(Numbers::Seq(items.iter().map(json_number).collect()))
            }
            serde_json::Value::Object(map) => Some(Numbers::Record(
                map.iter().map(|(k, v)| (k.clone(), json_number(v))).collect(),
            )),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Numbers::Seq(items) => {
                serde_json::Value::Array(items.iter().map(|v| number_json(*v)).collect())
            }
            Numbers::Record(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), number_json(*v))).collect(),
            ),
        }
    }
}

impl From<Vec<f64>> for Numbers {
    fn from(items: Vec<f64>) -> Self {
        Numbers::Seq(items)
    }
}

impl From<BTreeMap<String, f64>> for Numbers {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Numbers::Record(map)
    }
}

fn json_number(value: &serde_json::Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

/// Whole numbers are emitted as JSON integers so `10.0` prints as `10`.
fn number_json(value: f64) -> serde_json::Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.007_199_254_740_992e15 {
        serde_json::json!(value as i64)
    } else {
        serde_json::json!(value)
    }
}

/// One quantity re-expressed in every unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTable {
    values: [f64; 7],
}

impl ValueTable {
    pub fn new(values: [f64; 7]) -> Self {
        Self { values }
    }

    pub fn get(&self, unit: Unit) -> f64 {
        self.values[unit.power() as usize]
    }

    /// `(unit, value)` pairs in ascending unit order.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, f64)> + '_ {
        Unit::ALL.into_iter().zip(self.values.iter().copied())
    }
}

impl Serialize for ValueTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (unit, value) in self.iter() {
            map.serialize_entry(unit.key(), &number_json(value))?;
        }
        map.end()
    }
}

/// Options for building a [`ValueTable`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    /// Unit the input quantity is expressed in
    #[serde(default)]
    pub base_unit: Unit,

    /// Powers of 1000 instead of powers of 1024
    #[serde(default)]
    pub decimal: bool,

    /// Decimal digits kept in every table value
    #[serde(default = "default_table_precision")]
    pub precision: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { base_unit: Unit::B, decimal: false, precision: default_table_precision() }
    }
}

impl TableOptions {
    /// Defaults used by `format_bytes` when no options are given. The default
    /// display range `[1, 1000)` is a decimal range.
    pub fn display() -> Self {
        Self { decimal: true, ..Self::default() }
    }
}

/// The readable form of a byte quantity picked by `format_bytes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BytesDisplay {
    pub key: Unit,
    pub label: &'static str,
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,
    pub all_values: ValueTable,
}

impl fmt::Display for BytesDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.label)
    }
}

fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    number_json(*value).serialize(serializer)
}

/// Settings for the `bytes` command and `format_bytes` defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BytesConfig {
    #[serde(default)]
    pub base_unit: Unit,

    /// Digits kept in the value table
    #[serde(default = "default_table_precision")]
    pub precision: u32,

    /// Inclusive lower bound of the readable range
    #[serde(default = "default_lower")]
    pub lower: f64,

    /// Exclusive upper bound of the readable range
    #[serde(default = "default_upper")]
    pub upper: f64,

    #[serde(default = "default_true")]
    pub decimal: bool,
}

impl Default for BytesConfig {
    fn default() -> Self {
        Self {
            base_unit: Unit::B,
            precision: default_table_precision(),
            lower: default_lower(),
            upper: default_upper(),
            decimal: true,
        }
    }
}

impl BytesConfig {
    pub fn table_options(&self) -> TableOptions {
        TableOptions { base_unit: self.base_unit, decimal: self.decimal, precision: self.precision }
    }
}

/// Effective configuration, after file, environment and CLI layering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Decimal digits kept by `floats`
    #[serde(default)]
    pub precision: u32,

    /// Zero-padding width used by `number`
    #[serde(default)]
    pub padding: usize,

    /// Unit assumed by `to-bytes`
    #[serde(default = "default_unit")]
    pub unit: Unit,

    /// Whether `to-bytes` uses powers of 1000
    #[serde(default)]
    pub decimal: bool,

    #[serde(default)]
    pub bytes: BytesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 0,
            padding: 0,
            unit: default_unit(),
            decimal: false,
            bytes: BytesConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_unit() -> Unit {
    Unit::Kb
}

fn default_table_precision() -> u32 {
    2
}

fn default_lower() -> f64 {
    1.0
}

fn default_upper() -> f64 {
    1000.0
}
