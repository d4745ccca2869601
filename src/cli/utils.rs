//! Shared argument parsing for CLI commands

use anyhow::{Context, Result};
use serde_json::Value;

/// Parse a JSON argument, naming the argument in the error.
pub fn parse_json(raw: &str, what: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("Invalid JSON for {what}: {raw}"))
}

/// Parse a JSON argument that must be an object.
pub fn parse_record(raw: &str, what: &str) -> Result<serde_json::Map<String, Value>> {
    match parse_json(raw, what)? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("{what} must be a JSON object, got {}", json_kind(&other)),
    }
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
