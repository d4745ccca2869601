//! Diff command for comparing two JSON objects.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde_json::Value;

use super::utils::parse_record;
use crate::diff::{diff, diff_symmetric, Diff, DiffEntry};

#[derive(Args)]
pub struct DiffArgs {
    /// Left-hand JSON object
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Right-hand JSON object
    #[arg(value_name = "RIGHT")]
    pub right: String,

    /// Also report keys that only exist in RIGHT
    #[arg(long)]
    pub symmetric: bool,

    /// Output format: json or text
    #[arg(long, value_enum, default_value = "json")]
    pub format: DiffFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DiffFormat {
    Json,
    Text,
}

pub fn run(args: DiffArgs) -> Result<()> {
    let left = parse_record(&args.left, "LEFT")?;
    let right = parse_record(&args.right, "RIGHT")?;

    let result = if args.symmetric { diff_symmetric(&left, &right) } else { diff(&left, &right) };

    match args.format {
        DiffFormat::Json => println!("{}", serde_json::to_string(&result)?),
        DiffFormat::Text => {
            let mut lines = Vec::new();
            render_text(&result, "", &mut lines);
            if lines.is_empty() {
                println!("No differences");
            }
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// One `path: left -> right` line per changed leaf, nested keys dotted.
fn render_text(diff: &Diff, prefix: &str, lines: &mut Vec<String>) {
    for (key, entry) in diff {
        let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
        match entry {
            DiffEntry::Changed(left, right) => {
                lines.push(format!("{path}: {} -> {}", side(left.as_ref()), side(right.as_ref())));
            }
            DiffEntry::Nested(nested) => render_text(nested, &path, lines),
        }
    }
}

fn side(value: Option<&Value>) -> String {
    value.map_or_else(|| "(missing)".to_string(), Value::to_string)
}
