//! Recursive structural diff between two JSON records.
//!
//! Traversal is driven by the left record: [`diff`] never reports keys that
//! only exist on the right. [`diff_symmetric`] additionally walks right-only
//! keys.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A plain record being compared.
pub type Record = Map<String, Value>;

/// Per-key differences. Empty when the records match.
pub type Diff = BTreeMap<String, DiffEntry>;

/// One differing key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiffEntry {
    /// `[left, right]`; `None` marks a key absent on that side and
    /// serializes as `null`.
    Changed(Option<Value>, Option<Value>),
    /// Both sides are records that differ somewhere below this key.
    Nested(Diff),
}

impl DiffEntry {
    pub fn changed(left: Option<&Value>, right: Option<&Value>) -> Self {
        DiffEntry::Changed(left.cloned(), right.cloned())
    }
}

/// Compare `left` against `right`, walking the keys of `left` only.
pub fn diff(left: &Record, right: &Record) -> Diff {
    walk(left, right, false)
}

/// Like [`diff`], but keys only present in `right` are reported as
/// `[None, right]`.
pub fn diff_symmetric(left: &Record, right: &Record) -> Diff {
    walk(left, right, true)
}

fn walk(left: &Record, right: &Record, symmetric: bool) -> Diff {
    let empty = Record::new();
    let mut result = Diff::new();

    for (key, left_value) in left {
        let right_value = right.get(key);
        match left_value {
            Value::Object(nested) => {
                let counterpart = match right_value {
                    Some(Value::Object(other)) => other,
                    _ => &empty,
                };
                let nested_diff = walk(nested, counterpart, symmetric);
                if !nested_diff.is_empty() {
                    result.insert(key.clone(), DiffEntry::Nested(nested_diff));
                }
            }
            _ => {
                if !values_equal(Some(left_value), right_value) {
                    result.insert(key.clone(), DiffEntry::changed(Some(left_value), right_value));
                }
            }
        }
    }

    if symmetric {
        for (key, right_value) in right.iter().filter(|(key, _)| !left.contains_key(*key)) {
            result.insert(key.clone(), DiffEntry::changed(None, Some(right_value)));
        }
    }

    result
}

/// Structural equality over JSON values.
///
/// Numbers compare by value (`1` equals `1.0`), arrays element-wise, objects
/// key-wise. `None` only equals `None`.
pub fn values_equal(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => value_eq(left, right),
        _ => false,
    }
}

fn value_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => a == b,
            _ => a.as_f64() == b.as_f64(),
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| value_eq(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, x)| b.get(key).is_some_and(|y| value_eq(x, y)))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn reports_changed_leaf() {
        let result = diff(&record(json!({"a": 1})), &record(json!({"a": 2})));
        assert_eq!(result.len(), 1);
        assert_eq!(result["a"], DiffEntry::Changed(Some(json!(1)), Some(json!(2))));
    }

    #[test]
    fn right_only_keys_are_ignored() {
        let result = diff(&record(json!({"a": 1})), &record(json!({"b": 2})));
        assert_eq!(result.len(), 1);
        assert_eq!(result["a"], DiffEntry::Changed(Some(json!(1)), None));
    }

    #[test]
    fn symmetric_reports_right_only_keys() {
        let result = diff_symmetric(&record(json!({"a": 1})), &record(json!({"b": 2})));
        assert_eq!(result.len(), 2);
        assert_eq!(result["a"], DiffEntry::Changed(Some(json!(1)), None));
        assert_eq!(result["b"], DiffEntry::Changed(None, Some(json!(2))));
    }

    #[test]
    fn symmetric_recurses_into_nested_records() {
        let left = record(json!({"a": {"x": 1}}));
        let right = record(json!({"a": {"x": 1, "y": 2}}));
        let result = diff_symmetric(&left, &right);
        let DiffEntry::Nested(nested) = &result["a"] else { panic!("expected nested diff") };
        assert_eq!(nested["y"], DiffEntry::Changed(None, Some(json!(2))));
    }

    #[test]
    fn nested_records_produce_nested_diff() {
        let result = diff(&record(json!({"a": {"a1": 1}})), &record(json!({"a": {"a1": 2}})));
        let mut expected = Diff::new();
        expected.insert("a1".to_string(), DiffEntry::Changed(Some(json!(1)), Some(json!(2))));
        assert_eq!(result["a"], DiffEntry::Nested(expected));
    }

    #[test]
    fn equal_nested_records_are_omitted() {
        let left = record(json!({"a": {"x": [1, 2]}, "b": 1}));
        let right = record(json!({"a": {"x": [1, 2]}, "b": 2}));
        let result = diff(&left, &right);
        assert!(!result.contains_key("a"));
        assert!(result.contains_key("b"));
    }

    #[test]
    fn non_record_counterpart_is_treated_as_empty() {
        let result = diff(&record(json!({"a": {"x": 1}})), &record(json!({"a": 5})));
        let DiffEntry::Nested(nested) = &result["a"] else { panic!("expected nested diff") };
        assert_eq!(nested["x"], DiffEntry::Changed(Some(json!(1)), None));

        let result = diff(&record(json!({"a": {}})), &record(json!({"a": 5})));
        assert!(result.is_empty());
    }

    #[test]
    fn diff_is_reflexive() {
        let value = record(json!({"a": 1, "b": {"c": [1, {"d": true}], "e": null}, "f": "x"}));
        assert!(diff(&value, &value).is_empty());
        assert!(diff_symmetric(&value, &value).is_empty());
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(values_equal(Some(&json!(1)), Some(&json!(1.0))));
        assert!(!values_equal(Some(&json!(1)), Some(&json!("1"))));
        assert!(!values_equal(Some(&Value::Null), None));
        assert!(values_equal(None, None));
    }

    #[test]
    fn changed_entries_serialize_as_pairs() {
        let left = record(json!({"a": 1, "n": {"m": "x"}}));
        let result = diff(&left, &record(json!({"n": {"m": "y"}})));
        let rendered = serde_json::to_value(&result).unwrap();
        assert_eq!(rendered, json!({"a": [1, null], "n": {"m": ["x", "y"]}}));
    }
}
