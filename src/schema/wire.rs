//! The two representations that cross this crate, and the bridge between them.
//!
//! Internally every option object is a strongly-typed record with snake_case
//! attributes. Externally the renderer speaks an ordered camelCase key/value
//! tree (the wire mapping). The two never alias: they are connected only
//! through `SchemaNode::from_wire` / `SchemaNode::to_wire`.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{OptionsError, OptionsResult};

/// Ordered camelCase mapping exchanged with the renderer.
///
/// `serde_json` is built with `preserve_order`, so insertion order is stable
/// and round-trips through JSON text unchanged.
pub type WireMap = serde_json::Map<String, Value>;

/// Ordered snake_case initializer mapping consumed by `SchemaNode::construct`.
pub type InitMap = IndexMap<String, Value>;

static NULL: Value = Value::Null;

/// Looks up an attribute in an initializer mapping, treating absence as null.
pub fn init_value<'a>(init: &'a InitMap, attribute: &str) -> &'a Value {
    init.get(attribute).unwrap_or(&NULL)
}

/// Converts a parsed JSON object into an initializer mapping.
pub fn init_from_json(value: Value) -> OptionsResult<InitMap> {
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(OptionsError::Json(format!(
            "expected a json object of initializers, got: {other}"
        ))),
    }
}

/// Deep-trims a wire value.
///
/// Null, empty strings, and collections that are empty after their own
/// trimming are dropped. Booleans and numbers always survive: `false` and `0`
/// are real configuration, not absence.
pub fn trim_value(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::Array(items) => {
            let kept: Vec<Value> = items.into_iter().filter_map(trim_value).collect();
            if kept.is_empty() {
                None
            } else {
                Some(Value::Array(kept))
            }
        }
        Value::Object(map) => {
            let kept = trim_map(map);
            if kept.is_empty() {
                None
            } else {
                Some(Value::Object(kept))
            }
        }
        other => Some(other),
    }
}

/// Deep-trims every entry of a wire mapping. A child node is trimmed before
/// the parent decides whether the child's key survives.
pub fn trim_map(map: WireMap) -> WireMap {
    map.into_iter()
        .filter_map(|(key, value)| trim_value(value).map(|kept| (key, kept)))
        .collect()
}

pub fn num_value(value: Option<f64>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

pub fn int_value(value: Option<i64>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

pub fn str_value(value: Option<&str>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

pub fn bool_value(value: Option<bool>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

pub fn strings_value(value: Option<&[String]>) -> Value {
    match value {
        Some(items) => Value::Array(items.iter().map(|s| Value::from(s.as_str())).collect()),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trim_drops_null_empty_string_and_empty_collections() {
        assert_eq!(trim_value(Value::Null), None);
        assert_eq!(trim_value(json!("")), None);
        assert_eq!(trim_value(json!([])), None);
        assert_eq!(trim_value(json!({})), None);
    }

    #[test]
    fn trim_preserves_false_and_zero() {
        assert_eq!(trim_value(json!(false)), Some(json!(false)));
        assert_eq!(trim_value(json!(0)), Some(json!(0)));
        assert_eq!(trim_value(json!(0.0)), Some(json!(0.0)));
    }

    #[test]
    fn trim_is_deep() {
        let nested = json!({
            "outer": {
                "inner": { "dead": null },
                "alive": 1
            },
            "list": [null, "", {}, 2]
        });
        assert_eq!(
            trim_value(nested),
            Some(json!({ "outer": { "alive": 1 }, "list": [2] }))
        );
    }

    #[test]
    fn init_from_json_rejects_non_objects() {
        let err = init_from_json(json!([1, 2])).expect_err("arrays are not initializers");
        assert!(matches!(err, OptionsError::Json(_)));
    }
}
