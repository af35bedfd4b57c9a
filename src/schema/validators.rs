//! Validation-primitive adapter layer.
//!
//! Pure coercion functions over raw wire values. All of them are allow-empty:
//! null (and empty-like input where the type has no use for it) maps to
//! `Ok(None)` rather than failing, which is the default for nearly every
//! optional attribute in the schema. Failures carry the attribute name and
//! the offending value so callers can pinpoint malformed configuration.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::{OptionsError, OptionsResult};

/// Coerces to a finite numeric value, optionally enforcing a lower bound.
/// Numeric strings are accepted the way the renderer accepts them.
pub fn numeric(attribute: &str, value: &Value, minimum: Option<f64>) -> OptionsResult<Option<f64>> {
    let parsed = match value {
        Value::Null => return Ok(None),
        Value::String(s) if s.is_empty() => return Ok(None),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && minimum.is_none_or(|min| n >= min) => Ok(Some(n)),
        _ => Err(OptionsError::validation(attribute, value)),
    }
}

/// Coerces to an integer value, optionally enforcing a lower bound.
/// Fractional numbers are rejected, not rounded.
pub fn integer(attribute: &str, value: &Value, minimum: Option<i64>) -> OptionsResult<Option<i64>> {
    let parsed = match value {
        Value::Null => return Ok(None),
        Value::String(s) if s.is_empty() => return Ok(None),
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if minimum.is_none_or(|min| n >= min) => Ok(Some(n)),
        _ => Err(OptionsError::validation(attribute, value)),
    }
}

/// Coerces to a non-empty string. The empty string normalizes to `None`.
pub fn string(attribute: &str, value: &Value) -> OptionsResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(OptionsError::validation(attribute, other)),
    }
}

/// Coerces to a boolean.
///
/// Booleans are the one type where `false` is a legitimate stored value
/// distinct from absence, so only null maps to `None`; any non-boolean raw
/// value is rejected rather than truthiness-coerced.
pub fn boolean(attribute: &str, value: &Value) -> OptionsResult<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(flag) => Ok(Some(*flag)),
        other => Err(OptionsError::validation(attribute, other)),
    }
}

/// Validates membership in a fixed allowed-value set (enum-of-strings
/// attributes). The error names the attribute and received value; the allowed
/// set is documented on the attribute, keeping messages stable.
pub fn member(
    attribute: &str,
    value: &Value,
    allowed: &[&str],
) -> OptionsResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) if allowed.contains(&s.as_str()) => Ok(Some(s.clone())),
        other => Err(OptionsError::validation(attribute, other)),
    }
}

/// Validates a sequence of non-empty strings; a single bare string wraps into
/// a one-element sequence (force-iterable policy).
pub fn strings(attribute: &str, value: &Value) -> OptionsResult<Option<Vec<String>>> {
    let Some(items) = iterable(value) else {
        return Ok(None);
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items.iter() {
        match string(attribute, item)? {
            Some(text) => out.push(text),
            None => return Err(OptionsError::validation(attribute, item)),
        }
    }
    Ok(Some(out))
}

/// Force-iterable view of a raw value.
///
/// Arrays pass through; empty-like input yields `None`; any other non-null
/// value wraps into a one-element sequence.
pub fn iterable(value: &Value) -> Option<Cow<'_, [Value]>> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        Value::Array(items) => Some(Cow::Borrowed(items.as_slice())),
        other => Some(Cow::Owned(vec![other.clone()])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_accepts_numbers_and_numeric_strings() {
        assert_eq!(numeric("a", &json!(0.25), None).expect("number"), Some(0.25));
        assert_eq!(numeric("a", &json!("12"), None).expect("string"), Some(12.0));
        assert_eq!(numeric("a", &Value::Null, None).expect("null"), None);
    }

    #[test]
    fn numeric_enforces_minimum() {
        let err = numeric("border_width", &json!(-1), Some(0.0)).expect_err("below minimum");
        assert!(matches!(err, OptionsError::Validation { attribute, .. } if attribute == "border_width"));
    }

    #[test]
    fn integer_rejects_fractions() {
        assert!(integer("pane", &json!(1.5), Some(0)).is_err());
        assert_eq!(integer("pane", &json!(3), Some(0)).expect("int"), Some(3));
    }

    #[test]
    fn boolean_distinguishes_false_from_null() {
        assert_eq!(boolean("visible", &json!(false)).expect("false"), Some(false));
        assert_eq!(boolean("visible", &Value::Null).expect("null"), None);
        assert!(boolean("visible", &json!(1)).is_err());
    }

    #[test]
    fn member_rejects_unknown_values() {
        let allowed = ["inside", "outside"];
        assert_eq!(
            member("tick_position", &json!("inside"), &allowed).expect("ok"),
            Some("inside".to_owned())
        );
        assert!(member("tick_position", &json!("above"), &allowed).is_err());
    }

    #[test]
    fn iterable_wraps_single_items() {
        let single = json!("x");
        let wrapped = iterable(&single).expect("wrapped");
        assert_eq!(wrapped.as_ref(), &[json!("x")]);
        assert!(iterable(&json!([])).is_none());
    }
}
