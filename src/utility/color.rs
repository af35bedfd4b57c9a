//! Polymorphic color-like values.
//!
//! A color-like attribute accepts a plain color string, a gradient
//! specification, or a pattern specification. Which one a raw value
//! represents is decided structurally (marker keys), never by downstream
//! type inspection: the resolver here is the single place the sniffing
//! ladder lives.

use serde_json::Value;

use crate::error::{OptionsError, OptionsResult};
use crate::schema::{InitMap, SchemaNode, node_value, validators};
use crate::utility::{Gradient, Pattern};

const GRADIENT_MARKERS: &[&str] = &["linearGradient", "linear_gradient", "radialGradient"];
const PATTERN_MARKERS: &[&str] = &["patternOptions", "pattern_options"];

/// Resolved color-like value: exactly one of the three mutually exclusive
/// alternatives.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    Plain(String),
    Gradient(Gradient),
    Pattern(Pattern),
}

impl ColorInput {
    /// Resolves a raw value by structural sniffing.
    ///
    /// - empty-like input resolves to `None`;
    /// - mappings carrying a gradient/pattern marker key parse as the typed
    ///   alternative and fail hard when malformed;
    /// - strings carrying a marker attempt the same parse but degrade to a
    ///   plain color string on failure, so a gradient-looking literal stays
    ///   usable as CSS;
    /// - any other string is a plain color;
    /// - everything else is unresolvable.
    pub fn resolve(attribute: &str, value: &Value) -> OptionsResult<Option<Self>> {
        match value {
            Value::Null | Value::Bool(false) => Ok(None),
            Value::String(text) if text.is_empty() => Ok(None),
            Value::String(text) => Ok(Some(Self::resolve_text(text))),
            Value::Object(map) if map.is_empty() => Ok(None),
            Value::Object(map) => {
                if map.contains_key("linearGradient") || map.contains_key("radialGradient") {
                    Ok(Some(Self::Gradient(Gradient::from_wire(map)?)))
                } else if map.contains_key("linear_gradient")
                    || map.contains_key("radial_gradient")
                {
                    Ok(Some(Self::Gradient(Gradient::construct(&snake_init(map))?)))
                } else if map.contains_key("patternOptions") {
                    Ok(Some(Self::Pattern(Pattern::from_wire(map)?)))
                } else if map.contains_key("pattern_options") {
                    Ok(Some(Self::Pattern(Pattern::construct(&snake_init(map))?)))
                } else {
                    Err(OptionsError::unresolvable(attribute, value))
                }
            }
            other => Err(OptionsError::unresolvable(attribute, other)),
        }
    }

    fn resolve_text(text: &str) -> Self {
        if GRADIENT_MARKERS.iter().any(|marker| text.contains(marker)) {
            if let Some(gradient) = parse_embedded::<Gradient>(text) {
                return Self::Gradient(gradient);
            }
        } else if PATTERN_MARKERS.iter().any(|marker| text.contains(marker)) {
            if let Some(pattern) = parse_embedded::<Pattern>(text) {
                return Self::Pattern(pattern);
            }
        }
        // Malformed gradient/pattern-looking strings stay usable as literal
        // color strings rather than hard-failing.
        Self::Plain(text.to_owned())
    }

    /// Untrimmed wire value of this color.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Plain(color) => Value::from(color.as_str()),
            Self::Gradient(gradient) => node_value(Some(gradient)),
            Self::Pattern(pattern) => node_value(Some(pattern)),
        }
    }
}

/// Untrimmed wire value of an optional color-like attribute.
#[must_use]
pub fn color_value(color: Option<&ColorInput>) -> Value {
    color.map(ColorInput::to_value).unwrap_or(Value::Null)
}

/// Untrimmed wire value of an optional color sequence.
#[must_use]
pub fn colors_value(colors: Option<&[ColorInput]>) -> Value {
    match colors {
        Some(colors) => Value::Array(colors.iter().map(ColorInput::to_value).collect()),
        None => Value::Null,
    }
}

/// Resolves an ordered sequence of color-like values; a single bare color
/// wraps into a one-element sequence (force-iterable policy).
pub fn resolve_colors(attribute: &str, value: &Value) -> OptionsResult<Option<Vec<ColorInput>>> {
    let Some(items) = validators::iterable(value) else {
        return Ok(None);
    };
    let mut colors = Vec::with_capacity(items.len());
    for item in items.iter() {
        match ColorInput::resolve(attribute, item)? {
            Some(color) => colors.push(color),
            None => return Err(OptionsError::validation(attribute, item)),
        }
    }
    Ok(Some(colors))
}

fn parse_embedded<T: SchemaNode>(text: &str) -> Option<T> {
    let value: Value = serde_json::from_str(text).ok()?;
    match value {
        Value::Object(map) => T::from_wire(&map).ok(),
        _ => None,
    }
}

fn snake_init(map: &serde_json::Map<String, Value>) -> InitMap {
    map.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_string_resolves_to_plain_color() {
        let resolved = ColorInput::resolve("color", &json!("#ff0000")).expect("plain color");
        assert_eq!(resolved, Some(ColorInput::Plain("#ff0000".to_owned())));
    }

    #[test]
    fn gradient_mapping_resolves_to_gradient() {
        let raw = json!({
            "linearGradient": { "x1": 0.0, "y1": 0.0, "x2": 0.0, "y2": 1.0 },
            "stops": [[0.0, "#003399"], [1.0, "#3366AA"]]
        });
        let resolved = ColorInput::resolve("color", &raw).expect("gradient");
        assert!(matches!(resolved, Some(ColorInput::Gradient(_))));
    }

    #[test]
    fn malformed_gradient_string_degrades_to_plain_color() {
        let resolved =
            ColorInput::resolve("color", &json!("linearGradient(#fff, #000)")).expect("fallback");
        assert_eq!(
            resolved,
            Some(ColorInput::Plain("linearGradient(#fff, #000)".to_owned()))
        );
    }

    #[test]
    fn malformed_gradient_mapping_fails_hard() {
        let raw = json!({ "linearGradient": "malformed" });
        let err = ColorInput::resolve("color", &raw).expect_err("mappings do not degrade");
        assert!(matches!(err, OptionsError::Validation { .. }));
    }

    #[test]
    fn markerless_mapping_is_unresolvable() {
        let err = ColorInput::resolve("color", &json!({ "hue": 120 }))
            .expect_err("no structural marker");
        assert!(matches!(err, OptionsError::UnresolvableValue { .. }));
    }

    #[test]
    fn non_string_non_mapping_is_unresolvable() {
        let err = ColorInput::resolve("color", &json!(42)).expect_err("numbers are not colors");
        assert!(matches!(err, OptionsError::UnresolvableValue { .. }));
    }
}
