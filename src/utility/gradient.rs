//! Gradient color specification, the first typed alternative to a plain
//! color string in color-like attribute slots.

use serde_json::Value;
use smallvec::SmallVec;

use crate::error::{OptionsError, OptionsResult};
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, node_value, resolve_node,
    wire::{init_value, num_value},
};

const LINEAR_KEYS: &[WireKey] = &[
    key("x1", "x1"),
    key("y1", "y1"),
    key("x2", "x2"),
    key("y2", "y2"),
];

/// Start/end coordinates of a linear gradient, in relative plot units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearGradientCoords {
    x1: Option<f64>,
    y1: Option<f64>,
    x2: Option<f64>,
    y2: Option<f64>,
}

impl LinearGradientCoords {
    pub fn x1(&self) -> Option<f64> {
        self.x1
    }

    pub fn y1(&self) -> Option<f64> {
        self.y1
    }

    pub fn x2(&self) -> Option<f64> {
        self.x2
    }

    pub fn y2(&self) -> Option<f64> {
        self.y2
    }

    pub fn set_x1(&mut self, value: &Value) -> OptionsResult<()> {
        self.x1 = crate::schema::validators::numeric("x1", value, None)?;
        Ok(())
    }

    pub fn set_y1(&mut self, value: &Value) -> OptionsResult<()> {
        self.y1 = crate::schema::validators::numeric("y1", value, None)?;
        Ok(())
    }

    pub fn set_x2(&mut self, value: &Value) -> OptionsResult<()> {
        self.x2 = crate::schema::validators::numeric("x2", value, None)?;
        Ok(())
    }

    pub fn set_y2(&mut self, value: &Value) -> OptionsResult<()> {
        self.y2 = crate::schema::validators::numeric("y2", value, None)?;
        Ok(())
    }
}

impl SchemaNode for LinearGradientCoords {
    fn wire_keys() -> WireKeyTable {
        LINEAR_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_x1(init_value(init, "x1"))?;
        self.set_y1(init_value(init, "y1"))?;
        self.set_x2(init_value(init, "x2"))?;
        self.set_y2(init_value(init, "y2"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("x1".to_owned(), num_value(self.x1));
        out.insert("y1".to_owned(), num_value(self.y1));
        out.insert("x2".to_owned(), num_value(self.x2));
        out.insert("y2".to_owned(), num_value(self.y2));
    }
}

const RADIAL_KEYS: &[WireKey] = &[key("cx", "cx"), key("cy", "cy"), key("r", "r")];

/// Center and radius of a radial gradient, in relative plot units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadialGradientCoords {
    cx: Option<f64>,
    cy: Option<f64>,
    r: Option<f64>,
}

impl RadialGradientCoords {
    pub fn cx(&self) -> Option<f64> {
        self.cx
    }

    pub fn cy(&self) -> Option<f64> {
        self.cy
    }

    pub fn r(&self) -> Option<f64> {
        self.r
    }

    pub fn set_cx(&mut self, value: &Value) -> OptionsResult<()> {
        self.cx = crate::schema::validators::numeric("cx", value, None)?;
        Ok(())
    }

    pub fn set_cy(&mut self, value: &Value) -> OptionsResult<()> {
        self.cy = crate::schema::validators::numeric("cy", value, None)?;
        Ok(())
    }

    pub fn set_r(&mut self, value: &Value) -> OptionsResult<()> {
        self.r = crate::schema::validators::numeric("r", value, Some(0.0))?;
        Ok(())
    }
}

impl SchemaNode for RadialGradientCoords {
    fn wire_keys() -> WireKeyTable {
        RADIAL_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_cx(init_value(init, "cx"))?;
        self.set_cy(init_value(init, "cy"))?;
        self.set_r(init_value(init, "r"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("cx".to_owned(), num_value(self.cx));
        out.insert("cy".to_owned(), num_value(self.cy));
        out.insert("r".to_owned(), num_value(self.r));
    }
}

/// One gradient stop: a relative offset paired with a color string.
/// Emitted on the wire as a two-element `[offset, color]` array.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

impl GradientStop {
    fn resolve(value: &Value) -> OptionsResult<Self> {
        if let Value::Array(pair) = value {
            if pair.len() == 2 {
                if let (Some(offset), Some(color)) = (pair[0].as_f64(), pair[1].as_str()) {
                    if offset.is_finite() && !color.is_empty() {
                        return Ok(Self {
                            offset,
                            color: color.to_owned(),
                        });
                    }
                }
            }
        }
        Err(OptionsError::validation("stops", value))
    }

    fn to_value(&self) -> Value {
        Value::Array(vec![
            Value::from(self.offset),
            Value::from(self.color.as_str()),
        ])
    }
}

const GRADIENT_KEYS: &[WireKey] = &[
    key("linear_gradient", "linearGradient"),
    key("radial_gradient", "radialGradient"),
    key("stops", "stops"),
];

/// Gradient color specification: linear or radial geometry plus an ordered
/// stop sequence. Recursively serializable like any other schema node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradient {
    linear_gradient: Option<LinearGradientCoords>,
    radial_gradient: Option<RadialGradientCoords>,
    stops: Option<SmallVec<[GradientStop; 4]>>,
}

impl Gradient {
    pub fn linear_gradient(&self) -> Option<&LinearGradientCoords> {
        self.linear_gradient.as_ref()
    }

    pub fn radial_gradient(&self) -> Option<&RadialGradientCoords> {
        self.radial_gradient.as_ref()
    }

    pub fn stops(&self) -> Option<&[GradientStop]> {
        self.stops.as_deref()
    }

    pub fn set_linear_gradient(&mut self, value: &Value) -> OptionsResult<()> {
        self.linear_gradient = resolve_node("linear_gradient", value)?;
        Ok(())
    }

    pub fn set_radial_gradient(&mut self, value: &Value) -> OptionsResult<()> {
        self.radial_gradient = resolve_node("radial_gradient", value)?;
        Ok(())
    }

    /// Accepts a sequence of `[offset, color]` pairs. A single bare pair
    /// (array whose first element is a number) wraps into a one-element
    /// sequence.
    pub fn set_stops(&mut self, value: &Value) -> OptionsResult<()> {
        let stops = match value {
            Value::Null => None,
            Value::Array(items) if items.is_empty() => None,
            Value::Array(items) if items[0].is_number() => {
                Some(SmallVec::from_vec(vec![GradientStop::resolve(value)?]))
            }
            Value::Array(items) => {
                let mut stops = SmallVec::with_capacity(items.len());
                for item in items {
                    stops.push(GradientStop::resolve(item)?);
                }
                Some(stops)
            }
            other => return Err(OptionsError::validation("stops", other)),
        };
        self.stops = stops;
        Ok(())
    }

    fn stops_value(&self) -> Value {
        match &self.stops {
            Some(stops) => Value::Array(stops.iter().map(GradientStop::to_value).collect()),
            None => Value::Null,
        }
    }
}

impl SchemaNode for Gradient {
    fn wire_keys() -> WireKeyTable {
        GRADIENT_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_linear_gradient(init_value(init, "linear_gradient"))?;
        self.set_radial_gradient(init_value(init, "radial_gradient"))?;
        self.set_stops(init_value(init, "stops"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert(
            "linearGradient".to_owned(),
            node_value(self.linear_gradient.as_ref()),
        );
        out.insert(
            "radialGradient".to_owned(),
            node_value(self.radial_gradient.as_ref()),
        );
        out.insert("stops".to_owned(), self.stops_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn gradient_round_trips_through_wire_form() {
        let raw = json!({
            "linearGradient": { "x1": 0.0, "y1": 0.0, "x2": 1.0, "y2": 0.0 },
            "stops": [[0.0, "#ffffff"], [1.0, "#000000"]]
        });
        let map = raw.as_object().expect("object");
        let gradient = Gradient::from_wire(map).expect("valid gradient");

        assert_eq!(gradient.stops().map(<[GradientStop]>::len), Some(2));
        assert_eq!(Value::Object(gradient.to_wire()), raw);
    }

    #[test]
    fn single_bare_stop_wraps_into_sequence() {
        let mut gradient = Gradient::default();
        gradient
            .set_stops(&json!([0.5, "#ff0000"]))
            .expect("single stop");
        assert_eq!(gradient.stops().map(<[GradientStop]>::len), Some(1));
    }

    #[test]
    fn malformed_stop_is_rejected() {
        let mut gradient = Gradient::default();
        let err = gradient
            .set_stops(&json!([["low", "#ff0000"]]))
            .expect_err("offset must be numeric");
        assert!(matches!(err, OptionsError::Validation { .. }));
    }
}
