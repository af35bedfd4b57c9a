use serde_json::Value;

use crate::error::OptionsResult;
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, validators,
    wire::{init_value, num_value},
};

const BREAK_KEYS: &[WireKey] = &[
    key("break_size", "breakSize"),
    key("from", "from"),
    key("repeat", "repeat"),
    key("to", "to"),
];

/// One section of axis values left out of rendering; points on either side
/// are shifted closer together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisBreak {
    break_size: Option<f64>,
    from: Option<f64>,
    repeat: Option<f64>,
    to: Option<f64>,
}

impl AxisBreak {
    pub fn break_size(&self) -> Option<f64> {
        self.break_size
    }

    pub fn from(&self) -> Option<f64> {
        self.from
    }

    pub fn repeat(&self) -> Option<f64> {
        self.repeat
    }

    pub fn to(&self) -> Option<f64> {
        self.to
    }

    pub fn set_break_size(&mut self, value: &Value) -> OptionsResult<()> {
        self.break_size = validators::numeric("break_size", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_from(&mut self, value: &Value) -> OptionsResult<()> {
        self.from = validators::numeric("from", value, None)?;
        Ok(())
    }

    pub fn set_repeat(&mut self, value: &Value) -> OptionsResult<()> {
        self.repeat = validators::numeric("repeat", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_to(&mut self, value: &Value) -> OptionsResult<()> {
        self.to = validators::numeric("to", value, None)?;
        Ok(())
    }
}

impl SchemaNode for AxisBreak {
    fn wire_keys() -> WireKeyTable {
        BREAK_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_break_size(init_value(init, "break_size"))?;
        self.set_from(init_value(init, "from"))?;
        self.set_repeat(init_value(init, "repeat"))?;
        self.set_to(init_value(init, "to"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("breakSize".to_owned(), num_value(self.break_size));
        out.insert("from".to_owned(), num_value(self.from));
        out.insert("repeat".to_owned(), num_value(self.repeat));
        out.insert("to".to_owned(), num_value(self.to));
    }
}
