use serde_json::Value;

use crate::error::OptionsResult;
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, validators,
    wire::{bool_value, init_value, num_value, str_value},
};

/// Allowed values for [`AxisTitle::align`].
pub const TITLE_ALIGNMENTS: &[&str] = &["low", "middle", "high"];

const TITLE_KEYS: &[WireKey] = &[
    key("align", "align"),
    key("margin", "margin"),
    key("offset", "offset"),
    key("rotation", "rotation"),
    key("text", "text"),
    // Irregular snake/camel pair, dictated by the renderer.
    key("use_html", "useHTML"),
    key("x", "x"),
    key("y", "y"),
];

/// The axis title, displayed next to the axis line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisTitle {
    align: Option<String>,
    margin: Option<f64>,
    offset: Option<f64>,
    rotation: Option<f64>,
    text: Option<String>,
    use_html: Option<bool>,
    x: Option<f64>,
    y: Option<f64>,
}

impl AxisTitle {
    pub fn align(&self) -> Option<&str> {
        self.align.as_deref()
    }

    pub fn margin(&self) -> Option<f64> {
        self.margin
    }

    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    pub fn rotation(&self) -> Option<f64> {
        self.rotation
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn use_html(&self) -> Option<bool> {
        self.use_html
    }

    pub fn x(&self) -> Option<f64> {
        self.x
    }

    pub fn y(&self) -> Option<f64> {
        self.y
    }

    pub fn set_align(&mut self, value: &Value) -> OptionsResult<()> {
        self.align = validators::member("align", value, TITLE_ALIGNMENTS)?;
        Ok(())
    }

    pub fn set_margin(&mut self, value: &Value) -> OptionsResult<()> {
        self.margin = validators::numeric("margin", value, None)?;
        Ok(())
    }

    pub fn set_offset(&mut self, value: &Value) -> OptionsResult<()> {
        self.offset = validators::numeric("offset", value, None)?;
        Ok(())
    }

    pub fn set_rotation(&mut self, value: &Value) -> OptionsResult<()> {
        self.rotation = validators::numeric("rotation", value, None)?;
        Ok(())
    }

    pub fn set_text(&mut self, value: &Value) -> OptionsResult<()> {
        self.text = validators::string("text", value)?;
        Ok(())
    }

    pub fn set_use_html(&mut self, value: &Value) -> OptionsResult<()> {
        self.use_html = validators::boolean("use_html", value)?;
        Ok(())
    }

    pub fn set_x(&mut self, value: &Value) -> OptionsResult<()> {
        self.x = validators::numeric("x", value, None)?;
        Ok(())
    }

    pub fn set_y(&mut self, value: &Value) -> OptionsResult<()> {
        self.y = validators::numeric("y", value, None)?;
        Ok(())
    }
}

impl SchemaNode for AxisTitle {
    fn wire_keys() -> WireKeyTable {
        TITLE_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_align(init_value(init, "align"))?;
        self.set_margin(init_value(init, "margin"))?;
        self.set_offset(init_value(init, "offset"))?;
        self.set_rotation(init_value(init, "rotation"))?;
        self.set_text(init_value(init, "text"))?;
        self.set_use_html(init_value(init, "use_html"))?;
        self.set_x(init_value(init, "x"))?;
        self.set_y(init_value(init, "y"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("align".to_owned(), str_value(self.align.as_deref()));
        out.insert("margin".to_owned(), num_value(self.margin));
        out.insert("offset".to_owned(), num_value(self.offset));
        out.insert("rotation".to_owned(), num_value(self.rotation));
        out.insert("text".to_owned(), str_value(self.text.as_deref()));
        out.insert("useHTML".to_owned(), bool_value(self.use_html));
        out.insert("x".to_owned(), num_value(self.x));
        out.insert("y".to_owned(), num_value(self.y));
    }
}
