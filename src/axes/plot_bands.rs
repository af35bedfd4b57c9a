//! Colored bands and lines stretched across the plot area to mark intervals
//! or specific values along an axis.

use serde_json::Value;

use crate::error::OptionsResult;
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, validators,
    wire::{init_value, num_value, str_value},
};
use crate::utility::{ColorInput, DashStyle, color_value, dash_value};

const PLOT_BAND_KEYS: &[WireKey] = &[
    key("border_color", "borderColor"),
    key("border_width", "borderWidth"),
    key("class_name", "className"),
    key("color", "color"),
    key("from", "from"),
    key("id", "id"),
    key("to", "to"),
    key("z_index", "zIndex"),
];

/// A colored band marking an interval along the axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotBand {
    border_color: Option<String>,
    border_width: Option<f64>,
    class_name: Option<String>,
    color: Option<ColorInput>,
    from: Option<f64>,
    id: Option<String>,
    to: Option<f64>,
    z_index: Option<f64>,
}

impl PlotBand {
    pub fn border_color(&self) -> Option<&str> {
        self.border_color.as_deref()
    }

    pub fn border_width(&self) -> Option<f64> {
        self.border_width
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn color(&self) -> Option<&ColorInput> {
        self.color.as_ref()
    }

    pub fn from(&self) -> Option<f64> {
        self.from
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn to(&self) -> Option<f64> {
        self.to
    }

    pub fn z_index(&self) -> Option<f64> {
        self.z_index
    }

    pub fn set_border_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.border_color = validators::string("border_color", value)?;
        Ok(())
    }

    pub fn set_border_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.border_width = validators::numeric("border_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_class_name(&mut self, value: &Value) -> OptionsResult<()> {
        self.class_name = validators::string("class_name", value)?;
        Ok(())
    }

    pub fn set_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.color = ColorInput::resolve("color", value)?;
        Ok(())
    }

    pub fn set_from(&mut self, value: &Value) -> OptionsResult<()> {
        self.from = validators::numeric("from", value, None)?;
        Ok(())
    }

    pub fn set_id(&mut self, value: &Value) -> OptionsResult<()> {
        self.id = validators::string("id", value)?;
        Ok(())
    }

    pub fn set_to(&mut self, value: &Value) -> OptionsResult<()> {
        self.to = validators::numeric("to", value, None)?;
        Ok(())
    }

    pub fn set_z_index(&mut self, value: &Value) -> OptionsResult<()> {
        self.z_index = validators::numeric("z_index", value, None)?;
        Ok(())
    }
}

impl SchemaNode for PlotBand {
    fn wire_keys() -> WireKeyTable {
        PLOT_BAND_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_border_color(init_value(init, "border_color"))?;
        self.set_border_width(init_value(init, "border_width"))?;
        self.set_class_name(init_value(init, "class_name"))?;
        self.set_color(init_value(init, "color"))?;
        self.set_from(init_value(init, "from"))?;
        self.set_id(init_value(init, "id"))?;
        self.set_to(init_value(init, "to"))?;
        self.set_z_index(init_value(init, "z_index"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert(
            "borderColor".to_owned(),
            str_value(self.border_color.as_deref()),
        );
        out.insert("borderWidth".to_owned(), num_value(self.border_width));
        out.insert("className".to_owned(), str_value(self.class_name.as_deref()));
        out.insert("color".to_owned(), color_value(self.color.as_ref()));
        out.insert("from".to_owned(), num_value(self.from));
        out.insert("id".to_owned(), str_value(self.id.as_deref()));
        out.insert("to".to_owned(), num_value(self.to));
        out.insert("zIndex".to_owned(), num_value(self.z_index));
    }
}

const PLOT_LINE_KEYS: &[WireKey] = &[
    key("class_name", "className"),
    key("color", "color"),
    key("dash_style", "dashStyle"),
    key("id", "id"),
    key("value", "value"),
    key("width", "width"),
    key("z_index", "zIndex"),
];

/// A line marking a specific value on the axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotLine {
    class_name: Option<String>,
    color: Option<String>,
    dash_style: Option<DashStyle>,
    id: Option<String>,
    value: Option<f64>,
    width: Option<f64>,
    z_index: Option<f64>,
}

impl PlotLine {
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn dash_style(&self) -> Option<DashStyle> {
        self.dash_style
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn z_index(&self) -> Option<f64> {
        self.z_index
    }

    pub fn set_class_name(&mut self, value: &Value) -> OptionsResult<()> {
        self.class_name = validators::string("class_name", value)?;
        Ok(())
    }

    pub fn set_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.color = validators::string("color", value)?;
        Ok(())
    }

    pub fn set_dash_style(&mut self, value: &Value) -> OptionsResult<()> {
        self.dash_style = DashStyle::resolve("dash_style", value)?;
        Ok(())
    }

    pub fn set_id(&mut self, value: &Value) -> OptionsResult<()> {
        self.id = validators::string("id", value)?;
        Ok(())
    }

    pub fn set_value(&mut self, value: &Value) -> OptionsResult<()> {
        self.value = validators::numeric("value", value, None)?;
        Ok(())
    }

    pub fn set_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.width = validators::numeric("width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_z_index(&mut self, value: &Value) -> OptionsResult<()> {
        self.z_index = validators::numeric("z_index", value, None)?;
        Ok(())
    }
}

impl SchemaNode for PlotLine {
    fn wire_keys() -> WireKeyTable {
        PLOT_LINE_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_class_name(init_value(init, "class_name"))?;
        self.set_color(init_value(init, "color"))?;
        self.set_dash_style(init_value(init, "dash_style"))?;
        self.set_id(init_value(init, "id"))?;
        self.set_value(init_value(init, "value"))?;
        self.set_width(init_value(init, "width"))?;
        self.set_z_index(init_value(init, "z_index"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("className".to_owned(), str_value(self.class_name.as_deref()));
        out.insert("color".to_owned(), str_value(self.color.as_deref()));
        out.insert("dashStyle".to_owned(), dash_value(self.dash_style));
        out.insert("id".to_owned(), str_value(self.id.as_deref()));
        out.insert("value".to_owned(), num_value(self.value));
        out.insert("width".to_owned(), num_value(self.width));
        out.insert("zIndex".to_owned(), num_value(self.z_index));
    }
}
