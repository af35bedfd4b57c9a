//! Base attribute level shared by every series type.

use serde_json::Value;

use crate::error::OptionsResult;
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, validators,
    wire::{bool_value, init_value, int_value, num_value, str_value, strings_value},
};
use crate::utility::{ColorInput, DashStyle, color_value, dash_value};

const GENERIC_TYPE_KEYS: &[WireKey] = &[
    key("allow_point_select", "allowPointSelect"),
    key("class_name", "className"),
    key("clip", "clip"),
    key("color", "color"),
    key("cursor", "cursor"),
    key("dash_style", "dashStyle"),
    key("description", "description"),
    key("enable_mouse_tracking", "enableMouseTracking"),
    key("include_in_data_export", "includeInDataExport"),
    key("keys", "keys"),
    key("linked_to", "linkedTo"),
    key("opacity", "opacity"),
    key("selected", "selected"),
    key("show_checkbox", "showCheckbox"),
    key("show_in_legend", "showInLegend"),
    key("skip_keyboard_navigation", "skipKeyboardNavigation"),
    key("threshold", "threshold"),
    key("turbo_threshold", "turboThreshold"),
    key("visible", "visible"),
];

/// Universal series attributes. Every series family embeds this level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericTypeOptions {
    allow_point_select: Option<bool>,
    class_name: Option<String>,
    clip: Option<bool>,
    color: Option<ColorInput>,
    cursor: Option<String>,
    dash_style: Option<DashStyle>,
    description: Option<String>,
    enable_mouse_tracking: Option<bool>,
    include_in_data_export: Option<bool>,
    keys: Option<Vec<String>>,
    linked_to: Option<String>,
    opacity: Option<f64>,
    selected: Option<bool>,
    show_checkbox: Option<bool>,
    show_in_legend: Option<bool>,
    skip_keyboard_navigation: Option<bool>,
    threshold: Option<f64>,
    turbo_threshold: Option<i64>,
    visible: Option<bool>,
}

impl GenericTypeOptions {
    pub fn allow_point_select(&self) -> Option<bool> {
        self.allow_point_select
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn clip(&self) -> Option<bool> {
        self.clip
    }

    pub fn color(&self) -> Option<&ColorInput> {
        self.color.as_ref()
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn dash_style(&self) -> Option<DashStyle> {
        self.dash_style
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enable_mouse_tracking(&self) -> Option<bool> {
        self.enable_mouse_tracking
    }

    pub fn include_in_data_export(&self) -> Option<bool> {
        self.include_in_data_export
    }

    pub fn keys(&self) -> Option<&[String]> {
        self.keys.as_deref()
    }

    pub fn linked_to(&self) -> Option<&str> {
        self.linked_to.as_deref()
    }

    pub fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    pub fn selected(&self) -> Option<bool> {
        self.selected
    }

    pub fn show_checkbox(&self) -> Option<bool> {
        self.show_checkbox
    }

    pub fn show_in_legend(&self) -> Option<bool> {
        self.show_in_legend
    }

    pub fn skip_keyboard_navigation(&self) -> Option<bool> {
        self.skip_keyboard_navigation
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    pub fn turbo_threshold(&self) -> Option<i64> {
        self.turbo_threshold
    }

    pub fn visible(&self) -> Option<bool> {
        self.visible
    }

    pub fn set_allow_point_select(&mut self, value: &Value) -> OptionsResult<()> {
        self.allow_point_select = validators::boolean("allow_point_select", value)?;
        Ok(())
    }

    pub fn set_class_name(&mut self, value: &Value) -> OptionsResult<()> {
        self.class_name = validators::string("class_name", value)?;
        Ok(())
    }

    pub fn set_clip(&mut self, value: &Value) -> OptionsResult<()> {
        self.clip = validators::boolean("clip", value)?;
        Ok(())
    }

    /// The main color of the series: a plain color string, a gradient, or a
    /// pattern, resolved structurally.
    pub fn set_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.color = ColorInput::resolve("color", value)?;
        Ok(())
    }

    pub fn set_cursor(&mut self, value: &Value) -> OptionsResult<()> {
        self.cursor = validators::string("cursor", value)?;
        Ok(())
    }

    pub fn set_dash_style(&mut self, value: &Value) -> OptionsResult<()> {
        self.dash_style = DashStyle::resolve("dash_style", value)?;
        Ok(())
    }

    pub fn set_description(&mut self, value: &Value) -> OptionsResult<()> {
        self.description = validators::string("description", value)?;
        Ok(())
    }

    pub fn set_enable_mouse_tracking(&mut self, value: &Value) -> OptionsResult<()> {
        self.enable_mouse_tracking = validators::boolean("enable_mouse_tracking", value)?;
        Ok(())
    }

    pub fn set_include_in_data_export(&mut self, value: &Value) -> OptionsResult<()> {
        self.include_in_data_export = validators::boolean("include_in_data_export", value)?;
        Ok(())
    }

    pub fn set_keys(&mut self, value: &Value) -> OptionsResult<()> {
        self.keys = validators::strings("keys", value)?;
        Ok(())
    }

    pub fn set_linked_to(&mut self, value: &Value) -> OptionsResult<()> {
        self.linked_to = validators::string("linked_to", value)?;
        Ok(())
    }

    pub fn set_opacity(&mut self, value: &Value) -> OptionsResult<()> {
        self.opacity = validators::numeric("opacity", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_selected(&mut self, value: &Value) -> OptionsResult<()> {
        self.selected = validators::boolean("selected", value)?;
        Ok(())
    }

    pub fn set_show_checkbox(&mut self, value: &Value) -> OptionsResult<()> {
        self.show_checkbox = validators::boolean("show_checkbox", value)?;
        Ok(())
    }

    pub fn set_show_in_legend(&mut self, value: &Value) -> OptionsResult<()> {
        self.show_in_legend = validators::boolean("show_in_legend", value)?;
        Ok(())
    }

    pub fn set_skip_keyboard_navigation(&mut self, value: &Value) -> OptionsResult<()> {
        self.skip_keyboard_navigation = validators::boolean("skip_keyboard_navigation", value)?;
        Ok(())
    }

    pub fn set_threshold(&mut self, value: &Value) -> OptionsResult<()> {
        self.threshold = validators::numeric("threshold", value, None)?;
        Ok(())
    }

    pub fn set_turbo_threshold(&mut self, value: &Value) -> OptionsResult<()> {
        self.turbo_threshold = validators::integer("turbo_threshold", value, Some(0))?;
        Ok(())
    }

    pub fn set_visible(&mut self, value: &Value) -> OptionsResult<()> {
        self.visible = validators::boolean("visible", value)?;
        Ok(())
    }
}

impl SchemaNode for GenericTypeOptions {
    fn wire_keys() -> WireKeyTable {
        GENERIC_TYPE_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_allow_point_select(init_value(init, "allow_point_select"))?;
        self.set_class_name(init_value(init, "class_name"))?;
        self.set_clip(init_value(init, "clip"))?;
        self.set_color(init_value(init, "color"))?;
        self.set_cursor(init_value(init, "cursor"))?;
        self.set_dash_style(init_value(init, "dash_style"))?;
        self.set_description(init_value(init, "description"))?;
        self.set_enable_mouse_tracking(init_value(init, "enable_mouse_tracking"))?;
        self.set_include_in_data_export(init_value(init, "include_in_data_export"))?;
        self.set_keys(init_value(init, "keys"))?;
        self.set_linked_to(init_value(init, "linked_to"))?;
        self.set_opacity(init_value(init, "opacity"))?;
        self.set_selected(init_value(init, "selected"))?;
        self.set_show_checkbox(init_value(init, "show_checkbox"))?;
        self.set_show_in_legend(init_value(init, "show_in_legend"))?;
        self.set_skip_keyboard_navigation(init_value(init, "skip_keyboard_navigation"))?;
        self.set_threshold(init_value(init, "threshold"))?;
        self.set_turbo_threshold(init_value(init, "turbo_threshold"))?;
        self.set_visible(init_value(init, "visible"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert(
            "allowPointSelect".to_owned(),
            bool_value(self.allow_point_select),
        );
        out.insert("className".to_owned(), str_value(self.class_name.as_deref()));
        out.insert("clip".to_owned(), bool_value(self.clip));
        out.insert("color".to_owned(), color_value(self.color.as_ref()));
        out.insert("cursor".to_owned(), str_value(self.cursor.as_deref()));
        out.insert("dashStyle".to_owned(), dash_value(self.dash_style));
        out.insert(
            "description".to_owned(),
            str_value(self.description.as_deref()),
        );
        out.insert(
            "enableMouseTracking".to_owned(),
            bool_value(self.enable_mouse_tracking),
        );
        out.insert(
            "includeInDataExport".to_owned(),
            bool_value(self.include_in_data_export),
        );
        out.insert("keys".to_owned(), strings_value(self.keys.as_deref()));
        out.insert("linkedTo".to_owned(), str_value(self.linked_to.as_deref()));
        out.insert("opacity".to_owned(), num_value(self.opacity));
        out.insert("selected".to_owned(), bool_value(self.selected));
        out.insert("showCheckbox".to_owned(), bool_value(self.show_checkbox));
        out.insert("showInLegend".to_owned(), bool_value(self.show_in_legend));
        out.insert(
            "skipKeyboardNavigation".to_owned(),
            bool_value(self.skip_keyboard_navigation),
        );
        out.insert("threshold".to_owned(), num_value(self.threshold));
        out.insert("turboThreshold".to_owned(), int_value(self.turbo_threshold));
        out.insert("visible".to_owned(), bool_value(self.visible));
    }
}
