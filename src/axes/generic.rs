//! Base attribute level shared by every axis kind.

use serde_json::Value;

use crate::error::OptionsResult;
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, validators,
    wire::{bool_value, init_value, int_value, num_value, str_value},
};
use crate::utility::{ColorInput, DashStyle, color_value, dash_value};

/// Allowed values for tick placement relative to the axis line.
pub const TICK_POSITIONS: &[&str] = &["inside", "outside"];

/// Allowed values for tickmark placement on a categorized axis.
pub const TICKMARK_PLACEMENTS: &[&str] = &["on", "between"];

const GENERIC_AXIS_KEYS: &[WireKey] = &[
    key("angle", "angle"),
    key("ceiling", "ceiling"),
    key("class_name", "className"),
    key("end_on_tick", "endOnTick"),
    key("floor", "floor"),
    key("grid_line_color", "gridLineColor"),
    key("grid_line_dash_style", "gridLineDashStyle"),
    key("grid_line_width", "gridLineWidth"),
    key("grid_z_index", "gridZIndex"),
    key("id", "id"),
    key("margin", "margin"),
    key("max", "max"),
    key("max_padding", "maxPadding"),
    key("min", "min"),
    key("min_padding", "minPadding"),
    key("minor_grid_line_color", "minorGridLineColor"),
    key("minor_grid_line_dash_style", "minorGridLineDashStyle"),
    key("minor_grid_line_width", "minorGridLineWidth"),
    key("minor_tick_color", "minorTickColor"),
    key("minor_tick_interval", "minorTickInterval"),
    key("minor_tick_length", "minorTickLength"),
    key("minor_tick_position", "minorTickPosition"),
    key("minor_tick_width", "minorTickWidth"),
    key("minor_ticks", "minorTicks"),
    key("panning_enabled", "panningEnabled"),
    key("reversed", "reversed"),
    key("show_first_label", "showFirstLabel"),
    key("show_last_label", "showLastLabel"),
    key("soft_max", "softMax"),
    key("soft_min", "softMin"),
    key("start_of_week", "startOfWeek"),
    key("start_on_tick", "startOnTick"),
    key("tick_amount", "tickAmount"),
    key("tick_color", "tickColor"),
    key("tick_interval", "tickInterval"),
    key("tick_length", "tickLength"),
    key("tick_pixel_interval", "tickPixelInterval"),
    key("tick_position", "tickPosition"),
    key("tick_width", "tickWidth"),
    key("tickmark_placement", "tickmarkPlacement"),
    key("unique_names", "uniqueNames"),
    key("visible", "visible"),
    key("z_index", "zIndex"),
];

/// Universal axis attributes. Every concrete axis embeds this level and
/// layers its own additions on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericAxis {
    angle: Option<f64>,
    ceiling: Option<f64>,
    class_name: Option<String>,
    end_on_tick: Option<bool>,
    floor: Option<f64>,
    grid_line_color: Option<ColorInput>,
    grid_line_dash_style: Option<DashStyle>,
    grid_line_width: Option<f64>,
    grid_z_index: Option<f64>,
    id: Option<String>,
    margin: Option<f64>,
    max: Option<f64>,
    max_padding: Option<f64>,
    min: Option<f64>,
    min_padding: Option<f64>,
    minor_grid_line_color: Option<ColorInput>,
    minor_grid_line_dash_style: Option<DashStyle>,
    minor_grid_line_width: Option<f64>,
    minor_tick_color: Option<ColorInput>,
    minor_tick_interval: Option<f64>,
    minor_tick_length: Option<f64>,
    minor_tick_position: Option<String>,
    minor_tick_width: Option<f64>,
    minor_ticks: Option<bool>,
    panning_enabled: Option<bool>,
    reversed: Option<bool>,
    show_first_label: Option<bool>,
    show_last_label: Option<bool>,
    soft_max: Option<f64>,
    soft_min: Option<f64>,
    start_of_week: Option<i64>,
    start_on_tick: Option<bool>,
    tick_amount: Option<i64>,
    tick_color: Option<ColorInput>,
    tick_interval: Option<f64>,
    tick_length: Option<f64>,
    tick_pixel_interval: Option<f64>,
    tick_position: Option<String>,
    tick_width: Option<f64>,
    tickmark_placement: Option<String>,
    unique_names: Option<bool>,
    visible: Option<bool>,
    z_index: Option<f64>,
}

impl GenericAxis {
    pub fn angle(&self) -> Option<f64> {
        self.angle
    }

    pub fn ceiling(&self) -> Option<f64> {
        self.ceiling
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn end_on_tick(&self) -> Option<bool> {
        self.end_on_tick
    }

    pub fn floor(&self) -> Option<f64> {
        self.floor
    }

    pub fn grid_line_color(&self) -> Option<&ColorInput> {
        self.grid_line_color.as_ref()
    }

    pub fn grid_line_dash_style(&self) -> Option<DashStyle> {
        self.grid_line_dash_style
    }

    pub fn grid_line_width(&self) -> Option<f64> {
        self.grid_line_width
    }

    pub fn grid_z_index(&self) -> Option<f64> {
        self.grid_z_index
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn margin(&self) -> Option<f64> {
        self.margin
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn max_padding(&self) -> Option<f64> {
        self.max_padding
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn min_padding(&self) -> Option<f64> {
        self.min_padding
    }

    pub fn minor_grid_line_color(&self) -> Option<&ColorInput> {
        self.minor_grid_line_color.as_ref()
    }

    pub fn minor_grid_line_dash_style(&self) -> Option<DashStyle> {
        self.minor_grid_line_dash_style
    }

    pub fn minor_grid_line_width(&self) -> Option<f64> {
        self.minor_grid_line_width
    }

    pub fn minor_tick_color(&self) -> Option<&ColorInput> {
        self.minor_tick_color.as_ref()
    }

    pub fn minor_tick_interval(&self) -> Option<f64> {
        self.minor_tick_interval
    }

    pub fn minor_tick_length(&self) -> Option<f64> {
        self.minor_tick_length
    }

    pub fn minor_tick_position(&self) -> Option<&str> {
        self.minor_tick_position.as_deref()
    }

    pub fn minor_tick_width(&self) -> Option<f64> {
        self.minor_tick_width
    }

    pub fn minor_ticks(&self) -> Option<bool> {
        self.minor_ticks
    }

    pub fn panning_enabled(&self) -> Option<bool> {
        self.panning_enabled
    }

    pub fn reversed(&self) -> Option<bool> {
        self.reversed
    }

    pub fn show_first_label(&self) -> Option<bool> {
        self.show_first_label
    }

    pub fn show_last_label(&self) -> Option<bool> {
        self.show_last_label
    }

    pub fn soft_max(&self) -> Option<f64> {
        self.soft_max
    }

    pub fn soft_min(&self) -> Option<f64> {
        self.soft_min
    }

    pub fn start_of_week(&self) -> Option<i64> {
        self.start_of_week
    }

    pub fn start_on_tick(&self) -> Option<bool> {
        self.start_on_tick
    }

    pub fn tick_amount(&self) -> Option<i64> {
        self.tick_amount
    }

    pub fn tick_color(&self) -> Option<&ColorInput> {
        self.tick_color.as_ref()
    }

    pub fn tick_interval(&self) -> Option<f64> {
        self.tick_interval
    }

    pub fn tick_length(&self) -> Option<f64> {
        self.tick_length
    }

    pub fn tick_pixel_interval(&self) -> Option<f64> {
        self.tick_pixel_interval
    }

    pub fn tick_position(&self) -> Option<&str> {
        self.tick_position.as_deref()
    }

    pub fn tick_width(&self) -> Option<f64> {
        self.tick_width
    }

    pub fn tickmark_placement(&self) -> Option<&str> {
        self.tickmark_placement.as_deref()
    }

    pub fn unique_names(&self) -> Option<bool> {
        self.unique_names
    }

    pub fn visible(&self) -> Option<bool> {
        self.visible
    }

    pub fn z_index(&self) -> Option<f64> {
        self.z_index
    }

    pub fn set_angle(&mut self, value: &Value) -> OptionsResult<()> {
        self.angle = validators::numeric("angle", value, None)?;
        Ok(())
    }

    pub fn set_ceiling(&mut self, value: &Value) -> OptionsResult<()> {
        self.ceiling = validators::numeric("ceiling", value, None)?;
        Ok(())
    }

    pub fn set_class_name(&mut self, value: &Value) -> OptionsResult<()> {
        self.class_name = validators::string("class_name", value)?;
        Ok(())
    }

    pub fn set_end_on_tick(&mut self, value: &Value) -> OptionsResult<()> {
        self.end_on_tick = validators::boolean("end_on_tick", value)?;
        Ok(())
    }

    pub fn set_floor(&mut self, value: &Value) -> OptionsResult<()> {
        self.floor = validators::numeric("floor", value, None)?;
        Ok(())
    }

    pub fn set_grid_line_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.grid_line_color = ColorInput::resolve("grid_line_color", value)?;
        Ok(())
    }

    pub fn set_grid_line_dash_style(&mut self, value: &Value) -> OptionsResult<()> {
        self.grid_line_dash_style = DashStyle::resolve("grid_line_dash_style", value)?;
        Ok(())
    }

    pub fn set_grid_line_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.grid_line_width = validators::numeric("grid_line_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_grid_z_index(&mut self, value: &Value) -> OptionsResult<()> {
        self.grid_z_index = validators::numeric("grid_z_index", value, None)?;
        Ok(())
    }

    pub fn set_id(&mut self, value: &Value) -> OptionsResult<()> {
        self.id = validators::string("id", value)?;
        Ok(())
    }

    pub fn set_margin(&mut self, value: &Value) -> OptionsResult<()> {
        self.margin = validators::numeric("margin", value, None)?;
        Ok(())
    }

    pub fn set_max(&mut self, value: &Value) -> OptionsResult<()> {
        self.max = validators::numeric("max", value, None)?;
        Ok(())
    }

    pub fn set_max_padding(&mut self, value: &Value) -> OptionsResult<()> {
        self.max_padding = validators::numeric("max_padding", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_min(&mut self, value: &Value) -> OptionsResult<()> {
        self.min = validators::numeric("min", value, None)?;
        Ok(())
    }

    pub fn set_min_padding(&mut self, value: &Value) -> OptionsResult<()> {
        self.min_padding = validators::numeric("min_padding", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_minor_grid_line_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.minor_grid_line_color = ColorInput::resolve("minor_grid_line_color", value)?;
        Ok(())
    }

    pub fn set_minor_grid_line_dash_style(&mut self, value: &Value) -> OptionsResult<()> {
        self.minor_grid_line_dash_style = DashStyle::resolve("minor_grid_line_dash_style", value)?;
        Ok(())
    }

    pub fn set_minor_grid_line_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.minor_grid_line_width =
            validators::numeric("minor_grid_line_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_minor_tick_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.minor_tick_color = ColorInput::resolve("minor_tick_color", value)?;
        Ok(())
    }

    pub fn set_minor_tick_interval(&mut self, value: &Value) -> OptionsResult<()> {
        self.minor_tick_interval = validators::numeric("minor_tick_interval", value, None)?;
        Ok(())
    }

    pub fn set_minor_tick_length(&mut self, value: &Value) -> OptionsResult<()> {
        self.minor_tick_length = validators::numeric("minor_tick_length", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_minor_tick_position(&mut self, value: &Value) -> OptionsResult<()> {
        self.minor_tick_position =
            validators::member("minor_tick_position", value, TICK_POSITIONS)?;
        Ok(())
    }

    pub fn set_minor_tick_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.minor_tick_width = validators::numeric("minor_tick_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_minor_ticks(&mut self, value: &Value) -> OptionsResult<()> {
        self.minor_ticks = validators::boolean("minor_ticks", value)?;
        Ok(())
    }

    pub fn set_panning_enabled(&mut self, value: &Value) -> OptionsResult<()> {
        self.panning_enabled = validators::boolean("panning_enabled", value)?;
        Ok(())
    }

    pub fn set_reversed(&mut self, value: &Value) -> OptionsResult<()> {
        self.reversed = validators::boolean("reversed", value)?;
        Ok(())
    }

    pub fn set_show_first_label(&mut self, value: &Value) -> OptionsResult<()> {
        self.show_first_label = validators::boolean("show_first_label", value)?;
        Ok(())
    }

    pub fn set_show_last_label(&mut self, value: &Value) -> OptionsResult<()> {
        self.show_last_label = validators::boolean("show_last_label", value)?;
        Ok(())
    }

    pub fn set_soft_max(&mut self, value: &Value) -> OptionsResult<()> {
        self.soft_max = validators::numeric("soft_max", value, None)?;
        Ok(())
    }

    pub fn set_soft_min(&mut self, value: &Value) -> OptionsResult<()> {
        self.soft_min = validators::numeric("soft_min", value, None)?;
        Ok(())
    }

    /// Weekday index the week starts on, 0 (Sunday) through 6 (Saturday).
    pub fn set_start_of_week(&mut self, value: &Value) -> OptionsResult<()> {
        let day = validators::integer("start_of_week", value, Some(0))?;
        if day.is_some_and(|d| d > 6) {
            return Err(crate::error::OptionsError::validation("start_of_week", value));
        }
        self.start_of_week = day;
        Ok(())
    }

    pub fn set_start_on_tick(&mut self, value: &Value) -> OptionsResult<()> {
        self.start_on_tick = validators::boolean("start_on_tick", value)?;
        Ok(())
    }

    pub fn set_tick_amount(&mut self, value: &Value) -> OptionsResult<()> {
        self.tick_amount = validators::integer("tick_amount", value, Some(0))?;
        Ok(())
    }

    pub fn set_tick_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.tick_color = ColorInput::resolve("tick_color", value)?;
        Ok(())
    }

    pub fn set_tick_interval(&mut self, value: &Value) -> OptionsResult<()> {
        self.tick_interval = validators::numeric("tick_interval", value, None)?;
        Ok(())
    }

    pub fn set_tick_length(&mut self, value: &Value) -> OptionsResult<()> {
        self.tick_length = validators::numeric("tick_length", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_tick_pixel_interval(&mut self, value: &Value) -> OptionsResult<()> {
        self.tick_pixel_interval = validators::numeric("tick_pixel_interval", value, None)?;
        Ok(())
    }

    pub fn set_tick_position(&mut self, value: &Value) -> OptionsResult<()> {
        self.tick_position = validators::member("tick_position", value, TICK_POSITIONS)?;
        Ok(())
    }

    pub fn set_tick_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.tick_width = validators::numeric("tick_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_tickmark_placement(&mut self, value: &Value) -> OptionsResult<()> {
        self.tickmark_placement =
            validators::member("tickmark_placement", value, TICKMARK_PLACEMENTS)?;
        Ok(())
    }

    pub fn set_unique_names(&mut self, value: &Value) -> OptionsResult<()> {
        self.unique_names = validators::boolean("unique_names", value)?;
        Ok(())
    }

    pub fn set_visible(&mut self, value: &Value) -> OptionsResult<()> {
        self.visible = validators::boolean("visible", value)?;
        Ok(())
    }

    pub fn set_z_index(&mut self, value: &Value) -> OptionsResult<()> {
        self.z_index = validators::numeric("z_index", value, None)?;
        Ok(())
    }
}

impl SchemaNode for GenericAxis {
    fn wire_keys() -> WireKeyTable {
        GENERIC_AXIS_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_angle(init_value(init, "angle"))?;
        self.set_ceiling(init_value(init, "ceiling"))?;
        self.set_class_name(init_value(init, "class_name"))?;
        self.set_end_on_tick(init_value(init, "end_on_tick"))?;
        self.set_floor(init_value(init, "floor"))?;
        self.set_grid_line_color(init_value(init, "grid_line_color"))?;
        self.set_grid_line_dash_style(init_value(init, "grid_line_dash_style"))?;
        self.set_grid_line_width(init_value(init, "grid_line_width"))?;
        self.set_grid_z_index(init_value(init, "grid_z_index"))?;
        self.set_id(init_value(init, "id"))?;
        self.set_margin(init_value(init, "margin"))?;
        self.set_max(init_value(init, "max"))?;
        self.set_max_padding(init_value(init, "max_padding"))?;
        self.set_min(init_value(init, "min"))?;
        self.set_min_padding(init_value(init, "min_padding"))?;
        self.set_minor_grid_line_color(init_value(init, "minor_grid_line_color"))?;
        self.set_minor_grid_line_dash_style(init_value(init, "minor_grid_line_dash_style"))?;
        self.set_minor_grid_line_width(init_value(init, "minor_grid_line_width"))?;
        self.set_minor_tick_color(init_value(init, "minor_tick_color"))?;
        self.set_minor_tick_interval(init_value(init, "minor_tick_interval"))?;
        self.set_minor_tick_length(init_value(init, "minor_tick_length"))?;
        self.set_minor_tick_position(init_value(init, "minor_tick_position"))?;
        self.set_minor_tick_width(init_value(init, "minor_tick_width"))?;
        self.set_minor_ticks(init_value(init, "minor_ticks"))?;
        self.set_panning_enabled(init_value(init, "panning_enabled"))?;
        self.set_reversed(init_value(init, "reversed"))?;
        self.set_show_first_label(init_value(init, "show_first_label"))?;
        self.set_show_last_label(init_value(init, "show_last_label"))?;
        self.set_soft_max(init_value(init, "soft_max"))?;
        self.set_soft_min(init_value(init, "soft_min"))?;
        self.set_start_of_week(init_value(init, "start_of_week"))?;
        self.set_start_on_tick(init_value(init, "start_on_tick"))?;
        self.set_tick_amount(init_value(init, "tick_amount"))?;
        self.set_tick_color(init_value(init, "tick_color"))?;
        self.set_tick_interval(init_value(init, "tick_interval"))?;
        self.set_tick_length(init_value(init, "tick_length"))?;
        self.set_tick_pixel_interval(init_value(init, "tick_pixel_interval"))?;
        self.set_tick_position(init_value(init, "tick_position"))?;
        self.set_tick_width(init_value(init, "tick_width"))?;
        self.set_tickmark_placement(init_value(init, "tickmark_placement"))?;
        self.set_unique_names(init_value(init, "unique_names"))?;
        self.set_visible(init_value(init, "visible"))?;
        self.set_z_index(init_value(init, "z_index"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("angle".to_owned(), num_value(self.angle));
        out.insert("ceiling".to_owned(), num_value(self.ceiling));
        out.insert("className".to_owned(), str_value(self.class_name.as_deref()));
        out.insert("endOnTick".to_owned(), bool_value(self.end_on_tick));
        out.insert("floor".to_owned(), num_value(self.floor));
        out.insert(
            "gridLineColor".to_owned(),
            color_value(self.grid_line_color.as_ref()),
        );
        out.insert(
            "gridLineDashStyle".to_owned(),
            dash_value(self.grid_line_dash_style),
        );
        out.insert("gridLineWidth".to_owned(), num_value(self.grid_line_width));
        out.insert("gridZIndex".to_owned(), num_value(self.grid_z_index));
        out.insert("id".to_owned(), str_value(self.id.as_deref()));
        out.insert("margin".to_owned(), num_value(self.margin));
        out.insert("max".to_owned(), num_value(self.max));
        out.insert("maxPadding".to_owned(), num_value(self.max_padding));
        out.insert("min".to_owned(), num_value(self.min));
        out.insert("minPadding".to_owned(), num_value(self.min_padding));
        out.insert(
            "minorGridLineColor".to_owned(),
            color_value(self.minor_grid_line_color.as_ref()),
        );
        out.insert(
            "minorGridLineDashStyle".to_owned(),
            dash_value(self.minor_grid_line_dash_style),
        );
        out.insert(
            "minorGridLineWidth".to_owned(),
            num_value(self.minor_grid_line_width),
        );
        out.insert(
            "minorTickColor".to_owned(),
            color_value(self.minor_tick_color.as_ref()),
        );
        out.insert(
            "minorTickInterval".to_owned(),
            num_value(self.minor_tick_interval),
        );
        out.insert(
            "minorTickLength".to_owned(),
            num_value(self.minor_tick_length),
        );
        out.insert(
            "minorTickPosition".to_owned(),
            str_value(self.minor_tick_position.as_deref()),
        );
        out.insert(
            "minorTickWidth".to_owned(),
            num_value(self.minor_tick_width),
        );
        out.insert("minorTicks".to_owned(), bool_value(self.minor_ticks));
        out.insert(
            "panningEnabled".to_owned(),
            bool_value(self.panning_enabled),
        );
        out.insert("reversed".to_owned(), bool_value(self.reversed));
        out.insert(
            "showFirstLabel".to_owned(),
            bool_value(self.show_first_label),
        );
        out.insert("showLastLabel".to_owned(), bool_value(self.show_last_label));
        out.insert("softMax".to_owned(), num_value(self.soft_max));
        out.insert("softMin".to_owned(), num_value(self.soft_min));
        out.insert("startOfWeek".to_owned(), int_value(self.start_of_week));
        out.insert("startOnTick".to_owned(), bool_value(self.start_on_tick));
        out.insert("tickAmount".to_owned(), int_value(self.tick_amount));
        out.insert("tickColor".to_owned(), color_value(self.tick_color.as_ref()));
        out.insert("tickInterval".to_owned(), num_value(self.tick_interval));
        out.insert("tickLength".to_owned(), num_value(self.tick_length));
        out.insert(
            "tickPixelInterval".to_owned(),
            num_value(self.tick_pixel_interval),
        );
        out.insert(
            "tickPosition".to_owned(),
            str_value(self.tick_position.as_deref()),
        );
        out.insert("tickWidth".to_owned(), num_value(self.tick_width));
        out.insert(
            "tickmarkPlacement".to_owned(),
            str_value(self.tickmark_placement.as_deref()),
        );
        out.insert("uniqueNames".to_owned(), bool_value(self.unique_names));
        out.insert("visible".to_owned(), bool_value(self.visible));
        out.insert("zIndex".to_owned(), num_value(self.z_index));
    }
}
