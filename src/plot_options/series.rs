//! Series-wide attribute level extending `GenericTypeOptions`.

use serde_json::Value;

use crate::error::OptionsResult;
use crate::plot_options::generic::GenericTypeOptions;
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, validators,
    wire::{bool_value, init_value, int_value, num_value, str_value},
};
use crate::utility::{ColorInput, color_value};

const FIND_NEAREST_POINT_MODES: &[&str] = &["x", "xy"];
const LINECAPS: &[&str] = &["butt", "round", "square"];
const POINT_INTERVAL_UNITS: &[&str] = &["day", "month", "year"];
const STACKINGS: &[&str] = &["normal", "overlap", "percent", "stream"];
const STEPS: &[&str] = &["left", "center", "right"];

const SERIES_KEYS: &[WireKey] = &[
    key("animation_limit", "animationLimit"),
    key("boost_blending", "boostBlending"),
    key("boost_threshold", "boostThreshold"),
    key("color_axis", "colorAxis"),
    key("color_index", "colorIndex"),
    key("color_key", "colorKey"),
    key("connect_ends", "connectEnds"),
    key("connect_nulls", "connectNulls"),
    key("crisp", "crisp"),
    key("crop_threshold", "cropThreshold"),
    key("find_nearest_point_by", "findNearestPointBy"),
    key("get_extremes_for_all", "getExtremesForAll"),
    key("linecap", "linecap"),
    key("line_width", "lineWidth"),
    key("negative_color", "negativeColor"),
    key("point_interval", "pointInterval"),
    key("point_interval_unit", "pointIntervalUnit"),
    key("point_placement", "pointPlacement"),
    key("point_start", "pointStart"),
    key("relative_x_value", "relativeXValue"),
    key("shadow", "shadow"),
    key("soft_threshold", "softThreshold"),
    key("stacking", "stacking"),
    key("step", "step"),
    key("zone_axis", "zoneAxis"),
];

/// General options that apply to multiple series types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesOptions {
    base: GenericTypeOptions,
    animation_limit: Option<f64>,
    boost_blending: Option<String>,
    boost_threshold: Option<i64>,
    color_axis: Option<String>,
    color_index: Option<i64>,
    color_key: Option<String>,
    connect_ends: Option<bool>,
    connect_nulls: Option<bool>,
    crisp: Option<bool>,
    crop_threshold: Option<i64>,
    find_nearest_point_by: Option<String>,
    get_extremes_for_all: Option<bool>,
    linecap: Option<String>,
    line_width: Option<f64>,
    negative_color: Option<ColorInput>,
    point_interval: Option<f64>,
    point_interval_unit: Option<String>,
    point_placement: Option<String>,
    point_start: Option<f64>,
    relative_x_value: Option<bool>,
    shadow: Option<bool>,
    soft_threshold: Option<bool>,
    stacking: Option<String>,
    step: Option<String>,
    zone_axis: Option<String>,
}

impl SeriesOptions {
    /// Inherited `GenericTypeOptions` attribute level.
    pub fn base(&self) -> &GenericTypeOptions {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut GenericTypeOptions {
        &mut self.base
    }

    pub fn animation_limit(&self) -> Option<f64> {
        self.animation_limit
    }

    pub fn boost_blending(&self) -> Option<&str> {
        self.boost_blending.as_deref()
    }

    pub fn boost_threshold(&self) -> Option<i64> {
        self.boost_threshold
    }

    pub fn color_axis(&self) -> Option<&str> {
        self.color_axis.as_deref()
    }

    pub fn color_index(&self) -> Option<i64> {
        self.color_index
    }

    pub fn color_key(&self) -> Option<&str> {
        self.color_key.as_deref()
    }

    pub fn connect_ends(&self) -> Option<bool> {
        self.connect_ends
    }

    pub fn connect_nulls(&self) -> Option<bool> {
        self.connect_nulls
    }

    pub fn crisp(&self) -> Option<bool> {
        self.crisp
    }

    pub fn crop_threshold(&self) -> Option<i64> {
        self.crop_threshold
    }

    pub fn find_nearest_point_by(&self) -> Option<&str> {
        self.find_nearest_point_by.as_deref()
    }

    pub fn get_extremes_for_all(&self) -> Option<bool> {
        self.get_extremes_for_all
    }

    pub fn linecap(&self) -> Option<&str> {
        self.linecap.as_deref()
    }

    pub fn line_width(&self) -> Option<f64> {
        self.line_width
    }

    pub fn negative_color(&self) -> Option<&ColorInput> {
        self.negative_color.as_ref()
    }

    pub fn point_interval(&self) -> Option<f64> {
        self.point_interval
    }

    pub fn point_interval_unit(&self) -> Option<&str> {
        self.point_interval_unit.as_deref()
    }

    pub fn point_placement(&self) -> Option<&str> {
        self.point_placement.as_deref()
    }

    pub fn point_start(&self) -> Option<f64> {
        self.point_start
    }

    pub fn relative_x_value(&self) -> Option<bool> {
        self.relative_x_value
    }

    pub fn shadow(&self) -> Option<bool> {
        self.shadow
    }

    pub fn soft_threshold(&self) -> Option<bool> {
        self.soft_threshold
    }

    pub fn stacking(&self) -> Option<&str> {
        self.stacking.as_deref()
    }

    pub fn step(&self) -> Option<&str> {
        self.step.as_deref()
    }

    pub fn zone_axis(&self) -> Option<&str> {
        self.zone_axis.as_deref()
    }

    pub fn set_animation_limit(&mut self, value: &Value) -> OptionsResult<()> {
        self.animation_limit = validators::numeric("animation_limit", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_boost_blending(&mut self, value: &Value) -> OptionsResult<()> {
        self.boost_blending = validators::string("boost_blending", value)?;
        Ok(())
    }

    pub fn set_boost_threshold(&mut self, value: &Value) -> OptionsResult<()> {
        self.boost_threshold = validators::integer("boost_threshold", value, Some(0))?;
        Ok(())
    }

    pub fn set_color_axis(&mut self, value: &Value) -> OptionsResult<()> {
        self.color_axis = validators::string("color_axis", value)?;
        Ok(())
    }

    pub fn set_color_index(&mut self, value: &Value) -> OptionsResult<()> {
        self.color_index = validators::integer("color_index", value, Some(0))?;
        Ok(())
    }

    pub fn set_color_key(&mut self, value: &Value) -> OptionsResult<()> {
        self.color_key = validators::string("color_key", value)?;
        Ok(())
    }

    pub fn set_connect_ends(&mut self, value: &Value) -> OptionsResult<()> {
        self.connect_ends = validators::boolean("connect_ends", value)?;
        Ok(())
    }

    pub fn set_connect_nulls(&mut self, value: &Value) -> OptionsResult<()> {
        self.connect_nulls = validators::boolean("connect_nulls", value)?;
        Ok(())
    }

    pub fn set_crisp(&mut self, value: &Value) -> OptionsResult<()> {
        self.crisp = validators::boolean("crisp", value)?;
        Ok(())
    }

    pub fn set_crop_threshold(&mut self, value: &Value) -> OptionsResult<()> {
        self.crop_threshold = validators::integer("crop_threshold", value, Some(0))?;
        Ok(())
    }

    pub fn set_find_nearest_point_by(&mut self, value: &Value) -> OptionsResult<()> {
        self.find_nearest_point_by =
            validators::member("find_nearest_point_by", value, FIND_NEAREST_POINT_MODES)?;
        Ok(())
    }

    pub fn set_get_extremes_for_all(&mut self, value: &Value) -> OptionsResult<()> {
        self.get_extremes_for_all = validators::boolean("get_extremes_for_all", value)?;
        Ok(())
    }

    pub fn set_linecap(&mut self, value: &Value) -> OptionsResult<()> {
        self.linecap = validators::member("linecap", value, LINECAPS)?;
        Ok(())
    }

    pub fn set_line_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.line_width = validators::numeric("line_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_negative_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.negative_color = ColorInput::resolve("negative_color", value)?;
        Ok(())
    }

    pub fn set_point_interval(&mut self, value: &Value) -> OptionsResult<()> {
        self.point_interval = validators::numeric("point_interval", value, None)?;
        Ok(())
    }

    pub fn set_point_interval_unit(&mut self, value: &Value) -> OptionsResult<()> {
        self.point_interval_unit =
            validators::member("point_interval_unit", value, POINT_INTERVAL_UNITS)?;
        Ok(())
    }

    pub fn set_point_placement(&mut self, value: &Value) -> OptionsResult<()> {
        self.point_placement = validators::string("point_placement", value)?;
        Ok(())
    }

    pub fn set_point_start(&mut self, value: &Value) -> OptionsResult<()> {
        self.point_start = validators::numeric("point_start", value, None)?;
        Ok(())
    }

    pub fn set_relative_x_value(&mut self, value: &Value) -> OptionsResult<()> {
        self.relative_x_value = validators::boolean("relative_x_value", value)?;
        Ok(())
    }

    pub fn set_shadow(&mut self, value: &Value) -> OptionsResult<()> {
        self.shadow = validators::boolean("shadow", value)?;
        Ok(())
    }

    pub fn set_soft_threshold(&mut self, value: &Value) -> OptionsResult<()> {
        self.soft_threshold = validators::boolean("soft_threshold", value)?;
        Ok(())
    }

    pub fn set_stacking(&mut self, value: &Value) -> OptionsResult<()> {
        self.stacking = validators::member("stacking", value, STACKINGS)?;
        Ok(())
    }

    pub fn set_step(&mut self, value: &Value) -> OptionsResult<()> {
        self.step = validators::member("step", value, STEPS)?;
        Ok(())
    }

    pub fn set_zone_axis(&mut self, value: &Value) -> OptionsResult<()> {
        self.zone_axis = validators::string("zone_axis", value)?;
        Ok(())
    }
}

impl SchemaNode for SeriesOptions {
    fn wire_keys() -> WireKeyTable {
        let mut keys = GenericTypeOptions::wire_keys();
        keys.extend_from_slice(SERIES_KEYS);
        keys
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.base.apply(init)?;
        self.set_animation_limit(init_value(init, "animation_limit"))?;
        self.set_boost_blending(init_value(init, "boost_blending"))?;
        self.set_boost_threshold(init_value(init, "boost_threshold"))?;
        self.set_color_axis(init_value(init, "color_axis"))?;
        self.set_color_index(init_value(init, "color_index"))?;
        self.set_color_key(init_value(init, "color_key"))?;
        self.set_connect_ends(init_value(init, "connect_ends"))?;
        self.set_connect_nulls(init_value(init, "connect_nulls"))?;
        self.set_crisp(init_value(init, "crisp"))?;
        self.set_crop_threshold(init_value(init, "crop_threshold"))?;
        self.set_find_nearest_point_by(init_value(init, "find_nearest_point_by"))?;
        self.set_get_extremes_for_all(init_value(init, "get_extremes_for_all"))?;
        self.set_linecap(init_value(init, "linecap"))?;
        self.set_line_width(init_value(init, "line_width"))?;
        self.set_negative_color(init_value(init, "negative_color"))?;
        self.set_point_interval(init_value(init, "point_interval"))?;
        self.set_point_interval_unit(init_value(init, "point_interval_unit"))?;
        self.set_point_placement(init_value(init, "point_placement"))?;
        self.set_point_start(init_value(init, "point_start"))?;
        self.set_relative_x_value(init_value(init, "relative_x_value"))?;
        self.set_shadow(init_value(init, "shadow"))?;
        self.set_soft_threshold(init_value(init, "soft_threshold"))?;
        self.set_stacking(init_value(init, "stacking"))?;
        self.set_step(init_value(init, "step"))?;
        self.set_zone_axis(init_value(init, "zone_axis"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("animationLimit".to_owned(), num_value(self.animation_limit));
        out.insert(
            "boostBlending".to_owned(),
            str_value(self.boost_blending.as_deref()),
        );
        out.insert("boostThreshold".to_owned(), int_value(self.boost_threshold));
        out.insert("colorAxis".to_owned(), str_value(self.color_axis.as_deref()));
        out.insert("colorIndex".to_owned(), int_value(self.color_index));
        out.insert("colorKey".to_owned(), str_value(self.color_key.as_deref()));
        out.insert("connectEnds".to_owned(), bool_value(self.connect_ends));
        out.insert("connectNulls".to_owned(), bool_value(self.connect_nulls));
        out.insert("crisp".to_owned(), bool_value(self.crisp));
        out.insert("cropThreshold".to_owned(), int_value(self.crop_threshold));
        out.insert(
            "findNearestPointBy".to_owned(),
            str_value(self.find_nearest_point_by.as_deref()),
        );
        out.insert(
            "getExtremesForAll".to_owned(),
            bool_value(self.get_extremes_for_all),
        );
        out.insert("linecap".to_owned(), str_value(self.linecap.as_deref()));
        out.insert("lineWidth".to_owned(), num_value(self.line_width));
        out.insert(
            "negativeColor".to_owned(),
            color_value(self.negative_color.as_ref()),
        );
        out.insert("pointInterval".to_owned(), num_value(self.point_interval));
        out.insert(
            "pointIntervalUnit".to_owned(),
            str_value(self.point_interval_unit.as_deref()),
        );
        out.insert(
            "pointPlacement".to_owned(),
            str_value(self.point_placement.as_deref()),
        );
        out.insert("pointStart".to_owned(), num_value(self.point_start));
        out.insert("relativeXValue".to_owned(), bool_value(self.relative_x_value));
        out.insert("shadow".to_owned(), bool_value(self.shadow));
        out.insert("softThreshold".to_owned(), bool_value(self.soft_threshold));
        out.insert("stacking".to_owned(), str_value(self.stacking.as_deref()));
        out.insert("step".to_owned(), str_value(self.step.as_deref()));
        out.insert("zoneAxis".to_owned(), str_value(self.zone_axis.as_deref()));
        self.base.emit(out);
    }
}
