//! The bar family: column-like series rendered as rectangles.
//!
//! `BaseBarOptions` carries the attributes shared by every rectangular
//! series; `BarOptions` adds the 3D and edge controls, and the leaves
//! below it add nothing or very little on top.

use serde_json::Value;

use crate::error::OptionsResult;
use crate::plot_options::series::SeriesOptions;
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, node_value, resolve_node,
    validators,
    wire::{bool_value, init_value, num_value, str_value},
};
use crate::utility::{ColorInput, color_value, colors_value, resolve_colors};

const BASE_BAR_KEYS: &[WireKey] = &[
    key("border_color", "borderColor"),
    key("border_radius", "borderRadius"),
    key("border_width", "borderWidth"),
    key("center_in_category", "centerInCategory"),
    key("color_by_point", "colorByPoint"),
    key("colors", "colors"),
    key("grouping", "grouping"),
    key("group_padding", "groupPadding"),
    key("max_point_width", "maxPointWidth"),
    key("min_point_length", "minPointLength"),
    key("point_padding", "pointPadding"),
    key("point_range", "pointRange"),
    key("point_width", "pointWidth"),
];

/// Attributes shared by every rectangular (column-like) series type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseBarOptions {
    base: SeriesOptions,
    border_color: Option<ColorInput>,
    border_radius: Option<f64>,
    border_width: Option<f64>,
    center_in_category: Option<bool>,
    color_by_point: Option<bool>,
    colors: Option<Vec<ColorInput>>,
    grouping: Option<bool>,
    group_padding: Option<f64>,
    max_point_width: Option<f64>,
    min_point_length: Option<f64>,
    point_padding: Option<f64>,
    point_range: Option<f64>,
    point_width: Option<f64>,
}

impl BaseBarOptions {
    /// Inherited `SeriesOptions` attribute level.
    pub fn base(&self) -> &SeriesOptions {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut SeriesOptions {
        &mut self.base
    }

    pub fn border_color(&self) -> Option<&ColorInput> {
        self.border_color.as_ref()
    }

    pub fn border_radius(&self) -> Option<f64> {
        self.border_radius
    }

    pub fn border_width(&self) -> Option<f64> {
        self.border_width
    }

    pub fn center_in_category(&self) -> Option<bool> {
        self.center_in_category
    }

    pub fn color_by_point(&self) -> Option<bool> {
        self.color_by_point
    }

    pub fn colors(&self) -> Option<&[ColorInput]> {
        self.colors.as_deref()
    }

    pub fn grouping(&self) -> Option<bool> {
        self.grouping
    }

    pub fn group_padding(&self) -> Option<f64> {
        self.group_padding
    }

    pub fn max_point_width(&self) -> Option<f64> {
        self.max_point_width
    }

    pub fn min_point_length(&self) -> Option<f64> {
        self.min_point_length
    }

    pub fn point_padding(&self) -> Option<f64> {
        self.point_padding
    }

    pub fn point_range(&self) -> Option<f64> {
        self.point_range
    }

    pub fn point_width(&self) -> Option<f64> {
        self.point_width
    }

    pub fn set_border_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.border_color = ColorInput::resolve("border_color", value)?;
        Ok(())
    }

    pub fn set_border_radius(&mut self, value: &Value) -> OptionsResult<()> {
        self.border_radius = validators::numeric("border_radius", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_border_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.border_width = validators::numeric("border_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_center_in_category(&mut self, value: &Value) -> OptionsResult<()> {
        self.center_in_category = validators::boolean("center_in_category", value)?;
        Ok(())
    }

    pub fn set_color_by_point(&mut self, value: &Value) -> OptionsResult<()> {
        self.color_by_point = validators::boolean("color_by_point", value)?;
        Ok(())
    }

    /// A per-point color cycle. Each entry goes through the full polymorphic
    /// color resolution, and a single bare color is wrapped into a
    /// one-element cycle (force-iterable).
    pub fn set_colors(&mut self, value: &Value) -> OptionsResult<()> {
        self.colors = resolve_colors("colors", value)?;
        Ok(())
    }

    pub fn set_grouping(&mut self, value: &Value) -> OptionsResult<()> {
        self.grouping = validators::boolean("grouping", value)?;
        Ok(())
    }

    pub fn set_group_padding(&mut self, value: &Value) -> OptionsResult<()> {
        self.group_padding = validators::numeric("group_padding", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_max_point_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.max_point_width = validators::numeric("max_point_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_min_point_length(&mut self, value: &Value) -> OptionsResult<()> {
        self.min_point_length = validators::numeric("min_point_length", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_point_padding(&mut self, value: &Value) -> OptionsResult<()> {
        self.point_padding = validators::numeric("point_padding", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_point_range(&mut self, value: &Value) -> OptionsResult<()> {
        self.point_range = validators::numeric("point_range", value, None)?;
        Ok(())
    }

    pub fn set_point_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.point_width = validators::numeric("point_width", value, Some(0.0))?;
        Ok(())
    }
}

impl SchemaNode for BaseBarOptions {
    fn wire_keys() -> WireKeyTable {
        let mut keys = SeriesOptions::wire_keys();
        keys.extend_from_slice(BASE_BAR_KEYS);
        keys
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.base.apply(init)?;
        self.set_border_color(init_value(init, "border_color"))?;
        self.set_border_radius(init_value(init, "border_radius"))?;
        self.set_border_width(init_value(init, "border_width"))?;
        self.set_center_in_category(init_value(init, "center_in_category"))?;
        self.set_color_by_point(init_value(init, "color_by_point"))?;
        self.set_colors(init_value(init, "colors"))?;
        self.set_grouping(init_value(init, "grouping"))?;
        self.set_group_padding(init_value(init, "group_padding"))?;
        self.set_max_point_width(init_value(init, "max_point_width"))?;
        self.set_min_point_length(init_value(init, "min_point_length"))?;
        self.set_point_padding(init_value(init, "point_padding"))?;
        self.set_point_range(init_value(init, "point_range"))?;
        self.set_point_width(init_value(init, "point_width"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert(
            "borderColor".to_owned(),
            color_value(self.border_color.as_ref()),
        );
        out.insert("borderRadius".to_owned(), num_value(self.border_radius));
        out.insert("borderWidth".to_owned(), num_value(self.border_width));
        out.insert(
            "centerInCategory".to_owned(),
            bool_value(self.center_in_category),
        );
        out.insert("colorByPoint".to_owned(), bool_value(self.color_by_point));
        out.insert("colors".to_owned(), colors_value(self.colors.as_deref()));
        out.insert("grouping".to_owned(), bool_value(self.grouping));
        out.insert("groupPadding".to_owned(), num_value(self.group_padding));
        out.insert("maxPointWidth".to_owned(), num_value(self.max_point_width));
        out.insert("minPointLength".to_owned(), num_value(self.min_point_length));
        out.insert("pointPadding".to_owned(), num_value(self.point_padding));
        out.insert("pointRange".to_owned(), num_value(self.point_range));
        out.insert("pointWidth".to_owned(), num_value(self.point_width));
        self.base.emit(out);
    }
}

const BAR_KEYS: &[WireKey] = &[
    key("depth", "depth"),
    key("edge_color", "edgeColor"),
    key("edge_width", "edgeWidth"),
    key("group_z_padding", "groupZPadding"),
];

/// Options for bar and column series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarOptions {
    base: BaseBarOptions,
    depth: Option<f64>,
    edge_color: Option<String>,
    edge_width: Option<f64>,
    group_z_padding: Option<f64>,
}

impl BarOptions {
    /// Inherited `BaseBarOptions` attribute level.
    pub fn base(&self) -> &BaseBarOptions {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseBarOptions {
        &mut self.base
    }

    pub fn depth(&self) -> Option<f64> {
        self.depth
    }

    pub fn edge_color(&self) -> Option<&str> {
        self.edge_color.as_deref()
    }

    pub fn edge_width(&self) -> Option<f64> {
        self.edge_width
    }

    pub fn group_z_padding(&self) -> Option<f64> {
        self.group_z_padding
    }

    pub fn set_depth(&mut self, value: &Value) -> OptionsResult<()> {
        self.depth = validators::numeric("depth", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_edge_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.edge_color = validators::string("edge_color", value)?;
        Ok(())
    }

    pub fn set_edge_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.edge_width = validators::numeric("edge_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_group_z_padding(&mut self, value: &Value) -> OptionsResult<()> {
        self.group_z_padding = validators::numeric("group_z_padding", value, Some(0.0))?;
        Ok(())
    }
}

impl SchemaNode for BarOptions {
    fn wire_keys() -> WireKeyTable {
        let mut keys = BaseBarOptions::wire_keys();
        keys.extend_from_slice(BAR_KEYS);
        keys
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.base.apply(init)?;
        self.set_depth(init_value(init, "depth"))?;
        self.set_edge_color(init_value(init, "edge_color"))?;
        self.set_edge_width(init_value(init, "edge_width"))?;
        self.set_group_z_padding(init_value(init, "group_z_padding"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("depth".to_owned(), num_value(self.depth));
        out.insert("edgeColor".to_owned(), str_value(self.edge_color.as_deref()));
        out.insert("edgeWidth".to_owned(), num_value(self.edge_width));
        out.insert("groupZPadding".to_owned(), num_value(self.group_z_padding));
        self.base.emit(out);
    }
}

macro_rules! leaf_options {
    ($(#[$doc:meta])* $name:ident, $parent:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            base: $parent,
        }

        impl $name {
            pub fn base(&self) -> &$parent {
                &self.base
            }

            pub fn base_mut(&mut self) -> &mut $parent {
                &mut self.base
            }
        }

        impl SchemaNode for $name {
            fn wire_keys() -> WireKeyTable {
                <$parent>::wire_keys()
            }

            fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
                self.base.apply(init)
            }

            fn emit(&self, out: &mut WireMap) {
                self.base.emit(out);
            }
        }
    };
}

pub(crate) use leaf_options;

leaf_options! {
    /// Options for column series. Identical in shape to [`BarOptions`].
    ColumnOptions, BarOptions
}

leaf_options! {
    /// Options for column pyramid series.
    ColumnPyramidOptions, BarOptions
}

leaf_options! {
    /// Options for column range series.
    ColumnRangeOptions, BarOptions
}

leaf_options! {
    /// Options for cylinder series.
    CylinderOptions, BarOptions
}

leaf_options! {
    /// Options for variwide series, where each point also carries a width.
    VariwideOptions, BaseBarOptions
}

const WATERFALL_KEYS: &[WireKey] = &[
    key("line_color", "lineColor"),
    key("up_color", "upColor"),
];

/// Options for waterfall series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaterfallOptions {
    base: BarOptions,
    line_color: Option<ColorInput>,
    up_color: Option<ColorInput>,
}

impl WaterfallOptions {
    pub fn base(&self) -> &BarOptions {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BarOptions {
        &mut self.base
    }

    pub fn line_color(&self) -> Option<&ColorInput> {
        self.line_color.as_ref()
    }

    pub fn up_color(&self) -> Option<&ColorInput> {
        self.up_color.as_ref()
    }

    pub fn set_line_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.line_color = ColorInput::resolve("line_color", value)?;
        Ok(())
    }

    pub fn set_up_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.up_color = ColorInput::resolve("up_color", value)?;
        Ok(())
    }
}

impl SchemaNode for WaterfallOptions {
    fn wire_keys() -> WireKeyTable {
        let mut keys = BarOptions::wire_keys();
        keys.extend_from_slice(WATERFALL_KEYS);
        keys
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.base.apply(init)?;
        self.set_line_color(init_value(init, "line_color"))?;
        self.set_up_color(init_value(init, "up_color"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("lineColor".to_owned(), color_value(self.line_color.as_ref()));
        out.insert("upColor".to_owned(), color_value(self.up_color.as_ref()));
        self.base.emit(out);
    }
}

const PARTIAL_FILL_KEYS: &[WireKey] = &[key("fill", "fill")];

/// Partial fill of an x-range point, shading the completed amount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialFillOptions {
    fill: Option<ColorInput>,
}

impl PartialFillOptions {
    pub fn fill(&self) -> Option<&ColorInput> {
        self.fill.as_ref()
    }

    pub fn set_fill(&mut self, value: &Value) -> OptionsResult<()> {
        self.fill = ColorInput::resolve("fill", value)?;
        Ok(())
    }
}

impl SchemaNode for PartialFillOptions {
    fn wire_keys() -> WireKeyTable {
        PARTIAL_FILL_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_fill(init_value(init, "fill"))
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("fill".to_owned(), color_value(self.fill.as_ref()));
    }
}

const X_RANGE_KEYS: &[WireKey] = &[
    key("group_z_padding", "groupZPadding"),
    key("partial_fill", "partialFill"),
];

/// Options for x-range series, where each point spans an interval on the
/// x axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XRangeOptions {
    base: BaseBarOptions,
    group_z_padding: Option<f64>,
    partial_fill: Option<PartialFillOptions>,
}

impl XRangeOptions {
    pub fn base(&self) -> &BaseBarOptions {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseBarOptions {
        &mut self.base
    }

    pub fn group_z_padding(&self) -> Option<f64> {
        self.group_z_padding
    }

    pub fn partial_fill(&self) -> Option<&PartialFillOptions> {
        self.partial_fill.as_ref()
    }

    pub fn set_group_z_padding(&mut self, value: &Value) -> OptionsResult<()> {
        self.group_z_padding = validators::numeric("group_z_padding", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_partial_fill(&mut self, value: &Value) -> OptionsResult<()> {
        self.partial_fill = resolve_node("partial_fill", value)?;
        Ok(())
    }
}

impl SchemaNode for XRangeOptions {
    fn wire_keys() -> WireKeyTable {
        let mut keys = BaseBarOptions::wire_keys();
        keys.extend_from_slice(X_RANGE_KEYS);
        keys
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.base.apply(init)?;
        self.set_group_z_padding(init_value(init, "group_z_padding"))?;
        self.set_partial_fill(init_value(init, "partial_fill"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("groupZPadding".to_owned(), num_value(self.group_z_padding));
        out.insert(
            "partialFill".to_owned(),
            node_value(self.partial_fill.as_ref()),
        );
        self.base.emit(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_nulls_but_keeps_false() {
        let bar = BarOptions::from_wire(
            json!({
                "pointPadding": 0.1,
                "borderWidth": null,
                "colorByPoint": false
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();
        let wire = bar.to_wire();
        assert_eq!(wire.get("pointPadding"), Some(&json!(0.1)));
        assert_eq!(wire.get("colorByPoint"), Some(&json!(false)));
        assert!(!wire.contains_key("borderWidth"));
    }

    #[test]
    fn negative_padding_is_rejected() {
        let mut bar = BarOptions::default();
        assert!(bar.base_mut().set_point_padding(&json!(-0.2)).is_err());
        assert_eq!(bar.base().point_padding(), None);
    }

    #[test]
    fn single_color_wraps_into_cycle() {
        let mut bar = BaseBarOptions::default();
        bar.set_colors(&json!("#ff0000")).unwrap();
        assert_eq!(bar.colors().map(<[_]>::len), Some(1));
    }

    #[test]
    fn x_range_nests_partial_fill() {
        let xr = XRangeOptions::from_wire(
            json!({"partialFill": {"fill": "#cccccc"}}).as_object().unwrap(),
        )
        .unwrap();
        let wire = xr.to_wire();
        assert_eq!(wire.get("partialFill"), Some(&json!({"fill": "#cccccc"})));
    }
}
