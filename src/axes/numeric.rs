//! Numeric axis: the `GenericAxis` level plus numeric-domain additions.

use serde_json::Value;

use crate::axes::breaks::AxisBreak;
use crate::axes::generic::GenericAxis;
use crate::axes::plot_bands::{PlotBand, PlotLine};
use crate::axes::title::AxisTitle;
use crate::error::OptionsResult;
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, node_value, nodes_value,
    resolve_node, resolve_nodes, validators,
    wire::{bool_value, init_value, int_value, num_value, strings_value},
};
use crate::utility::{ColorInput, color_value};

const NUMERIC_AXIS_KEYS: &[WireKey] = &[
    key("align_ticks", "alignTicks"),
    key("allow_decimals", "allowDecimals"),
    key("alternate_grid_color", "alternateGridColor"),
    key("breaks", "breaks"),
    key("categories", "categories"),
    key("linked_to", "linkedTo"),
    key("min_range", "minRange"),
    key("min_tick_interval", "minTickInterval"),
    key("offset", "offset"),
    key("opposite", "opposite"),
    key("pane", "pane"),
    // Some historical payloads carry the misspelled key `plotPands`; the
    // renderer's documented key is `plotBands` and that is what this crate
    // speaks, in both directions.
    key("plot_bands", "plotBands"),
    key("plot_lines", "plotLines"),
    key("reversed_stacks", "reversedStacks"),
    key("title", "title"),
    key("zoom_enabled", "zoomEnabled"),
];

/// Base class used for defining numeric axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericAxis {
    base: GenericAxis,
    align_ticks: Option<bool>,
    allow_decimals: Option<bool>,
    alternate_grid_color: Option<ColorInput>,
    breaks: Option<Vec<AxisBreak>>,
    categories: Option<Vec<String>>,
    linked_to: Option<i64>,
    min_range: Option<f64>,
    min_tick_interval: Option<f64>,
    offset: Option<f64>,
    opposite: Option<bool>,
    pane: Option<i64>,
    plot_bands: Option<Vec<PlotBand>>,
    plot_lines: Option<Vec<PlotLine>>,
    reversed_stacks: Option<bool>,
    title: Option<AxisTitle>,
    zoom_enabled: Option<bool>,
}

impl NumericAxis {
    /// Inherited `GenericAxis` attribute level.
    pub fn base(&self) -> &GenericAxis {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut GenericAxis {
        &mut self.base
    }

    pub fn align_ticks(&self) -> Option<bool> {
        self.align_ticks
    }

    pub fn allow_decimals(&self) -> Option<bool> {
        self.allow_decimals
    }

    pub fn alternate_grid_color(&self) -> Option<&ColorInput> {
        self.alternate_grid_color.as_ref()
    }

    pub fn breaks(&self) -> Option<&[AxisBreak]> {
        self.breaks.as_deref()
    }

    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    pub fn linked_to(&self) -> Option<i64> {
        self.linked_to
    }

    pub fn min_range(&self) -> Option<f64> {
        self.min_range
    }

    pub fn min_tick_interval(&self) -> Option<f64> {
        self.min_tick_interval
    }

    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    pub fn opposite(&self) -> Option<bool> {
        self.opposite
    }

    pub fn pane(&self) -> Option<i64> {
        self.pane
    }

    pub fn plot_bands(&self) -> Option<&[PlotBand]> {
        self.plot_bands.as_deref()
    }

    pub fn plot_lines(&self) -> Option<&[PlotLine]> {
        self.plot_lines.as_deref()
    }

    pub fn reversed_stacks(&self) -> Option<bool> {
        self.reversed_stacks
    }

    pub fn title(&self) -> Option<&AxisTitle> {
        self.title.as_ref()
    }

    pub fn zoom_enabled(&self) -> Option<bool> {
        self.zoom_enabled
    }

    pub fn set_align_ticks(&mut self, value: &Value) -> OptionsResult<()> {
        self.align_ticks = validators::boolean("align_ticks", value)?;
        Ok(())
    }

    pub fn set_allow_decimals(&mut self, value: &Value) -> OptionsResult<()> {
        self.allow_decimals = validators::boolean("allow_decimals", value)?;
        Ok(())
    }

    pub fn set_alternate_grid_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.alternate_grid_color = ColorInput::resolve("alternate_grid_color", value)?;
        Ok(())
    }

    /// Accepts a sequence of break mappings, or a single bare mapping
    /// (force-iterable).
    pub fn set_breaks(&mut self, value: &Value) -> OptionsResult<()> {
        self.breaks = resolve_nodes("breaks", value)?;
        Ok(())
    }

    pub fn set_categories(&mut self, value: &Value) -> OptionsResult<()> {
        self.categories = validators::strings("categories", value)?;
        Ok(())
    }

    pub fn set_linked_to(&mut self, value: &Value) -> OptionsResult<()> {
        self.linked_to = validators::integer("linked_to", value, Some(0))?;
        Ok(())
    }

    pub fn set_min_range(&mut self, value: &Value) -> OptionsResult<()> {
        self.min_range = validators::numeric("min_range", value, None)?;
        Ok(())
    }

    pub fn set_min_tick_interval(&mut self, value: &Value) -> OptionsResult<()> {
        self.min_tick_interval = validators::numeric("min_tick_interval", value, None)?;
        Ok(())
    }

    pub fn set_offset(&mut self, value: &Value) -> OptionsResult<()> {
        self.offset = validators::numeric("offset", value, None)?;
        Ok(())
    }

    pub fn set_opposite(&mut self, value: &Value) -> OptionsResult<()> {
        self.opposite = validators::boolean("opposite", value)?;
        Ok(())
    }

    pub fn set_pane(&mut self, value: &Value) -> OptionsResult<()> {
        self.pane = validators::integer("pane", value, Some(0))?;
        Ok(())
    }

    /// Accepts a sequence of plot-band mappings, or a single bare mapping
    /// (force-iterable).
    pub fn set_plot_bands(&mut self, value: &Value) -> OptionsResult<()> {
        self.plot_bands = resolve_nodes("plot_bands", value)?;
        Ok(())
    }

    pub fn set_plot_lines(&mut self, value: &Value) -> OptionsResult<()> {
        self.plot_lines = resolve_nodes("plot_lines", value)?;
        Ok(())
    }

    pub fn set_reversed_stacks(&mut self, value: &Value) -> OptionsResult<()> {
        self.reversed_stacks = validators::boolean("reversed_stacks", value)?;
        Ok(())
    }

    pub fn set_title(&mut self, value: &Value) -> OptionsResult<()> {
        self.title = resolve_node("title", value)?;
        Ok(())
    }

    pub fn set_zoom_enabled(&mut self, value: &Value) -> OptionsResult<()> {
        self.zoom_enabled = validators::boolean("zoom_enabled", value)?;
        Ok(())
    }
}

impl SchemaNode for NumericAxis {
    fn wire_keys() -> WireKeyTable {
        let mut keys = GenericAxis::wire_keys();
        keys.extend_from_slice(NUMERIC_AXIS_KEYS);
        keys
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.base.apply(init)?;
        self.set_align_ticks(init_value(init, "align_ticks"))?;
        self.set_allow_decimals(init_value(init, "allow_decimals"))?;
        self.set_alternate_grid_color(init_value(init, "alternate_grid_color"))?;
        self.set_breaks(init_value(init, "breaks"))?;
        self.set_categories(init_value(init, "categories"))?;
        self.set_linked_to(init_value(init, "linked_to"))?;
        self.set_min_range(init_value(init, "min_range"))?;
        self.set_min_tick_interval(init_value(init, "min_tick_interval"))?;
        self.set_offset(init_value(init, "offset"))?;
        self.set_opposite(init_value(init, "opposite"))?;
        self.set_pane(init_value(init, "pane"))?;
        self.set_plot_bands(init_value(init, "plot_bands"))?;
        self.set_plot_lines(init_value(init, "plot_lines"))?;
        self.set_reversed_stacks(init_value(init, "reversed_stacks"))?;
        self.set_title(init_value(init, "title"))?;
        self.set_zoom_enabled(init_value(init, "zoom_enabled"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("alignTicks".to_owned(), bool_value(self.align_ticks));
        out.insert("allowDecimals".to_owned(), bool_value(self.allow_decimals));
        out.insert(
            "alternateGridColor".to_owned(),
            color_value(self.alternate_grid_color.as_ref()),
        );
        out.insert("breaks".to_owned(), nodes_value(self.breaks.as_deref()));
        out.insert(
            "categories".to_owned(),
            strings_value(self.categories.as_deref()),
        );
        out.insert("linkedTo".to_owned(), int_value(self.linked_to));
        out.insert("minRange".to_owned(), num_value(self.min_range));
        out.insert(
            "minTickInterval".to_owned(),
            num_value(self.min_tick_interval),
        );
        out.insert("offset".to_owned(), num_value(self.offset));
        out.insert("opposite".to_owned(), bool_value(self.opposite));
        out.insert("pane".to_owned(), int_value(self.pane));
        out.insert(
            "plotBands".to_owned(),
            nodes_value(self.plot_bands.as_deref()),
        );
        out.insert(
            "plotLines".to_owned(),
            nodes_value(self.plot_lines.as_deref()),
        );
        out.insert(
            "reversedStacks".to_owned(),
            bool_value(self.reversed_stacks),
        );
        out.insert("title".to_owned(), node_value(self.title.as_ref()));
        out.insert("zoomEnabled".to_owned(), bool_value(self.zoom_enabled));
        self.base.emit(out);
    }
}
