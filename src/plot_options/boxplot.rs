//! Box plot and error bar series options.

use serde_json::Value;

use crate::error::{OptionsError, OptionsResult};
use crate::plot_options::bar::{BarOptions, leaf_options};
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, validators,
    wire::{init_value, num_value},
};
use crate::utility::{ColorInput, DashStyle, color_value, dash_value};

/// A whisker or box length, given either in pixels or as a percentage of
/// the box width.
#[derive(Debug, Clone, PartialEq)]
pub enum WhiskerLength {
    Pixels(f64),
    Percent(String),
}

impl WhiskerLength {
    /// Resolves a length value. Numbers (and numeric strings) become pixel
    /// lengths; strings of the form `"50%"` stay percentages.
    pub fn resolve(attribute: &'static str, value: &Value) -> OptionsResult<Option<Self>> {
        if let Value::String(text) = value {
            if let Some(prefix) = text.strip_suffix('%') {
                if prefix.parse::<f64>().is_ok() {
                    return Ok(Some(Self::Percent(text.clone())));
                }
                return Err(OptionsError::validation(attribute, value));
            }
        }
        Ok(validators::numeric(attribute, value, Some(0.0))?.map(Self::Pixels))
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Pixels(px) => num_value(Some(*px)),
            Self::Percent(text) => Value::String(text.clone()),
        }
    }
}

fn whisker_value(length: Option<&WhiskerLength>) -> Value {
    length.map_or(Value::Null, WhiskerLength::to_value)
}

const BOX_PLOT_KEYS: &[WireKey] = &[
    key("box_dash_style", "boxDashStyle"),
    key("median_color", "medianColor"),
    key("median_dash_style", "medianDashStyle"),
    key("median_width", "medianWidth"),
    key("stem_dash_style", "stemDashStyle"),
    key("stem_width", "stemWidth"),
    key("whisker_color", "whiskerColor"),
    key("whisker_dash_style", "whiskerDashStyle"),
    key("whisker_length", "whiskerLength"),
    key("whisker_width", "whiskerWidth"),
];

/// Options for box plot series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxPlotOptions {
    base: BarOptions,
    box_dash_style: Option<DashStyle>,
    median_color: Option<ColorInput>,
    median_dash_style: Option<DashStyle>,
    median_width: Option<f64>,
    stem_dash_style: Option<DashStyle>,
    stem_width: Option<f64>,
    whisker_color: Option<ColorInput>,
    whisker_dash_style: Option<DashStyle>,
    whisker_length: Option<WhiskerLength>,
    whisker_width: Option<f64>,
}

impl BoxPlotOptions {
    /// Inherited `BarOptions` attribute level.
    pub fn base(&self) -> &BarOptions {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BarOptions {
        &mut self.base
    }

    pub fn box_dash_style(&self) -> Option<DashStyle> {
        self.box_dash_style
    }

    pub fn median_color(&self) -> Option<&ColorInput> {
        self.median_color.as_ref()
    }

    pub fn median_dash_style(&self) -> Option<DashStyle> {
        self.median_dash_style
    }

    pub fn median_width(&self) -> Option<f64> {
        self.median_width
    }

    pub fn stem_dash_style(&self) -> Option<DashStyle> {
        self.stem_dash_style
    }

    pub fn stem_width(&self) -> Option<f64> {
        self.stem_width
    }

    pub fn whisker_color(&self) -> Option<&ColorInput> {
        self.whisker_color.as_ref()
    }

    pub fn whisker_dash_style(&self) -> Option<DashStyle> {
        self.whisker_dash_style
    }

    pub fn whisker_length(&self) -> Option<&WhiskerLength> {
        self.whisker_length.as_ref()
    }

    pub fn whisker_width(&self) -> Option<f64> {
        self.whisker_width
    }

    pub fn set_box_dash_style(&mut self, value: &Value) -> OptionsResult<()> {
        self.box_dash_style = DashStyle::resolve("box_dash_style", value)?;
        Ok(())
    }

    pub fn set_median_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.median_color = ColorInput::resolve("median_color", value)?;
        Ok(())
    }

    pub fn set_median_dash_style(&mut self, value: &Value) -> OptionsResult<()> {
        self.median_dash_style = DashStyle::resolve("median_dash_style", value)?;
        Ok(())
    }

    pub fn set_median_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.median_width = validators::numeric("median_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_stem_dash_style(&mut self, value: &Value) -> OptionsResult<()> {
        self.stem_dash_style = DashStyle::resolve("stem_dash_style", value)?;
        Ok(())
    }

    pub fn set_stem_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.stem_width = validators::numeric("stem_width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_whisker_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.whisker_color = ColorInput::resolve("whisker_color", value)?;
        Ok(())
    }

    pub fn set_whisker_dash_style(&mut self, value: &Value) -> OptionsResult<()> {
        self.whisker_dash_style = DashStyle::resolve("whisker_dash_style", value)?;
        Ok(())
    }

    /// Either a pixel length or a percentage string like `"50%"`.
    pub fn set_whisker_length(&mut self, value: &Value) -> OptionsResult<()> {
        self.whisker_length = WhiskerLength::resolve("whisker_length", value)?;
        Ok(())
    }

    pub fn set_whisker_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.whisker_width = validators::numeric("whisker_width", value, Some(0.0))?;
        Ok(())
    }
}

impl SchemaNode for BoxPlotOptions {
    fn wire_keys() -> WireKeyTable {
        let mut keys = BarOptions::wire_keys();
        keys.extend_from_slice(BOX_PLOT_KEYS);
        keys
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.base.apply(init)?;
        self.set_box_dash_style(init_value(init, "box_dash_style"))?;
        self.set_median_color(init_value(init, "median_color"))?;
        self.set_median_dash_style(init_value(init, "median_dash_style"))?;
        self.set_median_width(init_value(init, "median_width"))?;
        self.set_stem_dash_style(init_value(init, "stem_dash_style"))?;
        self.set_stem_width(init_value(init, "stem_width"))?;
        self.set_whisker_color(init_value(init, "whisker_color"))?;
        self.set_whisker_dash_style(init_value(init, "whisker_dash_style"))?;
        self.set_whisker_length(init_value(init, "whisker_length"))?;
        self.set_whisker_width(init_value(init, "whisker_width"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("boxDashStyle".to_owned(), dash_value(self.box_dash_style));
        out.insert(
            "medianColor".to_owned(),
            color_value(self.median_color.as_ref()),
        );
        out.insert(
            "medianDashStyle".to_owned(),
            dash_value(self.median_dash_style),
        );
        out.insert("medianWidth".to_owned(), num_value(self.median_width));
        out.insert("stemDashStyle".to_owned(), dash_value(self.stem_dash_style));
        out.insert("stemWidth".to_owned(), num_value(self.stem_width));
        out.insert(
            "whiskerColor".to_owned(),
            color_value(self.whisker_color.as_ref()),
        );
        out.insert(
            "whiskerDashStyle".to_owned(),
            dash_value(self.whisker_dash_style),
        );
        out.insert(
            "whiskerLength".to_owned(),
            whisker_value(self.whisker_length.as_ref()),
        );
        out.insert("whiskerWidth".to_owned(), num_value(self.whisker_width));
        self.base.emit(out);
    }
}

leaf_options! {
    /// Options for error bar series. Identical in shape to
    /// [`BoxPlotOptions`].
    ErrorBarOptions, BoxPlotOptions
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whisker_length_accepts_pixels_and_percent() {
        let mut opts = BoxPlotOptions::default();
        opts.set_whisker_length(&json!(12.5)).unwrap();
        assert_eq!(opts.whisker_length(), Some(&WhiskerLength::Pixels(12.5)));
        opts.set_whisker_length(&json!("50%")).unwrap();
        assert_eq!(
            opts.whisker_length(),
            Some(&WhiskerLength::Percent("50%".to_owned()))
        );
    }

    #[test]
    fn malformed_percent_is_rejected() {
        let mut opts = BoxPlotOptions::default();
        assert!(opts.set_whisker_length(&json!("half%")).is_err());
    }

    #[test]
    fn rejected_enum_leaves_prior_value() {
        let mut opts = BoxPlotOptions::default();
        opts.set_stem_dash_style(&json!("Dash")).unwrap();
        assert!(opts.set_stem_dash_style(&json!("Wavy")).is_err());
        assert_eq!(opts.stem_dash_style(), Some(DashStyle::Dash));
    }

    #[test]
    fn error_bar_shares_the_box_plot_shape() {
        let eb = ErrorBarOptions::from_wire(
            json!({"whiskerLength": "25%", "stemWidth": 1}).as_object().unwrap(),
        )
        .unwrap();
        let wire = eb.to_wire();
        assert_eq!(wire.get("whiskerLength"), Some(&json!("25%")));
        assert_eq!(wire.get("stemWidth"), Some(&json!(1.0)));
    }
}
