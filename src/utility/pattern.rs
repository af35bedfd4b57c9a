//! Pattern fill specification, the second typed alternative to a plain color
//! string in color-like attribute slots.

use serde_json::Value;

use crate::error::OptionsResult;
use crate::schema::{
    InitMap, SchemaNode, WireKey, WireKeyTable, WireMap, key, node_value, resolve_node, validators,
    wire::{bool_value, init_value, num_value, str_value},
};

const PATTERN_OPTIONS_KEYS: &[WireKey] = &[
    key("aspect_ratio", "aspectRatio"),
    key("background_color", "backgroundColor"),
    key("id", "id"),
    key("image", "image"),
    key("opacity", "opacity"),
    key("path", "path"),
    key("width", "width"),
    key("height", "height"),
    key("x", "x"),
    key("y", "y"),
];

/// The pattern definition itself: either an image reference or a procedural
/// SVG path, plus tile geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternOptions {
    aspect_ratio: Option<f64>,
    background_color: Option<String>,
    id: Option<String>,
    image: Option<String>,
    opacity: Option<f64>,
    path: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    x: Option<f64>,
    y: Option<f64>,
}

impl PatternOptions {
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }

    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn x(&self) -> Option<f64> {
        self.x
    }

    pub fn y(&self) -> Option<f64> {
        self.y
    }

    pub fn set_aspect_ratio(&mut self, value: &Value) -> OptionsResult<()> {
        self.aspect_ratio = validators::numeric("aspect_ratio", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_background_color(&mut self, value: &Value) -> OptionsResult<()> {
        self.background_color = validators::string("background_color", value)?;
        Ok(())
    }

    pub fn set_id(&mut self, value: &Value) -> OptionsResult<()> {
        self.id = validators::string("id", value)?;
        Ok(())
    }

    pub fn set_image(&mut self, value: &Value) -> OptionsResult<()> {
        self.image = validators::string("image", value)?;
        Ok(())
    }

    pub fn set_opacity(&mut self, value: &Value) -> OptionsResult<()> {
        self.opacity = validators::numeric("opacity", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_path(&mut self, value: &Value) -> OptionsResult<()> {
        self.path = validators::string("path", value)?;
        Ok(())
    }

    pub fn set_width(&mut self, value: &Value) -> OptionsResult<()> {
        self.width = validators::numeric("width", value, Some(0.0))?;
        Ok(())
    }

    pub fn set_height(&mut self, value: &Value) -> OptionsResult<()> {
        self.height = validators::numeric("height", value, Some(0.0))?;
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

impl SchemaNode for PatternOptions {
    fn wire_keys() -> WireKeyTable {
        PATTERN_OPTIONS_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_aspect_ratio(init_value(init, "aspect_ratio"))?;
        self.set_background_color(init_value(init, "background_color"))?;
        self.set_id(init_value(init, "id"))?;
        self.set_image(init_value(init, "image"))?;
        self.set_opacity(init_value(init, "opacity"))?;
        self.set_path(init_value(init, "path"))?;
        self.set_width(init_value(init, "width"))?;
        self.set_height(init_value(init, "height"))?;
        self.set_x(init_value(init, "x"))?;
        self.set_y(init_value(init, "y"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("aspectRatio".to_owned(), num_value(self.aspect_ratio));
        out.insert(
            "backgroundColor".to_owned(),
            str_value(self.background_color.as_deref()),
        );
        out.insert("id".to_owned(), str_value(self.id.as_deref()));
        out.insert("image".to_owned(), str_value(self.image.as_deref()));
        out.insert("opacity".to_owned(), num_value(self.opacity));
        out.insert("path".to_owned(), str_value(self.path.as_deref()));
        out.insert("width".to_owned(), num_value(self.width));
        out.insert("height".to_owned(), num_value(self.height));
        out.insert("x".to_owned(), num_value(self.x));
        out.insert("y".to_owned(), num_value(self.y));
    }
}

const PATTERN_KEYS: &[WireKey] = &[
    key("animation", "animation"),
    key("pattern_options", "patternOptions"),
];

/// Pattern fill wrapper as the renderer consumes it: the `patternOptions`
/// block plus the fill-animation toggle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    animation: Option<bool>,
    pattern_options: Option<PatternOptions>,
}

impl Pattern {
    pub fn animation(&self) -> Option<bool> {
        self.animation
    }

    pub fn pattern_options(&self) -> Option<&PatternOptions> {
        self.pattern_options.as_ref()
    }

    pub fn set_animation(&mut self, value: &Value) -> OptionsResult<()> {
        self.animation = validators::boolean("animation", value)?;
        Ok(())
    }

    pub fn set_pattern_options(&mut self, value: &Value) -> OptionsResult<()> {
        self.pattern_options = resolve_node("pattern_options", value)?;
        Ok(())
    }
}

impl SchemaNode for Pattern {
    fn wire_keys() -> WireKeyTable {
        PATTERN_KEYS.to_vec()
    }

    fn apply(&mut self, init: &InitMap) -> OptionsResult<()> {
        self.set_animation(init_value(init, "animation"))?;
        self.set_pattern_options(init_value(init, "pattern_options"))?;
        Ok(())
    }

    fn emit(&self, out: &mut WireMap) {
        out.insert("animation".to_owned(), bool_value(self.animation));
        out.insert(
            "patternOptions".to_owned(),
            node_value(self.pattern_options.as_ref()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pattern_round_trips_through_wire_form() {
        let raw = json!({
            "animation": false,
            "patternOptions": {
                "path": "M 0 0 L 10 10",
                "width": 10.0,
                "height": 10.0,
                "opacity": 0.5
            }
        });
        let pattern = Pattern::from_wire(raw.as_object().expect("object")).expect("valid pattern");

        // animation=false is real configuration and must survive trimming.
        assert_eq!(pattern.animation(), Some(false));
        assert_eq!(Value::Object(pattern.to_wire()), raw);
    }
}
