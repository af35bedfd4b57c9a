pub mod color;
pub mod dash_style;
pub mod gradient;
pub mod pattern;

pub use color::{ColorInput, color_value, colors_value, resolve_colors};
pub use dash_style::{DashStyle, dash_value};
pub use gradient::{Gradient, GradientStop, LinearGradientCoords, RadialGradientCoords};
pub use pattern::{Pattern, PatternOptions};
