//! chart-options: typed configuration objects for a JavaScript charting
//! renderer.
//!
//! Every option class is a strongly-typed record with snake_case attributes
//! and validating setters, convertible both ways to the renderer's ordered
//! camelCase wire mapping. Serialization deep-trims null and empty entries
//! while preserving `false` and `0`, and color-valued attributes resolve
//! polymorphically to a plain color string, a gradient, or a fill pattern.

pub mod axes;
pub mod error;
pub mod plot_options;
pub mod schema;
pub mod telemetry;
pub mod utility;

pub use error::{OptionsError, OptionsResult};
pub use schema::SchemaNode;
pub use utility::ColorInput;
