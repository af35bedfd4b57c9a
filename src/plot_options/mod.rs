//! Per-series-type configuration, one attribute level per inheritance step.

pub mod bar;
pub mod boxplot;
pub mod generic;
pub mod series;

pub use bar::{
    BarOptions, BaseBarOptions, ColumnOptions, ColumnPyramidOptions, ColumnRangeOptions,
    CylinderOptions, PartialFillOptions, VariwideOptions, WaterfallOptions, XRangeOptions,
};
pub use boxplot::{BoxPlotOptions, ErrorBarOptions, WhiskerLength};
pub use generic::GenericTypeOptions;
pub use series::SeriesOptions;
