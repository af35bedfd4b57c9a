pub mod breaks;
pub mod generic;
pub mod numeric;
pub mod plot_bands;
pub mod title;

pub use breaks::AxisBreak;
pub use generic::GenericAxis;
pub use numeric::NumericAxis;
pub use plot_bands::{PlotBand, PlotLine};
pub use title::AxisTitle;
