mod axis_thresholds;
mod datum;
mod max_value;
mod scale;
mod series;
mod types;

pub use axis_thresholds::{
    AxisDensity, AxisThreshold, ThresholdTable, calc_x_axis_factor, should_rotate_x_labels,
};
pub use datum::{BarDatum, BarSegment, IndexValue, SelectedDatum};
pub use max_value::{MAX_VALUE_PADDING, calc_max_value, padded_max_value, stack_total};
pub use scale::{BandScale, LinearScale};
pub use series::{
    ColorSpec, ComputedColorFn, KeysAndColors, SeriesDescription, SeriesStyle,
    build_keys_and_colors,
};
pub use types::{MIN_PLOT_SHARE, Margins, PlotArea, Viewport};
