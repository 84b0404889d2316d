mod axis_renderers;
mod axis_ticks;
mod chart;
mod chart_config;
mod chart_layers;
mod chart_snapshot;
mod color_resolver;
mod json_contract;
mod label_layers;
mod legend;
mod render_frame_builder;
mod scene;
mod theme;
mod tick_label;
mod validation;

pub use axis_renderers::{
    AxisContext, AxisPosition, AxisSpec, AxisTick, ROTATED_LABEL_DEG, TickValue, axis_bottom,
    axis_left, format_value,
};
pub use chart::{HasDataCallback, RenderOutcome, StackedBarChart, StackedBarProps};
pub use chart_config::{BarLayout, ChartConfig, LegendConfig, MarginBehavior};
pub use chart_layers::build_chart_layers;
pub use chart_snapshot::ChartSnapshot;
pub use color_resolver::{color_for_datum, is_selected, label_color_for_datum};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use label_layers::{
    BarLabel, LabelPlacement, OUTSIDE_LABEL_THRESHOLD_PX, ZERO_LABEL_MIN_BAND_PX,
    ZERO_LABEL_TEXT, horizontal_bar_label, vertical_zero_label,
};
pub use legend::{LegendItem, build_legend_items};
pub use render_frame_builder::build_render_frame;
pub use scene::{
    BarScene, ChartScene, EmptyState, PaintedSegment, RenderInput, Tooltip, build_scene,
    tooltip_for,
};
pub use theme::Theme;
pub use tick_label::{
    DEFAULT_MAX_LINE_LENGTH, ELLIPSIS, LINE_HEIGHT, MAX_LINES, TickLine, TickLines,
    break_into_tspans, break_into_tspans_checked,
};
