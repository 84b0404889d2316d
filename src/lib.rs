//! stackbar: headless stacked bar chart layout.
//!
//! Rows and series descriptions go in; a deterministic `RenderFrame` of
//! rects, lines and texts comes out. The crate owns the layout heuristics
//! (axis label rotation and thinning, tick label wrapping, value label
//! placement, selection-aware colors) and leaves pixels to a `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, RenderInput, StackedBarChart, StackedBarProps};
pub use error::{ChartError, ChartResult};
