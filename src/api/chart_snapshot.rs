use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::StackedBarChart;
use super::legend::LegendItem;
use super::scene::{ChartScene, PaintedSegment, RenderInput};

/// Serializable result of one layout pass, used for data export and
/// regression tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub has_data: bool,
    pub keys: Vec<String>,
    pub max_value: f64,
    pub padded_max_value: f64,
    pub x_labels_rotated: bool,
    pub x_axis_factor: usize,
    pub segments: Vec<PaintedSegment>,
    #[serde(default)]
    pub legend: Vec<LegendItem>,
}

impl ChartSnapshot {
    #[must_use]
    pub fn from_scene(scene: &ChartScene) -> Self {
        match scene {
            ChartScene::Empty(empty) => Self {
                viewport: empty.viewport,
                has_data: false,
                keys: Vec::new(),
                max_value: 0.0,
                padded_max_value: 0.0,
                x_labels_rotated: false,
                x_axis_factor: 1,
                segments: Vec::new(),
                legend: Vec::new(),
            },
            ChartScene::Bars(bars) => Self {
                viewport: bars.viewport,
                has_data: true,
                keys: bars.keys.clone(),
                max_value: bars.max_value,
                padded_max_value: bars.padded_max_value,
                x_labels_rotated: bars.axis_bottom.is_rotated(),
                x_axis_factor: bars.axis_bottom.tick_factor,
                segments: bars.segments.clone(),
                legend: bars.legend.clone(),
            },
        }
    }
}

impl<R: Renderer> StackedBarChart<R> {
    pub fn snapshot(&self, input: &RenderInput) -> ChartResult<ChartSnapshot> {
        Ok(ChartSnapshot::from_scene(&self.build_scene(input)?))
    }
}
