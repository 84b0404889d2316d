use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    BandScale, BarDatum, BarSegment, KeysAndColors, LinearScale, MAX_VALUE_PADDING, Margins,
    PlotArea, SelectedDatum, Viewport, calc_max_value, stack_total,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartLayer, Color};

use super::axis_renderers::{AxisContext, AxisSpec, axis_bottom, axis_left, format_value};
use super::chart_layers::build_chart_layers;
use super::color_resolver::{color_for_datum, is_selected};
use super::label_layers::{BarLabel, horizontal_bar_label, vertical_zero_label};
use super::legend::{LegendItem, build_legend_items};
use super::{BarLayout, ChartConfig};

/// Per-render inputs owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInput {
    pub viewport: Viewport,
    pub selected: Option<SelectedDatum>,
    pub hovered: Option<SelectedDatum>,
}

impl RenderInput {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            selected: None,
            hovered: None,
        }
    }

    #[must_use]
    pub fn with_selected(mut self, selected: Option<SelectedDatum>) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn with_hovered(mut self, hovered: Option<SelectedDatum>) -> Self {
        self.hovered = hovered;
        self
    }
}

/// A bar segment together with the fill it is drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintedSegment {
    pub segment: BarSegment,
    pub color: Color,
    pub selected: bool,
    pub hovered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyState {
    pub viewport: Viewport,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarScene {
    pub viewport: Viewport,
    pub layout: BarLayout,
    pub margins: Margins,
    pub plot: PlotArea,
    pub keys: Vec<String>,
    pub max_value: f64,
    pub padded_max_value: f64,
    pub band: BandScale,
    pub value_scale: LinearScale,
    pub segments: Vec<PaintedSegment>,
    pub axis_bottom: AxisSpec,
    pub axis_left: AxisSpec,
    pub labels: Vec<BarLabel>,
    pub legend: Vec<LegendItem>,
    pub legend_title: Option<String>,
    pub layers: Vec<ChartLayer>,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartScene {
    /// Nothing to plot: the max stacked value is zero.
    Empty(EmptyState),
    Bars(Box<BarScene>),
}

impl ChartScene {
    #[must_use]
    pub fn has_data(&self) -> bool {
        matches!(self, Self::Bars(_))
    }

    #[must_use]
    pub fn bars(&self) -> Option<&BarScene> {
        match self {
            Self::Bars(scene) => Some(scene),
            Self::Empty(_) => None,
        }
    }

    /// Topmost segment under `(x, y)`.
    #[must_use]
    pub fn segment_at(&self, x: f64, y: f64) -> Option<&BarSegment> {
        self.bars()?
            .segments
            .iter()
            .rev()
            .map(|painted| &painted.segment)
            .find(|segment| segment.contains(x, y))
    }
}

/// Tooltip content for a hovered segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub title: String,
    pub body: String,
}

#[must_use]
pub fn tooltip_for(segment: &BarSegment, date_format: &str) -> Tooltip {
    Tooltip {
        title: segment.index_value.label_with(date_format),
        body: format!("{}: {}", segment.id, format_value(segment.value)),
    }
}

/// Runs the layout pipeline: keys, max value, margins, scales, stacked
/// segments, axes, labels, legend and layers.
pub fn build_scene(
    rows: &[BarDatum],
    styles: &KeysAndColors,
    config: &ChartConfig,
    input: &RenderInput,
) -> ChartResult<ChartScene> {
    let viewport = input.viewport;
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    for row in rows {
        row.validate()?;
    }

    let max_value = calc_max_value(rows, &styles.keys);
    if max_value == 0.0 {
        debug!(rows = rows.len(), "no data to plot, using empty state");
        return Ok(ChartScene::Empty(EmptyState {
            viewport,
            text: config.empty_state_text.clone(),
        }));
    }
    let padded_max_value = max_value * MAX_VALUE_PADDING;

    let margins = config.resolved_margins().fit_within(viewport);
    let plot = PlotArea::inside(viewport, margins).ok_or(ChartError::InvalidViewport {
        width: viewport.width,
        height: viewport.height,
    })?;

    let (band, value_scale) = match config.layout {
        BarLayout::Vertical => (
            BandScale::new(rows.len(), plot.x, plot.right(), config.padding)?,
            LinearScale::new(0.0, padded_max_value, plot.bottom(), plot.y)?,
        ),
        BarLayout::Horizontal => (
            BandScale::new(rows.len(), plot.y, plot.bottom(), config.padding)?,
            LinearScale::new(0.0, padded_max_value, plot.x, plot.right())?,
        ),
    };

    let segments = stack_segments(rows, styles, config.layout, band, value_scale, input);

    let ctx = AxisContext {
        rows,
        band,
        value_scale,
        plot,
        config,
    };
    let axis_bottom = axis_bottom(ctx);
    let axis_left = axis_left(ctx);

    let labels: Vec<BarLabel> = match config.layout {
        BarLayout::Horizontal => segments
            .iter()
            .filter_map(|painted| horizontal_bar_label(&painted.segment, styles, &config.theme))
            .collect(),
        BarLayout::Vertical => rows
            .iter()
            .enumerate()
            .filter_map(|(index, row)| {
                vertical_zero_label(
                    index,
                    stack_total(row, &styles.keys),
                    band,
                    value_scale,
                    &config.theme,
                )
            })
            .collect(),
    };

    let (legend, legend_title) = match &config.legend {
        Some(legend) => (build_legend_items(styles), legend.title.clone()),
        None => (Vec::new(), None),
    };

    debug!(
        rows = rows.len(),
        keys = styles.keys.len(),
        segments = segments.len(),
        labels = labels.len(),
        max_value,
        "built stacked bar scene"
    );

    Ok(ChartScene::Bars(Box::new(BarScene {
        viewport,
        layout: config.layout,
        margins,
        plot,
        keys: styles.keys.clone(),
        max_value,
        padded_max_value,
        band,
        value_scale,
        segments,
        axis_bottom,
        axis_left,
        labels,
        legend,
        legend_title,
        layers: build_chart_layers(config),
    })))
}

fn stack_segments(
    rows: &[BarDatum],
    styles: &KeysAndColors,
    layout: BarLayout,
    band: BandScale,
    value_scale: LinearScale,
    input: &RenderInput,
) -> Vec<PaintedSegment> {
    let multi_key = styles.is_multi_key();
    let mut painted = Vec::with_capacity(rows.len() * styles.keys.len());

    for (index, row) in rows.iter().enumerate() {
        let Some(band_start) = band.band_start(index) else {
            continue;
        };
        let mut base = 0.0;
        for key in &styles.keys {
            let Some(&value) = row.values.get(key) else {
                continue;
            };
            let top = base + value.max(0.0);
            let segment = match layout {
                BarLayout::Vertical => {
                    let y_top = value_scale.map(top);
                    BarSegment {
                        id: key.clone(),
                        index,
                        index_value: row.index_value.clone(),
                        value,
                        x: band_start,
                        y: y_top,
                        width: band.bandwidth(),
                        height: value_scale.map(base) - y_top,
                    }
                }
                BarLayout::Horizontal => {
                    let x_start = value_scale.map(base);
                    BarSegment {
                        id: key.clone(),
                        index,
                        index_value: row.index_value.clone(),
                        value,
                        x: x_start,
                        y: band_start,
                        width: value_scale.map(top) - x_start,
                        height: band.bandwidth(),
                    }
                }
            };
            base = top;

            let selected = is_selected(&segment, input.selected.as_ref(), multi_key);
            let hovered = is_selected(&segment, input.hovered.as_ref(), multi_key);
            let color = color_for_datum(&segment, styles, input.selected.as_ref(), hovered);
            painted.push(PaintedSegment {
                segment,
                color,
                selected,
                hovered,
            });
        }
    }

    painted
}
