use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use tracing::trace;

use crate::core::{
    AxisDensity, BandScale, BarDatum, LinearScale, PlotArea, calc_x_axis_factor,
    should_rotate_x_labels,
};

use super::axis_ticks::{
    VALUE_AXIS_MAX_TICKS, VALUE_AXIS_MIN_TICKS, VALUE_AXIS_TARGET_SPACING_PX,
    axis_tick_target_count, nice_ticks, sampled_indices,
};
use super::tick_label::{TickLine, TickLines, break_into_tspans};
use super::{BarLayout, ChartConfig};

/// Rotation applied to crowded index-axis labels.
pub const ROTATED_LABEL_DEG: f64 = -45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisPosition {
    Bottom,
    Left,
}

/// What a tick marks: a category slot or a numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickValue {
    Index(usize),
    Value(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: TickValue,
    /// Pixel coordinate along the axis.
    pub position: f64,
    pub lines: TickLines,
}

/// Fully resolved axis: tick set, label lines and label rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub position: AxisPosition,
    pub ticks: Vec<AxisTick>,
    pub rotation_deg: f64,
    /// Sampling factor used to thin category ticks; 1 on value axes.
    pub tick_factor: usize,
    pub legend: Option<String>,
}

impl AxisSpec {
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotation_deg != 0.0
    }
}

/// Inputs shared by both axis renderers.
#[derive(Debug, Clone, Copy)]
pub struct AxisContext<'a> {
    pub rows: &'a [BarDatum],
    pub band: BandScale,
    pub value_scale: LinearScale,
    pub plot: PlotArea,
    pub config: &'a ChartConfig,
}

/// Bottom axis: categories for vertical charts, values for horizontal ones.
#[must_use]
pub fn axis_bottom(ctx: AxisContext<'_>) -> AxisSpec {
    let legend = ctx.config.axis_bottom_legend.clone();
    match ctx.config.layout {
        BarLayout::Vertical => {
            let density = AxisDensity::new(ctx.rows.len(), ctx.plot.width);
            let rotate = should_rotate_x_labels(density, &ctx.config.thresholds);
            let factor = calc_x_axis_factor(density, &ctx.config.thresholds);
            let ticks = sampled_indices(ctx.rows.len(), factor)
                .into_iter()
                .filter_map(|index| {
                    let position = ctx.band.band_center(index)?;
                    let label = ctx.rows[index]
                        .index_value
                        .label_with(&ctx.config.date_format);
                    Some(AxisTick {
                        value: TickValue::Index(index),
                        position,
                        lines: smallvec![TickLine {
                            text: label,
                            dy: 0.0
                        }],
                    })
                })
                .collect();
            AxisSpec {
                position: AxisPosition::Bottom,
                ticks,
                rotation_deg: if rotate { ROTATED_LABEL_DEG } else { 0.0 },
                tick_factor: factor,
                legend,
            }
        }
        BarLayout::Horizontal => value_axis(AxisPosition::Bottom, ctx, ctx.plot.width, legend),
    }
}

/// Left axis: values for vertical charts, wrapped categories for horizontal ones.
#[must_use]
pub fn axis_left(ctx: AxisContext<'_>) -> AxisSpec {
    let legend = ctx.config.axis_left_legend.clone();
    match ctx.config.layout {
        BarLayout::Vertical => value_axis(AxisPosition::Left, ctx, ctx.plot.height, legend),
        BarLayout::Horizontal => {
            let ticks = ctx
                .rows
                .iter()
                .enumerate()
                .filter_map(|(index, row)| {
                    let position = ctx.band.band_center(index)?;
                    let label = row.index_value.label_with(&ctx.config.date_format);
                    Some(AxisTick {
                        value: TickValue::Index(index),
                        position,
                        lines: break_into_tspans(&label, ctx.config.max_line_length),
                    })
                })
                .collect();
            AxisSpec {
                position: AxisPosition::Left,
                ticks,
                rotation_deg: 0.0,
                tick_factor: 1,
                legend,
            }
        }
    }
}

fn value_axis(
    position: AxisPosition,
    ctx: AxisContext<'_>,
    span_px: f64,
    legend: Option<String>,
) -> AxisSpec {
    let target = axis_tick_target_count(
        span_px,
        VALUE_AXIS_TARGET_SPACING_PX,
        VALUE_AXIS_MIN_TICKS,
        VALUE_AXIS_MAX_TICKS,
    );
    let (_, max) = ctx.value_scale.domain();
    let ticks: Vec<AxisTick> = nice_ticks(max, target)
        .into_iter()
        .map(|value| AxisTick {
            value: TickValue::Value(value),
            position: ctx.value_scale.map(value),
            lines: smallvec![TickLine {
                text: format_value(value),
                dy: 0.0
            }],
        })
        .collect();
    trace!(?position, target, count = ticks.len(), "value axis ticks");
    AxisSpec {
        position,
        ticks,
        rotation_deg: 0.0,
        tick_factor: 1,
        legend,
    }
}

/// Whole numbers print without decimals; others keep up to two.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
