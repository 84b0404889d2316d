use crate::core::PlotArea;
use crate::render::{
    ChartLayer, LayerFrame, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::axis_renderers::{AxisPosition, AxisSpec};
use super::legend::{LEGEND_ITEM_HEIGHT_PX, LEGEND_OFFSET_PX, LEGEND_SYMBOL_PX};
use super::scene::{BarScene, ChartScene, EmptyState};
use super::tick_label::LINE_HEIGHT;
use super::{BarLayout, Theme};

const AXIS_STROKE_PX: f64 = 1.0;
const GRID_STROKE_PX: f64 = 1.0;
const TICK_SIZE_PX: f64 = 5.0;
const TICK_LABEL_GAP_PX: f64 = 8.0;
const AXIS_LEGEND_INSET_PX: f64 = 12.0;

/// Materializes a scene into draw primitives, one `LayerFrame` per pass.
#[must_use]
pub fn build_render_frame(scene: &ChartScene, theme: &Theme) -> RenderFrame {
    match scene {
        ChartScene::Empty(empty) => empty_frame(empty, theme),
        ChartScene::Bars(bars) => bars
            .layers
            .iter()
            .fold(RenderFrame::new(bars.viewport), |frame, layer| {
                frame.with_layer(build_layer(*layer, bars, theme))
            }),
    }
}

fn empty_frame(empty: &EmptyState, theme: &Theme) -> RenderFrame {
    let mut layer = LayerFrame::new(ChartLayer::EmptyState);
    layer.texts.push(TextPrimitive::new(
        empty.text.clone(),
        f64::from(empty.viewport.width) * 0.5,
        f64::from(empty.viewport.height) * 0.5,
        theme.font_size_px,
        theme.empty_text,
        TextHAlign::Center,
    ));
    RenderFrame::new(empty.viewport).with_layer(layer)
}

fn build_layer(kind: ChartLayer, scene: &BarScene, theme: &Theme) -> LayerFrame {
    let mut layer = LayerFrame::new(kind);
    match kind {
        ChartLayer::Background => layer.rects.push(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(scene.viewport.width),
            f64::from(scene.viewport.height),
            theme.background,
        )),
        ChartLayer::Grid => push_grid(&mut layer, scene, theme),
        ChartLayer::Axes => {
            push_axis(&mut layer, &scene.axis_bottom, scene.plot, theme);
            push_axis(&mut layer, &scene.axis_left, scene.plot, theme);
        }
        ChartLayer::Bars => layer.rects.extend(scene.segments.iter().map(|painted| {
            let segment = &painted.segment;
            RectPrimitive::new(
                segment.x,
                segment.y,
                segment.width,
                segment.height,
                painted.color,
            )
        })),
        ChartLayer::BarLabels | ChartLayer::ZeroLabels => {
            layer.texts.extend(scene.labels.iter().map(|label| {
                TextPrimitive::new(
                    label.text.clone(),
                    label.x,
                    label.y,
                    theme.font_size_px,
                    label.color,
                    label.h_align,
                )
            }));
        }
        ChartLayer::Legends => push_legend(&mut layer, scene, theme),
        ChartLayer::LegendTitle => {
            if let Some(title) = scene.legend_title.as_deref().filter(|t| !t.is_empty()) {
                layer.texts.push(TextPrimitive::new(
                    title,
                    legend_x(scene),
                    scene.plot.y + theme.font_size_px,
                    theme.font_size_px,
                    theme.axis_text,
                    TextHAlign::Left,
                ));
            }
        }
        ChartLayer::EmptyState => {}
    }
    layer
}

fn push_grid(layer: &mut LayerFrame, scene: &BarScene, theme: &Theme) {
    let plot = scene.plot;
    match scene.layout {
        BarLayout::Vertical => {
            for tick in &scene.axis_left.ticks {
                layer.lines.push(LinePrimitive::new(
                    plot.x,
                    tick.position,
                    plot.right(),
                    tick.position,
                    GRID_STROKE_PX,
                    theme.grid,
                ));
            }
        }
        BarLayout::Horizontal => {
            for tick in &scene.axis_bottom.ticks {
                layer.lines.push(LinePrimitive::new(
                    tick.position,
                    plot.y,
                    tick.position,
                    plot.bottom(),
                    GRID_STROKE_PX,
                    theme.grid,
                ));
            }
        }
    }
}

fn push_axis(layer: &mut LayerFrame, axis: &AxisSpec, plot: PlotArea, theme: &Theme) {
    match axis.position {
        AxisPosition::Bottom => {
            layer.lines.push(LinePrimitive::new(
                plot.x,
                plot.bottom(),
                plot.right(),
                plot.bottom(),
                AXIS_STROKE_PX,
                theme.axis_text,
            ));
            let h_align = if axis.is_rotated() {
                TextHAlign::Right
            } else {
                TextHAlign::Center
            };
            for tick in &axis.ticks {
                layer.lines.push(LinePrimitive::new(
                    tick.position,
                    plot.bottom(),
                    tick.position,
                    plot.bottom() + TICK_SIZE_PX,
                    AXIS_STROKE_PX,
                    theme.axis_text,
                ));
                let baseline = plot.bottom() + TICK_SIZE_PX + TICK_LABEL_GAP_PX + theme.font_size_px;
                for line in tick.lines.iter().filter(|line| !line.text.is_empty()) {
                    layer.texts.push(
                        TextPrimitive::new(
                            line.text.clone(),
                            tick.position,
                            baseline + line.dy,
                            theme.font_size_px,
                            theme.axis_text,
                            h_align,
                        )
                        .with_rotation(axis.rotation_deg),
                    );
                }
            }
            if let Some(legend) = axis.legend.as_deref().filter(|l| !l.is_empty()) {
                layer.texts.push(TextPrimitive::new(
                    legend,
                    plot.x + plot.width * 0.5,
                    plot.bottom() + TICK_SIZE_PX + TICK_LABEL_GAP_PX + LINE_HEIGHT * 2.0,
                    theme.font_size_px,
                    theme.axis_text,
                    TextHAlign::Center,
                ));
            }
        }
        AxisPosition::Left => {
            layer.lines.push(LinePrimitive::new(
                plot.x,
                plot.y,
                plot.x,
                plot.bottom(),
                AXIS_STROKE_PX,
                theme.axis_text,
            ));
            for tick in &axis.ticks {
                layer.lines.push(LinePrimitive::new(
                    plot.x - TICK_SIZE_PX,
                    tick.position,
                    plot.x,
                    tick.position,
                    AXIS_STROKE_PX,
                    theme.axis_text,
                ));
                // Center the block of wrapped lines on the tick.
                let block_offset = (tick.lines.len().saturating_sub(1) as f64) * LINE_HEIGHT * 0.5;
                for line in tick.lines.iter().filter(|line| !line.text.is_empty()) {
                    layer.texts.push(
                        TextPrimitive::new(
                            line.text.clone(),
                            plot.x - TICK_SIZE_PX - TICK_LABEL_GAP_PX,
                            tick.position - block_offset + line.dy,
                            theme.font_size_px,
                            theme.axis_text,
                            TextHAlign::Right,
                        )
                        .with_rotation(axis.rotation_deg),
                    );
                }
            }
            if let Some(legend) = axis.legend.as_deref().filter(|l| !l.is_empty()) {
                layer.texts.push(
                    TextPrimitive::new(
                        legend,
                        AXIS_LEGEND_INSET_PX,
                        plot.y + plot.height * 0.5,
                        theme.font_size_px,
                        theme.axis_text,
                        TextHAlign::Center,
                    )
                    .with_rotation(-90.0),
                );
            }
        }
    }
}

fn legend_x(scene: &BarScene) -> f64 {
    scene.plot.right() + LEGEND_OFFSET_PX
}

fn push_legend(layer: &mut LayerFrame, scene: &BarScene, theme: &Theme) {
    let x = legend_x(scene);
    let title_offset = if scene.legend_title.is_some() {
        LEGEND_ITEM_HEIGHT_PX
    } else {
        0.0
    };
    for (i, item) in scene.legend.iter().enumerate() {
        let top = scene.plot.y + title_offset + (i as f64) * LEGEND_ITEM_HEIGHT_PX;
        layer.rects.push(RectPrimitive::new(
            x,
            top,
            LEGEND_SYMBOL_PX,
            LEGEND_SYMBOL_PX,
            item.color,
        ));
        layer.texts.push(TextPrimitive::new(
            item.key.clone(),
            x + LEGEND_SYMBOL_PX + 6.0,
            top + LEGEND_SYMBOL_PX,
            theme.font_size_px,
            theme.axis_text,
            TextHAlign::Left,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::build_render_frame;
    use crate::api::scene::{RenderInput, build_scene};
    use crate::api::{BarLayout, ChartConfig, LegendConfig};
    use crate::core::{BarDatum, SeriesDescription, Viewport, build_keys_and_colors};
    use crate::render::ChartLayer;

    #[test]
    fn empty_scene_draws_only_placeholder() {
        let config = ChartConfig::default();
        let styles = build_keys_and_colors(&[SeriesDescription::new("High")]);
        let scene = build_scene(&[], &styles, &config, &RenderInput::new(Viewport::new(400, 300)))
            .expect("scene");
        let frame = build_render_frame(&scene, &config.theme);
        frame.validate().expect("valid frame");
        assert_eq!(frame.layers.len(), 1);
        let texts: Vec<_> = frame.texts().collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].text, "No data to display");
    }

    #[test]
    fn populated_scene_emits_layers_in_order() {
        let config = ChartConfig::new(BarLayout::Horizontal).with_legend(LegendConfig {
            title: Some("Risk".to_owned()),
            width: 120.0,
        });
        let styles =
            build_keys_and_colors(&[SeriesDescription::new("High"), SeriesDescription::new("Low")]);
        let rows = vec![
            BarDatum::new("Crew A").with_value("High", 4.0).with_value("Low", 1.0),
            BarDatum::new("Crew B").with_value("High", 2.0).with_value("Low", 6.0),
        ];
        let scene = build_scene(&rows, &styles, &config, &RenderInput::new(Viewport::new(900, 400)))
            .expect("scene");
        let frame = build_render_frame(&scene, &config.theme);
        frame.validate().expect("valid frame");

        let kinds: Vec<_> = frame.layers.iter().map(|layer| layer.layer).collect();
        assert_eq!(kinds.first(), Some(&ChartLayer::Background));
        assert_eq!(kinds.last(), Some(&ChartLayer::LegendTitle));
        assert_eq!(frame.layer(ChartLayer::Bars).expect("bars").rects.len(), 4);
        assert_eq!(frame.layer(ChartLayer::BarLabels).expect("labels").texts.len(), 4);
        assert_eq!(frame.layer(ChartLayer::Legends).expect("legend").rects.len(), 2);
    }
}
