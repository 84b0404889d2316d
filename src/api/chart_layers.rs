use crate::render::ChartLayer;

use super::{BarLayout, ChartConfig};

/// Ordered drawing passes for a populated chart.
///
/// Horizontal charts label their bars; vertical charts annotate empty
/// columns. Legend passes only exist when a legend is configured.
#[must_use]
pub fn build_chart_layers(config: &ChartConfig) -> Vec<ChartLayer> {
    let mut layers = vec![
        ChartLayer::Background,
        ChartLayer::Grid,
        ChartLayer::Axes,
        ChartLayer::Bars,
    ];
    layers.push(match config.layout {
        BarLayout::Horizontal => ChartLayer::BarLabels,
        BarLayout::Vertical => ChartLayer::ZeroLabels,
    });
    if let Some(legend) = &config.legend {
        layers.push(ChartLayer::Legends);
        if legend.title.is_some() {
            layers.push(ChartLayer::LegendTitle);
        }
    }
    layers
}

#[cfg(test)]
mod tests {
    use super::build_chart_layers;
    use crate::api::{BarLayout, ChartConfig, LegendConfig};
    use crate::render::ChartLayer;

    #[test]
    fn vertical_chart_without_legend() {
        let layers = build_chart_layers(&ChartConfig::new(BarLayout::Vertical));
        assert_eq!(
            layers,
            vec![
                ChartLayer::Background,
                ChartLayer::Grid,
                ChartLayer::Axes,
                ChartLayer::Bars,
                ChartLayer::ZeroLabels,
            ]
        );
    }

    #[test]
    fn horizontal_chart_with_titled_legend() {
        let config = ChartConfig::new(BarLayout::Horizontal).with_legend(LegendConfig {
            title: Some("Risk level".to_owned()),
            width: 120.0,
        });
        let layers = build_chart_layers(&config);
        assert_eq!(
            &layers[4..],
            &[
                ChartLayer::BarLabels,
                ChartLayer::Legends,
                ChartLayer::LegendTitle
            ]
        );
    }

    #[test]
    fn layers_follow_paint_order() {
        let config = ChartConfig::new(BarLayout::Horizontal).with_legend(LegendConfig {
            title: Some("Risk".to_owned()),
            width: 120.0,
        });
        let layers = build_chart_layers(&config);
        assert!(
            layers
                .windows(2)
                .all(|pair| pair[0].paint_rank() < pair[1].paint_rank())
        );
    }
}
