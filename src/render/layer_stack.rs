use serde::{Deserialize, Serialize};

/// One drawing pass of a stacked bar chart, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartLayer {
    Background,
    Grid,
    Axes,
    Bars,
    /// Value labels placed inside or beside horizontal bars.
    BarLabels,
    /// `(0)` annotations above empty vertical columns.
    ZeroLabels,
    Legends,
    LegendTitle,
    /// Placeholder drawn instead of every other pass when there is no data.
    EmptyState,
}

impl ChartLayer {
    /// Layers that can be present in a populated chart, in paint order.
    pub const PAINT_ORDER: [ChartLayer; 8] = [
        ChartLayer::Background,
        ChartLayer::Grid,
        ChartLayer::Axes,
        ChartLayer::Bars,
        ChartLayer::BarLabels,
        ChartLayer::ZeroLabels,
        ChartLayer::Legends,
        ChartLayer::LegendTitle,
    ];

    #[must_use]
    pub fn paint_rank(self) -> usize {
        Self::PAINT_ORDER
            .iter()
            .position(|layer| *layer == self)
            .unwrap_or(Self::PAINT_ORDER.len())
    }
}
