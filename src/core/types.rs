use serde::{Deserialize, Serialize};

/// Outer pixel size of the chart container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area for axes and legends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Smallest share of each viewport axis left to the plot area.
pub const MIN_PLOT_SHARE: f64 = 0.25;

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Shrinks opposite margins proportionally wherever they would leave the
    /// plot less than `MIN_PLOT_SHARE` of the viewport on that axis.
    #[must_use]
    pub fn fit_within(self, viewport: Viewport) -> Self {
        let (left, right) = fit_pair(self.left, self.right, f64::from(viewport.width));
        let (top, bottom) = fit_pair(self.top, self.bottom, f64::from(viewport.height));
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

fn fit_pair(start: f64, end: f64, span: f64) -> (f64, f64) {
    let total = start + end;
    let budget = span * (1.0 - MIN_PLOT_SHARE);
    if total <= budget || total <= 0.0 {
        return (start, end);
    }
    let scale = budget / total;
    (start * scale, end * scale)
}

/// Plot area left after margins are applied to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Returns `None` when the margins leave no drawable space.
    #[must_use]
    pub fn inside(viewport: Viewport, margins: Margins) -> Option<Self> {
        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            x: margins.left,
            y: margins.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}
