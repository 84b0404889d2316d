use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Current bar count and plot width fed to the label heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDensity {
    pub bar_count: usize,
    pub width: f64,
}

impl AxisDensity {
    #[must_use]
    pub fn new(bar_count: usize, width: f64) -> Self {
        Self { bar_count, width }
    }
}

/// Rule mapping "many bars in a narrow plot" to a tick sampling factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisThreshold {
    pub max_width: f64,
    pub min_bar_count: usize,
    pub x_axis_factor: usize,
}

impl AxisThreshold {
    #[must_use]
    pub const fn new(max_width: f64, min_bar_count: usize, x_axis_factor: usize) -> Self {
        Self {
            max_width,
            min_bar_count,
            x_axis_factor,
        }
    }

    #[must_use]
    pub fn is_met(self, density: AxisDensity) -> bool {
        density.bar_count >= self.min_bar_count && density.width <= self.max_width
    }
}

const DEFAULT_THRESHOLDS: [AxisThreshold; 5] = [
    AxisThreshold::new(1200.0, 14, 1),
    AxisThreshold::new(800.0, 25, 2),
    AxisThreshold::new(1200.0, 45, 2),
    AxisThreshold::new(500.0, 20, 3),
    AxisThreshold::new(800.0, 60, 4),
];

/// Ordered threshold rules evaluated against an `AxisDensity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AxisThreshold>", into = "Vec<AxisThreshold>")]
pub struct ThresholdTable {
    thresholds: Vec<AxisThreshold>,
}

impl ThresholdTable {
    pub fn new(thresholds: Vec<AxisThreshold>) -> ChartResult<Self> {
        if thresholds.is_empty() {
            return Err(ChartError::InvalidData(
                "threshold table must not be empty".to_owned(),
            ));
        }
        for threshold in &thresholds {
            if !threshold.max_width.is_finite() || threshold.max_width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "threshold max width must be finite and > 0".to_owned(),
                ));
            }
            if threshold.x_axis_factor == 0 {
                return Err(ChartError::InvalidData(
                    "threshold x-axis factor must be >= 1".to_owned(),
                ));
            }
        }
        Ok(Self { thresholds })
    }

    #[must_use]
    pub fn thresholds(&self) -> &[AxisThreshold] {
        &self.thresholds
    }

    fn met(&self, density: AxisDensity) -> impl Iterator<Item = &AxisThreshold> {
        self.thresholds
            .iter()
            .filter(move |threshold| threshold.is_met(density))
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
        }
    }
}

impl TryFrom<Vec<AxisThreshold>> for ThresholdTable {
    type Error = ChartError;

    fn try_from(value: Vec<AxisThreshold>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ThresholdTable> for Vec<AxisThreshold> {
    fn from(value: ThresholdTable) -> Self {
        value.thresholds
    }
}

/// Index-axis labels rotate once any threshold is met.
#[must_use]
pub fn should_rotate_x_labels(density: AxisDensity, table: &ThresholdTable) -> bool {
    let rotate = table.met(density).next().is_some();
    trace!(
        bar_count = density.bar_count,
        width = density.width,
        rotate,
        "x label rotation"
    );
    rotate
}

/// Tick sampling factor: the largest factor among met thresholds, else 1.
#[must_use]
pub fn calc_x_axis_factor(density: AxisDensity, table: &ThresholdTable) -> usize {
    let factor = table
        .met(density)
        .map(|threshold| threshold.x_axis_factor)
        .max()
        .unwrap_or(1);
    trace!(
        bar_count = density.bar_count,
        width = density.width,
        factor,
        "x axis factor"
    );
    factor
}

#[cfg(test)]
mod tests {
    use super::{
        AxisDensity, AxisThreshold, ThresholdTable, calc_x_axis_factor, should_rotate_x_labels,
    };

    #[test]
    fn smallest_threshold_rotates_with_factor_one() {
        let table = ThresholdTable::default();
        let density = AxisDensity::new(14, 800.0);
        assert!(should_rotate_x_labels(density, &table));
        assert_eq!(calc_x_axis_factor(density, &table), 1);
    }

    #[test]
    fn crowded_narrow_axis_uses_factor_two() {
        let table = ThresholdTable::default();
        let density = AxisDensity::new(30, 600.0);
        assert!(should_rotate_x_labels(density, &table));
        assert_eq!(calc_x_axis_factor(density, &table), 2);
    }

    #[test]
    fn sparse_axis_keeps_labels_flat() {
        let table = ThresholdTable::default();
        let density = AxisDensity::new(7, 900.0);
        assert!(!should_rotate_x_labels(density, &table));
        assert_eq!(calc_x_axis_factor(density, &table), 1);
    }

    #[test]
    fn largest_met_factor_wins_regardless_of_order() {
        let table = ThresholdTable::new(vec![
            AxisThreshold::new(1000.0, 10, 5),
            AxisThreshold::new(1000.0, 10, 2),
        ])
        .expect("table");
        assert_eq!(calc_x_axis_factor(AxisDensity::new(10, 1000.0), &table), 5);
    }

    #[test]
    fn invalid_tables_are_rejected() {
        assert!(ThresholdTable::new(Vec::new()).is_err());
        assert!(ThresholdTable::new(vec![AxisThreshold::new(100.0, 1, 0)]).is_err());
        assert!(ThresholdTable::new(vec![AxisThreshold::new(f64::NAN, 1, 1)]).is_err());
    }
}
