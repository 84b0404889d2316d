use serde::{Deserialize, Serialize};

use crate::core::{Margins, ThresholdTable};
use crate::error::{ChartError, ChartResult};

use super::Theme;
use super::tick_label::DEFAULT_MAX_LINE_LENGTH;
use super::validation::validate_chart_config;

/// Direction bars grow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarLayout {
    /// Columns grow upward; categories run along the bottom axis.
    #[default]
    Vertical,
    /// Bars grow rightward; categories run down the left axis.
    Horizontal,
}

/// Base margins; the left side depends on the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginBehavior {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left_vertical: f64,
    /// Wider, to leave room for wrapped category labels.
    pub left_horizontal: f64,
}

impl Default for MarginBehavior {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 60.0,
            left_vertical: 50.0,
            left_horizontal: 220.0,
        }
    }
}

/// Legend drawn in the right margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default)]
    pub title: Option<String>,
    /// Extra right margin reserved for the legend.
    #[serde(default = "default_legend_width")]
    pub width: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: default_legend_width(),
        }
    }
}

/// Serializable chart configuration.
///
/// Every field has a default so partial JSON documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub layout: BarLayout,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub margins: MarginBehavior,
    #[serde(default)]
    pub legend: Option<LegendConfig>,
    #[serde(default)]
    pub thresholds: ThresholdTable,
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    #[serde(default)]
    pub axis_bottom_legend: Option<String>,
    #[serde(default)]
    pub axis_left_legend: Option<String>,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_empty_state_text")]
    pub empty_state_text: String,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: BarLayout::default(),
            padding: default_padding(),
            margins: MarginBehavior::default(),
            legend: None,
            thresholds: ThresholdTable::default(),
            max_line_length: default_max_line_length(),
            axis_bottom_legend: None,
            axis_left_legend: None,
            date_format: default_date_format(),
            empty_state_text: default_empty_state_text(),
            theme: Theme::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(layout: BarLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: MarginBehavior) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: ThresholdTable) -> Self {
        self.thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    #[must_use]
    pub fn with_axis_bottom_legend(mut self, legend: impl Into<String>) -> Self {
        self.axis_bottom_legend = Some(legend.into());
        self
    }

    #[must_use]
    pub fn with_axis_left_legend(mut self, legend: impl Into<String>) -> Self {
        self.axis_left_legend = Some(legend.into());
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    #[must_use]
    pub fn with_empty_state_text(mut self, text: impl Into<String>) -> Self {
        self.empty_state_text = text.into();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Margins for the configured layout, widened on the right for a legend.
    #[must_use]
    pub fn resolved_margins(&self) -> Margins {
        let left = match self.layout {
            BarLayout::Vertical => self.margins.left_vertical,
            BarLayout::Horizontal => self.margins.left_horizontal,
        };
        let legend_width = self.legend.as_ref().map_or(0.0, |legend| legend.width);
        Margins::new(
            self.margins.top,
            self.margins.right + legend_width,
            self.margins.bottom,
            left,
        )
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_chart_config(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn default_padding() -> f64 {
    0.3
}

fn default_legend_width() -> f64 {
    120.0
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_date_format() -> String {
    "%b %d".to_owned()
}

fn default_empty_state_text() -> String {
    "No data to display".to_owned()
}

#[cfg(test)]
mod tests {
    use super::{BarLayout, ChartConfig, LegendConfig};

    #[test]
    fn horizontal_layout_uses_wider_left_margin() {
        let vertical = ChartConfig::new(BarLayout::Vertical).resolved_margins();
        let horizontal = ChartConfig::new(BarLayout::Horizontal).resolved_margins();
        assert!(horizontal.left > vertical.left);
    }

    #[test]
    fn legend_widens_right_margin() {
        let plain = ChartConfig::default().resolved_margins();
        let with_legend = ChartConfig::default()
            .with_legend(LegendConfig::default())
            .resolved_margins();
        assert_eq!(with_legend.right, plain.right + 120.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = ChartConfig::from_json_str(r#"{ "layout": "Horizontal" }"#).expect("config");
        assert_eq!(config.layout, BarLayout::Horizontal);
        assert_eq!(config.max_line_length, 36);
        assert_eq!(config.padding, 0.3);
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = ChartConfig::default().with_legend(LegendConfig {
            title: Some("Risk".to_owned()),
            width: 140.0,
        });
        let json = config.to_json_pretty().expect("serialize");
        let parsed = ChartConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn invalid_json_values_are_rejected() {
        assert!(ChartConfig::from_json_str(r#"{ "padding": 1.5 }"#).is_err());
        assert!(ChartConfig::from_json_str(r#"{ "thresholds": [] }"#).is_err());
        assert!(ChartConfig::from_json_str("not json").is_err());
    }
}
