use crate::error::{ChartError, ChartResult};

use super::ChartConfig;
use super::tick_label::MIN_MAX_LINE_LENGTH;

pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    if !config.padding.is_finite() || !(0.0..1.0).contains(&config.padding) {
        return Err(ChartError::InvalidData(
            "bar padding must be in [0, 1)".to_owned(),
        ));
    }

    let margins = config.margins;
    for (side, value) in [
        ("top", margins.top),
        ("right", margins.right),
        ("bottom", margins.bottom),
        ("left_vertical", margins.left_vertical),
        ("left_horizontal", margins.left_horizontal),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margin `{side}` must be finite and >= 0"
            )));
        }
    }

    if let Some(legend) = &config.legend {
        if !legend.width.is_finite() || legend.width < 0.0 {
            return Err(ChartError::InvalidData(
                "legend width must be finite and >= 0".to_owned(),
            ));
        }
    }

    if config.max_line_length < MIN_MAX_LINE_LENGTH {
        return Err(ChartError::InvalidData(format!(
            "max line length must be >= {MIN_MAX_LINE_LENGTH}"
        )));
    }

    if !config.theme.font_size_px.is_finite() || config.theme.font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "theme font size must be finite and > 0".to_owned(),
        ));
    }

    if config.empty_state_text.is_empty() {
        return Err(ChartError::InvalidData(
            "empty state text must not be empty".to_owned(),
        ));
    }

    Ok(())
}
