use serde::{Deserialize, Serialize};

use crate::core::{BarSegment, IndexValue, KeysAndColors};
use crate::render::Color;

use super::color_resolver::color_for_datum;

pub const LEGEND_SYMBOL_PX: f64 = 12.0;
pub const LEGEND_ITEM_HEIGHT_PX: f64 = 20.0;
pub const LEGEND_OFFSET_PX: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub key: String,
    pub color: Color,
}

/// Legend entries in key order.
///
/// Computed colors are probed with an empty placeholder segment of the series.
#[must_use]
pub fn build_legend_items(styles: &KeysAndColors) -> Vec<LegendItem> {
    styles
        .keys
        .iter()
        .map(|key| {
            let probe = BarSegment {
                id: key.clone(),
                index: 0,
                index_value: IndexValue::Text(String::new()),
                value: 0.0,
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            };
            LegendItem {
                key: key.clone(),
                color: color_for_datum(&probe, styles, None, false),
            }
        })
        .collect()
}
