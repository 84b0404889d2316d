use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Design tokens plus the colors each chart role draws with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub tokens: IndexMap<String, Color>,
    pub background: Color,
    pub grid: Color,
    pub axis_text: Color,
    /// Text drawn on top of a bar.
    pub label_text: Color,
    /// Text drawn next to a bar, over the background.
    pub outside_label_text: Color,
    pub empty_text: Color,
    pub font_size_px: f64,
}

impl Theme {
    /// Looks up a design token by name.
    #[must_use]
    pub fn token(&self, name: &str) -> Option<Color> {
        self.tokens.get(name).copied()
    }

    pub fn require_token(&self, name: &str) -> ChartResult<Color> {
        self.token(name)
            .ok_or_else(|| ChartError::InvalidConfig(format!("unknown design token `{name}`")))
    }

    #[must_use]
    pub fn with_token(mut self, name: impl Into<String>, color: Color) -> Self {
        self.tokens.insert(name.into(), color);
        self
    }
}

const PALETTE: [(&str, Color); 8] = [
    ("risk.high", Color::rgb8(0xd0, 0x53, 0x53)),
    ("risk.medium", Color::rgb8(0xe8, 0xa3, 0x3d)),
    ("risk.low", Color::rgb8(0x5a, 0xa0, 0x5a)),
    ("risk.unknown", Color::rgb8(0x9c, 0xa8, 0xac)),
    ("brand.primary", Color::rgb8(0x33, 0x90, 0xa3)),
    ("neutral.shade.100", Color::rgb8(0x04, 0x1e, 0x25)),
    ("neutral.shade.5", Color::rgb8(0xf0, 0xf3, 0xf4)),
    ("neutral.light.100", Color::WHITE),
];

impl Default for Theme {
    fn default() -> Self {
        let tokens: IndexMap<String, Color> = PALETTE
            .iter()
            .map(|(name, color)| ((*name).to_owned(), *color))
            .collect();
        let text = Color::rgb8(0x04, 0x1e, 0x25);
        Self {
            tokens,
            background: Color::WHITE,
            grid: Color::rgb8(0xf0, 0xf3, 0xf4),
            axis_text: text,
            label_text: Color::WHITE,
            outside_label_text: Color::BLACK,
            empty_text: Color::rgb8(0x9c, 0xa8, 0xac),
            font_size_px: 12.0,
        }
    }
}
