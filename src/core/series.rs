use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::warn;

use crate::core::BarSegment;
use crate::render::Color;

/// Color computed from the segment being drawn. `None` means "no color".
pub type ComputedColorFn = Arc<dyn Fn(&BarSegment) -> Option<Color> + Send + Sync + 'static>;

/// A series color that is either fixed or derived per segment.
#[derive(Clone)]
pub enum ColorSpec {
    Literal(Color),
    Computed(ComputedColorFn),
}

impl ColorSpec {
    #[must_use]
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&BarSegment) -> Option<Color> + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Resolves the spec for `segment`; `None` when a computed spec yields nothing.
    #[must_use]
    pub fn resolve(&self, segment: &BarSegment) -> Option<Color> {
        match self {
            Self::Literal(color) => Some(*color),
            Self::Computed(f) => f(segment),
        }
    }
}

impl fmt::Debug for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(color) => f.debug_tuple("Literal").field(color).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(value: Color) -> Self {
        Self::Literal(value)
    }
}

/// Declarative description of one stacked series.
#[derive(Debug, Clone, Default)]
pub struct SeriesDescription {
    pub key: Option<String>,
    pub color: Option<ColorSpec>,
    pub hover_color: Option<ColorSpec>,
    pub selected_color: Option<ColorSpec>,
    pub label_color: Option<ColorSpec>,
}

impl SeriesDescription {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_hover_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.hover_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_selected_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.selected_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.label_color = Some(color.into());
        self
    }
}

/// Series style after the hover/selected fallback chain is applied.
#[derive(Debug, Clone, Default)]
pub struct SeriesStyle {
    pub color: Option<ColorSpec>,
    pub hover_color: Option<ColorSpec>,
    pub selected_color: Option<ColorSpec>,
    pub label_color: Option<ColorSpec>,
}

impl From<&SeriesDescription> for SeriesStyle {
    fn from(desc: &SeriesDescription) -> Self {
        let color = desc.color.clone();
        let hover_color = desc.hover_color.clone().or_else(|| color.clone());
        let selected_color = desc.selected_color.clone().or_else(|| hover_color.clone());
        Self {
            color,
            hover_color,
            selected_color,
            label_color: desc.label_color.clone(),
        }
    }
}

/// Stable key order plus the resolved style of every key.
#[derive(Debug, Clone, Default)]
pub struct KeysAndColors {
    pub keys: Vec<String>,
    pub desc_by_key: IndexMap<String, SeriesStyle>,
}

impl KeysAndColors {
    #[must_use]
    pub fn is_multi_key(&self) -> bool {
        self.keys.len() > 1
    }

    #[must_use]
    pub fn style(&self, key: &str) -> Option<&SeriesStyle> {
        self.desc_by_key.get(key)
    }
}

/// Resolves series descriptions into a key order and a style table.
///
/// Descriptions without a (non-empty) key are dropped. When a key repeats,
/// its first position is kept and the last description wins the style.
#[must_use]
pub fn build_keys_and_colors(descriptions: &[SeriesDescription]) -> KeysAndColors {
    let mut resolved = KeysAndColors::default();
    let mut dropped = 0usize;

    for desc in descriptions {
        let Some(key) = desc.key.as_deref().filter(|key| !key.is_empty()) else {
            dropped += 1;
            continue;
        };
        if !resolved.desc_by_key.contains_key(key) {
            resolved.keys.push(key.to_owned());
        }
        resolved
            .desc_by_key
            .insert(key.to_owned(), SeriesStyle::from(desc));
    }

    if dropped > 0 {
        warn!(dropped, "ignoring series descriptions without a key");
    }

    resolved
}
