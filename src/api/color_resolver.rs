use crate::core::{BarSegment, ColorSpec, KeysAndColors, SelectedDatum};
use crate::render::Color;

/// Whether `segment` is the externally selected datum.
#[must_use]
pub fn is_selected(segment: &BarSegment, selected: Option<&SelectedDatum>, multi_key: bool) -> bool {
    selected.is_some_and(|selected| selected.matches(segment, multi_key))
}

/// Fill color of `segment`: selected, then hover, then base color.
///
/// A series without a usable color is drawn with `Color::SENTINEL`.
#[must_use]
pub fn color_for_datum(
    segment: &BarSegment,
    styles: &KeysAndColors,
    selected: Option<&SelectedDatum>,
    hovering: bool,
) -> Color {
    let Some(style) = styles.style(&segment.id) else {
        return Color::SENTINEL;
    };

    let spec = if is_selected(segment, selected, styles.is_multi_key()) {
        style.selected_color.as_ref()
    } else if hovering {
        style.hover_color.as_ref()
    } else {
        style.color.as_ref()
    };

    resolve(spec, segment).unwrap_or(Color::SENTINEL)
}

/// Label color of `segment`, or `fallback` when the series has none.
#[must_use]
pub fn label_color_for_datum(segment: &BarSegment, styles: &KeysAndColors, fallback: Color) -> Color {
    styles
        .style(&segment.id)
        .and_then(|style| resolve(style.label_color.as_ref(), segment))
        .unwrap_or(fallback)
}

fn resolve(spec: Option<&ColorSpec>, segment: &BarSegment) -> Option<Color> {
    spec.and_then(|spec| spec.resolve(segment))
}
