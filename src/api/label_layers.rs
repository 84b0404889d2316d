use serde::{Deserialize, Serialize};

use crate::core::{BandScale, BarSegment, KeysAndColors, LinearScale};
use crate::render::{Color, TextHAlign};

use super::Theme;
use super::axis_renderers::format_value;
use super::color_resolver::label_color_for_datum;

/// Bars narrower than this get their value label beside them.
pub const OUTSIDE_LABEL_THRESHOLD_PX: f64 = 40.0;
/// Columns must be wider than this to carry a `(0)` annotation.
pub const ZERO_LABEL_MIN_BAND_PX: f64 = 8.0;
pub const ZERO_LABEL_TEXT: &str = "(0)";

const LABEL_INSET_PX: f64 = 4.0;
const ZERO_LABEL_OFFSET_PX: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelPlacement {
    Inside,
    Outside,
    Above,
}

/// Positioned value label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
    pub color: Color,
    pub placement: LabelPlacement,
}

/// Value label for a horizontal bar segment.
///
/// Narrow segments put the label just past the bar end, start-anchored, in
/// the outside text color. Wider ones overlay it, end-anchored, in the
/// series label color. Segments drawn with no length (zero or negative
/// values) have no label.
#[must_use]
pub fn horizontal_bar_label(
    segment: &BarSegment,
    styles: &KeysAndColors,
    theme: &Theme,
) -> Option<BarLabel> {
    if segment.value <= 0.0 {
        return None;
    }

    let y = segment.y + segment.height * 0.5;
    let end = segment.x + segment.width;
    let label = if segment.width < OUTSIDE_LABEL_THRESHOLD_PX {
        BarLabel {
            text: format_value(segment.value),
            x: end + LABEL_INSET_PX,
            y,
            h_align: TextHAlign::Left,
            color: theme.outside_label_text,
            placement: LabelPlacement::Outside,
        }
    } else {
        BarLabel {
            text: format_value(segment.value),
            x: end - LABEL_INSET_PX,
            y,
            h_align: TextHAlign::Right,
            color: label_color_for_datum(segment, styles, theme.label_text),
            placement: LabelPlacement::Inside,
        }
    };
    Some(label)
}

/// `(0)` annotation above column `index` when its stacked total is exactly zero.
///
/// Emitted once per category, independent of which series the row carries.
#[must_use]
pub fn vertical_zero_label(
    index: usize,
    total: f64,
    band: BandScale,
    value_scale: LinearScale,
    theme: &Theme,
) -> Option<BarLabel> {
    if total != 0.0 || band.bandwidth() <= ZERO_LABEL_MIN_BAND_PX {
        return None;
    }
    let x = band.band_center(index)?;
    Some(BarLabel {
        text: ZERO_LABEL_TEXT.to_owned(),
        x,
        y: value_scale.map(0.0) - ZERO_LABEL_OFFSET_PX,
        h_align: TextHAlign::Center,
        color: theme.axis_text,
        placement: LabelPlacement::Above,
    })
}

#[cfg(test)]
mod tests {
    use super::{LabelPlacement, horizontal_bar_label, vertical_zero_label};
    use crate::api::Theme;
    use crate::core::{
        BandScale, BarSegment, IndexValue, LinearScale, SeriesDescription, build_keys_and_colors,
    };
    use crate::render::{Color, TextHAlign};

    fn segment(value: f64, width: f64) -> BarSegment {
        BarSegment {
            id: "High".to_owned(),
            index: 0,
            index_value: IndexValue::from("Crew A"),
            value,
            x: 100.0,
            y: 20.0,
            width,
            height: 30.0,
        }
    }

    #[test]
    fn narrow_bar_label_sits_outside_in_black() {
        let styles = build_keys_and_colors(&[SeriesDescription::new("High")]);
        let label = horizontal_bar_label(&segment(2.0, 39.0), &styles, &Theme::default())
            .expect("label");
        assert_eq!(label.placement, LabelPlacement::Outside);
        assert_eq!(label.h_align, TextHAlign::Left);
        assert_eq!(label.color, Color::BLACK);
        assert_eq!(label.x, 143.0);
        assert_eq!(label.y, 35.0);
    }

    #[test]
    fn wide_bar_label_overlays_end_of_bar() {
        let blue = Color::rgb(0.0, 0.0, 1.0);
        let styles =
            build_keys_and_colors(&[SeriesDescription::new("High").with_label_color(blue)]);
        let label = horizontal_bar_label(&segment(12.0, 40.0), &styles, &Theme::default())
            .expect("label");
        assert_eq!(label.placement, LabelPlacement::Inside);
        assert_eq!(label.h_align, TextHAlign::Right);
        assert_eq!(label.color, blue);
        assert_eq!(label.x, 136.0);
        assert_eq!(label.text, "12");
    }

    #[test]
    fn zero_segment_has_no_label() {
        let styles = build_keys_and_colors(&[SeriesDescription::new("High")]);
        assert!(horizontal_bar_label(&segment(0.0, 0.0), &styles, &Theme::default()).is_none());
        assert!(horizontal_bar_label(&segment(-3.0, 0.0), &styles, &Theme::default()).is_none());
    }

    #[test]
    fn zero_annotation_requires_zero_total_and_wide_band() {
        let theme = Theme::default();
        let value_scale = LinearScale::new(0.0, 10.0, 200.0, 0.0).expect("value");
        let wide = BandScale::new(4, 0.0, 400.0, 0.3).expect("wide");
        let narrow = BandScale::new(40, 0.0, 400.0, 0.3).expect("narrow");

        let label = vertical_zero_label(1, 0.0, wide, value_scale, &theme).expect("label");
        assert_eq!(label.text, "(0)");
        assert_eq!(label.y, 194.0);
        assert_eq!(label.x, wide.band_center(1).expect("center"));

        assert!(vertical_zero_label(1, 3.0, wide, value_scale, &theme).is_none());
        assert!(vertical_zero_label(1, 0.0, narrow, value_scale, &theme).is_none());
    }
}
