use approx::assert_relative_eq;
use chrono::NaiveDate;
use stackbar::ChartError;
use stackbar::api::{
    BarLayout, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartConfig, ChartSnapshot, RenderInput,
    StackedBarChart, StackedBarProps,
};
use stackbar::core::{BarDatum, SeriesDescription, Viewport};
use stackbar::render::{Color, NullRenderer};

fn chart() -> StackedBarChart<NullRenderer> {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1).expect("date");
    let rows = (0..30)
        .map(|day| {
            let date = start + chrono::Days::new(day);
            BarDatum::new(date)
                .with_value("High", f64::from((day % 4) as u32))
                .with_value("Low", 1.0)
        })
        .collect();
    let series = vec![
        SeriesDescription::new("High").with_color(Color::rgb8(0xd0, 0x53, 0x53)),
        SeriesDescription::new("Low").with_color(Color::rgb8(0x5a, 0xa0, 0x5a)),
    ];
    let props =
        StackedBarProps::new(rows, series).with_config(ChartConfig::new(BarLayout::Vertical));
    StackedBarChart::new(NullRenderer::default(), props).expect("chart")
}

#[test]
fn snapshot_reports_axis_heuristics() {
    let snapshot = chart()
        .snapshot(&RenderInput::new(Viewport::new(670, 400)))
        .expect("snapshot");
    // plot width 670 - 50 - 20 = 600 with 30 bars
    assert!(snapshot.has_data);
    assert!(snapshot.x_labels_rotated);
    assert_eq!(snapshot.x_axis_factor, 2);
    assert_eq!(snapshot.max_value, 4.0);
    assert_eq!(snapshot.segments.len(), 60);
}

#[test]
fn snapshot_contract_round_trips() {
    let snapshot = chart()
        .snapshot(&RenderInput::new(Viewport::new(1200, 500)))
        .expect("snapshot");
    let json = snapshot.to_json_contract_v1_pretty().expect("contract");
    assert!(json.contains(&format!("\"schema_version\": {CHART_SNAPSHOT_JSON_SCHEMA_V1}")));

    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_same_snapshot(&parsed, &snapshot);

    let bare = snapshot.to_json_pretty().expect("bare");
    let parsed_bare = ChartSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_same_snapshot(&parsed_bare, &snapshot);
}

fn assert_same_snapshot(actual: &ChartSnapshot, expected: &ChartSnapshot) {
    assert_eq!(actual.viewport, expected.viewport);
    assert_eq!(actual.keys, expected.keys);
    assert_eq!(actual.x_axis_factor, expected.x_axis_factor);
    assert_eq!(actual.legend, expected.legend);
    assert_eq!(actual.segments.len(), expected.segments.len());
    for (a, e) in actual.segments.iter().zip(&expected.segments) {
        assert_eq!(a.segment.id, e.segment.id);
        assert_eq!(a.segment.index_value, e.segment.index_value);
        assert_eq!(a.color, e.color);
        assert_relative_eq!(a.segment.y, e.segment.y, epsilon = 1e-9);
        assert_relative_eq!(a.segment.height, e.segment.height, epsilon = 1e-9);
    }
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = chart()
        .snapshot(&RenderInput::new(Viewport::new(1200, 500)))
        .expect("snapshot");
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract")
        .replacen("\"schema_version\": 1", "\"schema_version\": 7", 1);
    let err = ChartSnapshot::from_json_compat_str(&json).expect_err("must reject");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn empty_chart_snapshot_has_no_segments() {
    let props = StackedBarProps::new(Vec::new(), vec![SeriesDescription::new("High")]);
    let chart = StackedBarChart::new(NullRenderer::default(), props).expect("chart");
    let snapshot = chart
        .snapshot(&RenderInput::new(Viewport::new(400, 300)))
        .expect("snapshot");
    assert!(!snapshot.has_data);
    assert!(snapshot.segments.is_empty());
    assert_eq!(snapshot.x_axis_factor, 1);
}
