use stackbar::ChartError;
use stackbar::api::{BarLayout, ChartConfig, LegendConfig, Theme};
use stackbar::core::{AxisThreshold, ThresholdTable};
use stackbar::render::Color;

#[test]
fn config_json_round_trip_keeps_custom_thresholds() {
    let table = ThresholdTable::new(vec![
        AxisThreshold::new(900.0, 10, 1),
        AxisThreshold::new(600.0, 20, 3),
    ])
    .expect("table");
    let config = ChartConfig::new(BarLayout::Horizontal)
        .with_thresholds(table.clone())
        .with_legend(LegendConfig::default())
        .with_axis_left_legend("Crew")
        .with_theme(Theme::default().with_token("risk.high", Color::rgb8(0xaa, 0x00, 0x00)));

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed.thresholds, table);
    assert_eq!(parsed.axis_left_legend.as_deref(), Some("Crew"));
    assert_eq!(
        parsed.theme.token("risk.high"),
        Some(Color::rgb8(0xaa, 0x00, 0x00))
    );
    assert_eq!(parsed, config);
}

#[test]
fn theme_colors_are_written_as_hex() {
    let json = ChartConfig::default().to_json_pretty().expect("serialize");
    assert!(json.contains("\"background\": \"#ffffff\""));
}

#[test]
fn threshold_with_zero_factor_fails_to_load() {
    let err = ChartConfig::from_json_str(
        r#"{ "thresholds": [ { "max_width": 500.0, "min_bar_count": 5, "x_axis_factor": 0 } ] }"#,
    )
    .expect_err("zero factor must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn too_short_line_length_fails_validation() {
    let err = ChartConfig::default()
        .with_max_line_length(3)
        .validate()
        .expect_err("must reject");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn bad_hex_color_fails_to_load() {
    let json = ChartConfig::default()
        .to_json_pretty()
        .expect("serialize")
        .replace("#ffffff", "#ffff");
    assert!(ChartConfig::from_json_str(&json).is_err());
}

#[test]
fn normalized_theme_colors_survive_json_round_trip() {
    let gray = Color::rgb(0.5, 0.5, 0.5);
    let config = ChartConfig::default().with_theme(
        Theme::default()
            .with_token("neutral.mid", gray)
            .with_token("overlay", Color::rgba(0.2, 0.4, 0.6, 0.3)),
    );

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed.theme.token("neutral.mid"), Some(gray));
    assert_eq!(parsed, config);
}
