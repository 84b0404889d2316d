use criterion::{Criterion, criterion_group, criterion_main};
use stackbar::api::{
    BarLayout, ChartConfig, RenderInput, StackedBarChart, StackedBarProps, break_into_tspans,
    build_render_frame, build_scene,
};
use stackbar::core::{BarDatum, SeriesDescription, Viewport, build_keys_and_colors};
use stackbar::render::NullRenderer;
use std::hint::black_box;

const KEYS: [&str; 4] = ["Critical", "High", "Medium", "Low"];

fn rows(count: usize) -> Vec<BarDatum> {
    (0..count)
        .map(|i| {
            KEYS.iter().enumerate().fold(
                BarDatum::new(format!("Site {i}")),
                |datum, (k, key)| datum.with_value(*key, ((i * 7 + k * 3) % 11) as f64),
            )
        })
        .collect()
}

fn series() -> Vec<SeriesDescription> {
    KEYS.iter().map(|key| SeriesDescription::new(*key)).collect()
}

fn bench_scene_build_vertical_365(c: &mut Criterion) {
    let rows = rows(365);
    let styles = build_keys_and_colors(&series());
    let config = ChartConfig::new(BarLayout::Vertical);
    let input = RenderInput::new(Viewport::new(1600, 600));

    c.bench_function("scene_build_vertical_365", |b| {
        b.iter(|| {
            let _ = build_scene(
                black_box(&rows),
                black_box(&styles),
                black_box(&config),
                black_box(&input),
            )
            .expect("scene should build");
        })
    });
}

fn bench_render_frame_horizontal_50(c: &mut Criterion) {
    let rows = rows(50);
    let styles = build_keys_and_colors(&series());
    let config = ChartConfig::new(BarLayout::Horizontal);
    let input = RenderInput::new(Viewport::new(1200, 1400));
    let scene = build_scene(&rows, &styles, &config, &input).expect("scene should build");

    c.bench_function("render_frame_horizontal_50", |b| {
        b.iter(|| {
            let frame = build_render_frame(black_box(&scene), black_box(&config.theme));
            black_box(frame);
        })
    });
}

fn bench_chart_render_with_snapshot_json(c: &mut Criterion) {
    let props = StackedBarProps::new(rows(200), series());
    let mut chart = StackedBarChart::new(NullRenderer::default(), props).expect("chart init");
    let input = RenderInput::new(Viewport::new(1400, 700));

    c.bench_function("chart_render_with_snapshot_json_200", |b| {
        b.iter(|| {
            chart.render(black_box(&input)).expect("render");
            let snapshot = chart.snapshot(black_box(&input)).expect("snapshot");
            let _ = snapshot.to_json_pretty().expect("json");
        })
    });
}

fn bench_break_into_tspans(c: &mut Criterion) {
    let label = "Working at height near energized overhead lines without a spotter present";

    c.bench_function("break_into_tspans", |b| {
        b.iter(|| {
            let _ = break_into_tspans(black_box(label), black_box(36));
        })
    });
}

criterion_group!(
    benches,
    bench_scene_build_vertical_365,
    bench_render_frame_horizontal_50,
    bench_chart_render_with_snapshot_json,
    bench_break_into_tspans
);
criterion_main!(benches);
