use std::fmt;

use tracing::debug;

use crate::core::{BarDatum, KeysAndColors, SeriesDescription, build_keys_and_colors};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartConfig;
use super::render_frame_builder::build_render_frame;
use super::scene::{ChartScene, RenderInput, build_scene};

/// Callback told whether the chart currently has anything to plot.
pub type HasDataCallback = Box<dyn FnMut(bool) + 'static>;

/// Inputs of a `StackedBarChart`.
pub struct StackedBarProps {
    pub data: Vec<BarDatum>,
    pub series: Vec<SeriesDescription>,
    pub config: ChartConfig,
    pub set_has_data: Option<HasDataCallback>,
}

impl StackedBarProps {
    #[must_use]
    pub fn new(data: Vec<BarDatum>, series: Vec<SeriesDescription>) -> Self {
        Self {
            data,
            series,
            config: ChartConfig::default(),
            set_has_data: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_set_has_data(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.set_has_data = Some(Box::new(callback));
        self
    }
}

/// Outcome of `StackedBarChart::render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Chart,
    Empty,
}

/// Stacked bar chart facade.
///
/// Owns the props and a renderer. Selection and hover are passed in with
/// every render; the only state kept between renders is the last has-data
/// value reported to the callback.
pub struct StackedBarChart<R: Renderer> {
    renderer: R,
    data: Vec<BarDatum>,
    styles: KeysAndColors,
    config: ChartConfig,
    set_has_data: Option<HasDataCallback>,
    reported_has_data: Option<bool>,
}

impl<R: Renderer> fmt::Debug for StackedBarChart<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackedBarChart")
            .field("rows", &self.data.len())
            .field("keys", &self.styles.keys)
            .field("layout", &self.config.layout)
            .field("reported_has_data", &self.reported_has_data)
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> StackedBarChart<R> {
    pub fn new(renderer: R, props: StackedBarProps) -> ChartResult<Self> {
        props.config.validate()?;
        let styles = build_keys_and_colors(&props.series);
        debug!(
            rows = props.data.len(),
            keys = styles.keys.len(),
            "stacked bar chart created"
        );
        Ok(Self {
            renderer,
            data: props.data,
            styles,
            config: props.config,
            set_has_data: props.set_has_data,
            reported_has_data: None,
        })
    }

    #[must_use]
    pub fn data(&self) -> &[BarDatum] {
        &self.data
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.styles.keys
    }

    #[must_use]
    pub fn styles(&self) -> &KeysAndColors {
        &self.styles
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn set_data(&mut self, data: Vec<BarDatum>) {
        self.data = data;
    }

    pub fn set_series(&mut self, series: &[SeriesDescription]) {
        self.styles = build_keys_and_colors(series);
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Lays out the chart without drawing it.
    pub fn build_scene(&self, input: &RenderInput) -> ChartResult<ChartScene> {
        build_scene(&self.data, &self.styles, &self.config, input)
    }

    /// Lays out, draws, and reports has-data transitions to the callback.
    pub fn render(&mut self, input: &RenderInput) -> ChartResult<RenderOutcome> {
        let scene = self.build_scene(input)?;
        self.report_has_data(scene.has_data());

        let frame = build_render_frame(&scene, &self.config.theme);
        self.renderer.render(&frame)?;

        Ok(if scene.has_data() {
            RenderOutcome::Chart
        } else {
            RenderOutcome::Empty
        })
    }

    fn report_has_data(&mut self, has_data: bool) {
        if self.reported_has_data == Some(has_data) {
            return;
        }
        self.reported_has_data = Some(has_data);
        if let Some(callback) = self.set_has_data.as_mut() {
            callback(has_data);
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
