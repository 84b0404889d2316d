pub(super) const VALUE_AXIS_TARGET_SPACING_PX: f64 = 50.0;
pub(super) const VALUE_AXIS_MIN_TICKS: usize = 2;
pub(super) const VALUE_AXIS_MAX_TICKS: usize = 10;

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Step of 1, 2 or 5 times a power of ten that yields about `target_count` ticks.
pub(super) fn nice_step(max: f64, target_count: usize) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let intervals = target_count.saturating_sub(1).max(1) as f64;
    let raw = max / intervals;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual >= 50f64.sqrt() {
        10.0
    } else if residual >= 10f64.sqrt() {
        5.0
    } else if residual >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    nice * magnitude
}

/// Tick values from zero up to `max`, inclusive when `max` lands on a step.
pub(super) fn nice_ticks(max: f64, target_count: usize) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0];
    }
    let step = nice_step(max, target_count);
    let count = (max / step + 1e-9).floor() as usize;
    (0..=count).map(|i| (i as f64) * step).collect()
}

/// Indices of the categories that keep a tick when sampling every `factor`-th one.
pub(super) fn sampled_indices(count: usize, factor: usize) -> Vec<usize> {
    (0..count).step_by(factor.max(1)).collect()
}
