use crate::error::{ChartError, ChartResult};

/// Maps a numeric domain onto a pixel range.
///
/// The range may be reversed (`range_start > range_end`) for value axes that
/// grow upward on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Pixel length covered by `value` units, independent of direction.
    #[must_use]
    pub fn length(self, value: f64) -> f64 {
        (self.map(value) - self.map(0.0)).abs()
    }
}

/// Splits a pixel range into equal bands, one per category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    range_start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `padding` is the share of each step left empty between bands, in `[0, 1)`.
    ///
    /// Half of a step's padding is also applied at both outer edges.
    pub fn new(count: usize, range_start: f64, range_end: f64, padding: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() || range_end <= range_start {
            return Err(ChartError::InvalidData(
                "band range must be finite and increasing".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be in [0, 1)".to_owned(),
            ));
        }

        let step = if count == 0 {
            0.0
        } else {
            (range_end - range_start) / (count as f64)
        };
        Ok(Self {
            count,
            range_start,
            step,
            bandwidth: step * (1.0 - padding),
        })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    /// Start pixel of band `index`, or `None` past the last band.
    #[must_use]
    pub fn band_start(self, index: usize) -> Option<f64> {
        (index < self.count).then(|| {
            self.range_start + self.step * (index as f64) + (self.step - self.bandwidth) * 0.5
        })
    }

    #[must_use]
    pub fn band_center(self, index: usize) -> Option<f64> {
        self.band_start(index).map(|start| start + self.bandwidth * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{BandScale, LinearScale};

    #[test]
    fn reversed_range_maps_zero_to_bottom() {
        let scale = LinearScale::new(0.0, 100.0, 400.0, 0.0).expect("scale");
        assert_relative_eq!(scale.map(0.0), 400.0);
        assert_relative_eq!(scale.map(25.0), 300.0);
        assert_relative_eq!(scale.length(25.0), 100.0);
    }

    #[test]
    fn linear_scale_rejects_zero_span() {
        assert!(LinearScale::new(5.0, 5.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn bands_are_centered_inside_steps() {
        let scale = BandScale::new(4, 0.0, 400.0, 0.2).expect("band");
        assert_relative_eq!(scale.step(), 100.0);
        assert_relative_eq!(scale.bandwidth(), 80.0);
        assert_relative_eq!(scale.band_start(0).expect("band 0"), 10.0);
        assert_relative_eq!(scale.band_center(3).expect("band 3"), 350.0);
        assert!(scale.band_start(4).is_none());
    }

    #[test]
    fn band_scale_rejects_full_padding() {
        assert!(BandScale::new(3, 0.0, 100.0, 1.0).is_err());
    }
}
