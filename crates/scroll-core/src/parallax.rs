use crate::constants::{PARALLAX_EVEN_RATE, PARALLAX_EXTRAPOLATION, PARALLAX_ODD_RATE};
use crate::math::lerp;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub even_rate: f64,
    pub odd_rate: f64,
    pub extrapolation: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            even_rate: PARALLAX_EVEN_RATE,
            odd_rate: PARALLAX_ODD_RATE,
            extrapolation: PARALLAX_EXTRAPOLATION,
        }
    }
}

/// Background offsets for a parity-alternating set of parallax layers.
///
/// Odd layers are shifted by a baseline taken from the scroll offset at
/// construction, so they start at zero wherever the page was loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxState {
    scroll_position: f64,
    baseline: f64,
    config: ParallaxConfig,
}

impl ParallaxState {
    /// `initial_scroll` also seeds `scroll_position` so the first frame,
    /// which may run before any scroll event, is well defined.
    pub fn new(initial_scroll: f64, config: ParallaxConfig) -> Self {
        let baseline = lerp(
            initial_scroll,
            initial_scroll * config.odd_rate,
            config.extrapolation,
        );
        Self {
            scroll_position: initial_scroll,
            baseline,
            config,
        }
    }

    #[inline]
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    #[inline]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    #[inline]
    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll_position = offset;
    }

    /// Vertical background offset in pixels for the layer at `index`.
    pub fn offset_for(&self, index: usize) -> f64 {
        let p = self.scroll_position;
        let t = self.config.extrapolation;
        if index % 2 != 0 {
            lerp(p, p * self.config.odd_rate, t) - self.baseline
        } else {
            lerp(p, p * self.config.even_rate, t)
        }
    }

    pub fn offsets(&self, count: usize) -> impl Iterator<Item = f64> + '_ {
        (0..count).map(move |i| self.offset_for(i))
    }
}
