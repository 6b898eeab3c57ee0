//! Eased scroll state for the smoother.
//!
//! `ScrollState` decouples the rendered content offset from the raw scroll
//! offset. The scroll handler only writes `current`; each frame moves
//! `displayed` a fixed fraction of the way toward it. Convergence is counted
//! in frames, not seconds, so a throttled tab simply catches up later.

use crate::constants::{DEFAULT_EASE, ROUNDING_SCALE, SKEW_FACTOR};
use crate::math::{norm, round_to};
use crate::viewport::ViewportMetrics;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("ease must be strictly between 0 and 1, got {0}")]
    EaseOutOfRange(f64),
    #[error("ease is not a number: {0:?}")]
    NotANumber(String),
}

/// Smoother tuning. Construct through [`ScrollConfig::new`] to keep
/// `0 < ease < 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    ease: f64,
    pub skew_factor: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            ease: DEFAULT_EASE,
            skew_factor: SKEW_FACTOR,
        }
    }
}

impl ScrollConfig {
    pub fn new(ease: f64) -> Result<Self, ConfigError> {
        // NaN fails both comparisons
        if !(ease > 0.0 && ease < 1.0) {
            return Err(ConfigError::EaseOutOfRange(ease));
        }
        Ok(Self {
            ease,
            ..Self::default()
        })
    }

    /// Parses an ease value as written in a DOM attribute.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let ease = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::NotANumber(raw.to_string()))?;
        Self::new(ease)
    }

    #[inline]
    pub fn ease(&self) -> f64 {
        self.ease
    }
}

/// Transform applied to the content element for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentTransform {
    /// Rounded displayed offset; the content moves up by this much.
    pub offset: f64,
    pub skew_deg: f64,
}

impl fmt::Display for ContentTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate3d(0, {}px, 0) skewY({}deg)",
            -self.offset, self.skew_deg
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    current: f64,
    displayed: f64,
    rounded: f64,
    config: ScrollConfig,
}

impl ScrollState {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            current: 0.0,
            displayed: 0.0,
            rounded: 0.0,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Raw offset from the last scroll event.
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// `displayed` to two decimals, as last rendered.
    #[inline]
    pub fn rounded(&self) -> f64 {
        self.rounded
    }

    /// Records the raw scroll offset. No other field changes until the next frame.
    #[inline]
    pub fn on_scroll(&mut self, offset: f64) {
        self.current = offset;
    }

    /// Drops any eased lag so the next frame renders exactly at `current`.
    pub fn resync(&mut self) {
        self.displayed = self.current;
        self.rounded = self.current;
        log::debug!("[scroll] resync at {:.2}", self.current);
    }

    /// Advances one frame and returns the transform to apply.
    pub fn step(&mut self, viewport: &ViewportMetrics) -> ContentTransform {
        self.displayed += (self.current - self.displayed) * self.config.ease;
        self.rounded = round_to(self.displayed, ROUNDING_SCALE);

        let diff = self.current - self.rounded;
        let velocity = if viewport.has_width() {
            norm(diff, 0.0, viewport.width)
        } else {
            0.0
        };
        ContentTransform {
            offset: self.rounded,
            skew_deg: velocity * self.config.skew_factor,
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}
