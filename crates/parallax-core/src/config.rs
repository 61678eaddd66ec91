//! Controller configuration and its validation.

use crate::constants::*;
use crate::offset::OffsetRange;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("depth factor for layer {index} must be finite")]
    NonFiniteDepthFactor { index: usize },
    #[error("smoothing factor {0} is outside [0, 1]")]
    SmoothingOutOfRange(f32),
    #[error("speed multiplier {0} must be greater than zero")]
    NonPositiveSpeed(f32),
}

/// Immutable settings of a parallax controller.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// One factor per layer, in layer order. Layers past the end are not animated.
    pub depth_factors: Vec<f32>,
    pub min_x: f32,
    pub max_x: f32,
    pub smoothing_factor: f32,
    pub speed_multiplier: f32,
    pub wrap_around: bool,
    /// Forces every layer to the full range so parallax can be judged by eye.
    pub test_mode: bool,
    pub debug_logging: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            depth_factors: Vec::new(),
            min_x: DEFAULT_MIN_X,
            max_x: DEFAULT_MAX_X,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            wrap_around: DEFAULT_WRAP_AROUND,
            test_mode: false,
            debug_logging: false,
        }
    }
}

impl ParallaxConfig {
    pub fn with_depth_factors(mut self, factors: impl Into<Vec<f32>>) -> Self {
        self.depth_factors = factors.into();
        self
    }

    pub fn with_range(mut self, min_x: f32, max_x: f32) -> Self {
        self.min_x = min_x;
        self.max_x = max_x;
        self
    }

    pub fn with_smoothing(mut self, smoothing_factor: f32) -> Self {
        self.smoothing_factor = smoothing_factor;
        self
    }

    pub fn with_speed(mut self, speed_multiplier: f32) -> Self {
        self.speed_multiplier = speed_multiplier;
        self
    }

    pub fn with_wrap_around(mut self, wrap_around: bool) -> Self {
        self.wrap_around = wrap_around;
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_debug_logging(mut self, debug_logging: bool) -> Self {
        self.debug_logging = debug_logging;
        self
    }

    pub fn range(&self) -> OffsetRange {
        OffsetRange::new(self.min_x, self.max_x)
    }

    pub fn depth_factor(&self, layer_index: usize) -> Option<f32> {
        self.depth_factors.get(layer_index).copied()
    }

    /// Check the settings and normalize a reversed range.
    ///
    /// `min_x > max_x` is repaired by swapping the bounds. Depth factors with a
    /// magnitude above 1 are kept; the offset mapping saturates them.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("min_x", self.min_x),
            ("max_x", self.max_x),
            ("smoothing_factor", self.smoothing_factor),
            ("speed_multiplier", self.speed_multiplier),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if let Some(index) = self.depth_factors.iter().position(|f| !f.is_finite()) {
            return Err(ConfigError::NonFiniteDepthFactor { index });
        }
        if !(0.0..=1.0).contains(&self.smoothing_factor) {
            return Err(ConfigError::SmoothingOutOfRange(self.smoothing_factor));
        }
        if self.speed_multiplier <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.speed_multiplier));
        }

        if self.min_x > self.max_x {
            log::warn!(
                "[parallax] min_x {:.3} > max_x {:.3}; swapping bounds",
                self.min_x,
                self.max_x
            );
            std::mem::swap(&mut self.min_x, &mut self.max_x);
        }
        if !(SPEED_MULTIPLIER_UI_MIN..=SPEED_MULTIPLIER_UI_MAX).contains(&self.speed_multiplier) {
            log::debug!(
                "[parallax] speed multiplier {:.2} outside the usual [{}, {}]",
                self.speed_multiplier,
                SPEED_MULTIPLIER_UI_MIN,
                SPEED_MULTIPLIER_UI_MAX
            );
        }
        for (i, f) in self.depth_factors.iter().enumerate() {
            if f.abs() > 1.0 {
                log::debug!("[parallax] depth factor {f:.2} on layer {i} saturates at 1.0");
            }
        }
        Ok(self)
    }
}
