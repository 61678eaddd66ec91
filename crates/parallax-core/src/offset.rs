//! Per-layer offset computation.
//!
//! A layer's target X is the selected yaw mapped onto the configured
//! `[min_x, max_x]` range, scaled by the layer's depth factor. The displayed
//! X then eases towards the target with a first-order exponential lag.

use crate::angle::clamp;
use crate::config::ParallaxConfig;
use crate::constants::{HALF_TURN_DEG, TEST_MODE_DEPTH_FACTOR};
use glam::Vec2;

/// Animated state of a single layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerState {
    /// Anchor center captured at setup. Only its Y is reused while ticking.
    pub initial_offset: Vec2,
    pub current_offset: f32,
    pub target_offset: f32,
}

impl LayerState {
    pub fn new(initial_offset: Vec2) -> Self {
        Self {
            initial_offset,
            current_offset: 0.0,
            target_offset: 0.0,
        }
    }

    /// Anchor center to hand to the host: animated X, original Y.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.current_offset, self.initial_offset.y)
    }

    pub fn clear_offsets(&mut self) {
        self.current_offset = 0.0;
        self.target_offset = 0.0;
    }
}

/// Midpoint and half-width of the horizontal range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetRange {
    pub min_x: f32,
    pub max_x: f32,
}

impl OffsetRange {
    pub fn new(min_x: f32, max_x: f32) -> Self {
        Self { min_x, max_x }
    }

    #[inline]
    pub fn mid(&self) -> f32 {
        (self.max_x + self.min_x) / 2.0
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        (self.max_x - self.min_x) / 2.0
    }

    /// Half-width scaled by the depth factor. The sign of the factor flips the
    /// swing; magnitudes above 1 saturate at the full half-width.
    pub fn effective_half_width(&self, depth_factor: f32) -> f32 {
        self.half_width() * (depth_factor / depth_factor.abs().max(1.0))
    }

    /// Unsmoothed target X for a normalized rotation.
    pub fn target(&self, normalized_rotation: f32, depth_factor: f32) -> f32 {
        let raw = self.mid() + normalized_rotation * self.effective_half_width(depth_factor);
        clamp(raw, self.min_x, self.max_x)
    }
}

/// One exponential-lag step from `current` towards `target`.
///
/// `smoothing_factor <= 0` disables easing and `>= 1` snaps, both landing
/// exactly on the target.
#[inline]
pub fn smooth_towards(current: f32, target: f32, smoothing_factor: f32) -> f32 {
    if smoothing_factor > 0.0 && smoothing_factor < 1.0 {
        current + (target - current) * smoothing_factor
    } else {
        target
    }
}

/// Advance one layer by one tick and return its new displayed X.
///
/// `selected_angle_deg` is not clamped here: a continuous angle beyond a half
/// turn widens the swing until the range clamp catches it.
pub fn compute_offset(
    selected_angle_deg: f32,
    depth_factor: f32,
    state: &mut LayerState,
    config: &ParallaxConfig,
) -> f32 {
    let normalized = selected_angle_deg / HALF_TURN_DEG;
    let factor = if config.test_mode {
        TEST_MODE_DEPTH_FACTOR
    } else {
        depth_factor
    };
    let range = config.range();

    state.target_offset = range.target(normalized, factor);
    state.current_offset = smooth_towards(
        state.current_offset,
        state.target_offset,
        config.smoothing_factor,
    );
    state.current_offset
}
