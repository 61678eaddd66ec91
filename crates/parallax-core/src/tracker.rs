//! Continuous yaw tracking.
//!
//! Raw yaw readings jump from 180° to -180° when the device turns past the
//! back of the range. The tracker unwraps those readings along the shortest
//! path so a physical rotation never moves the accumulated angle by more than
//! a half turn (times the speed multiplier) in one tick.

use crate::angle::clamp;
use crate::constants::{FULL_TURN_DEG, HALF_TURN_DEG};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AngleError {
    #[error("non-finite yaw reading: {0}")]
    NonFinite(f32),
}

/// Tracker memory between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngleState {
    pub previous_raw_deg: f32,
    pub accumulated_deg: f32,
    pub initialized: bool,
}

/// Both angle representations produced by one tracker update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedAngle {
    /// The raw reading, in (-180, 180].
    pub wrapped: f32,
    /// Speed-scaled sum of unwrapped deltas since the last re-anchor.
    pub continuous: f32,
}

impl TrackedAngle {
    /// Angle the offset engine should consume for this tick.
    ///
    /// Wrap mode scales the raw reading by the speed multiplier and clamps it
    /// to a half turn; nothing carries over between ticks. Continuous mode uses
    /// the accumulated angle as is (the tracker already clamped it).
    pub fn selected(&self, wrap_around: bool, speed_multiplier: f32) -> f32 {
        if wrap_around {
            clamp(
                self.wrapped * speed_multiplier,
                -HALF_TURN_DEG,
                HALF_TURN_DEG,
            )
        } else {
            self.continuous
        }
    }
}

#[derive(Clone, Debug)]
pub struct AngleTracker {
    state: AngleState,
    speed_multiplier: f32,
    wrap_around: bool,
}

impl AngleTracker {
    pub fn new(speed_multiplier: f32, wrap_around: bool) -> Self {
        Self {
            state: AngleState::default(),
            speed_multiplier,
            wrap_around,
        }
    }

    pub fn state(&self) -> AngleState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    /// Ingest one raw yaw reading in (-180, 180].
    ///
    /// Non-finite readings are rejected and leave the state untouched.
    pub fn update(&mut self, raw_deg: f32) -> Result<TrackedAngle, AngleError> {
        if !raw_deg.is_finite() {
            return Err(AngleError::NonFinite(raw_deg));
        }

        if !self.state.initialized {
            self.state = AngleState {
                previous_raw_deg: raw_deg,
                accumulated_deg: raw_deg,
                initialized: true,
            };
            return Ok(TrackedAngle {
                wrapped: raw_deg,
                continuous: raw_deg,
            });
        }

        let mut diff = raw_deg - self.state.previous_raw_deg;
        if diff > HALF_TURN_DEG {
            diff -= FULL_TURN_DEG;
        }
        if diff < -HALF_TURN_DEG {
            diff += FULL_TURN_DEG;
        }
        diff *= self.speed_multiplier;

        let mut accumulated = self.state.accumulated_deg + diff;
        // Without wrap-around the angle must not build up debt past a half
        // turn, or re-enabling wrap later would snap the layers back.
        if !self.wrap_around {
            accumulated = clamp(accumulated, -HALF_TURN_DEG, HALF_TURN_DEG);
        }
        if !accumulated.is_finite() {
            return Err(AngleError::NonFinite(accumulated));
        }

        self.state.accumulated_deg = accumulated;
        self.state.previous_raw_deg = raw_deg;
        Ok(TrackedAngle {
            wrapped: raw_deg,
            continuous: accumulated,
        })
    }

    /// Forget the anchor; the next update starts from scratch.
    pub fn reset(&mut self) {
        self.state.initialized = false;
    }
}
