//! Tick-driven controller that ties the tracker and the offset engine to a host.
//!
//! The host owns the on-screen layers and the orientation sensor; the
//! controller only reads layer anchors once at setup and writes them back
//! every tick. Everything runs synchronously on the caller's frame loop.

use crate::angle::{normalize_angle_180, yaw_from_orientation};
use crate::config::{ConfigError, ParallaxConfig};
use crate::constants::{STATUS_PARALLAX_OFF, STATUS_PARALLAX_ON};
use crate::offset::{compute_offset, LayerState};
use crate::tracker::{AngleError, AngleTracker};
use glam::{Quat, Vec2};
use smallvec::SmallVec;

/// Layers, status text and anchor positions provided by the embedding engine.
pub trait LayerHost {
    fn layer_count(&self) -> usize;
    fn layer_center(&self, index: usize) -> Vec2;
    fn set_layer_center(&mut self, index: usize, center: Vec2);
    /// Optional one-line status display.
    fn set_status_text(&mut self, _text: &str) {}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Positions were written using this working angle (degrees).
    Applied { angle_deg: f32 },
    /// The input was unusable; all state was held and nothing was written.
    Skipped { reason: AngleError },
}

impl TickOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TickOutcome::Applied { .. })
    }
}

pub struct ParallaxController<H: LayerHost> {
    config: ParallaxConfig,
    tracker: AngleTracker,
    layers: SmallVec<[LayerState; 8]>,
    host: H,
}

impl<H: LayerHost> ParallaxController<H> {
    /// Validate `config`, capture every layer's current anchor and reset tracking.
    pub fn new(config: ParallaxConfig, mut host: H) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        host.set_status_text(if config.test_mode {
            STATUS_PARALLAX_OFF
        } else {
            STATUS_PARALLAX_ON
        });

        let layers = (0..host.layer_count())
            .map(|i| LayerState::new(host.layer_center(i)))
            .collect::<SmallVec<[LayerState; 8]>>();
        let tracker = AngleTracker::new(config.speed_multiplier, config.wrap_around);

        if config.debug_logging {
            log::info!(
                "[parallax] controller initialized with {} layers",
                layers.len()
            );
            if config.depth_factors.len() < layers.len() {
                log::info!(
                    "[parallax] {} layer(s) have no depth factor and will not move",
                    layers.len() - config.depth_factors.len()
                );
            }
        }

        Ok(Self {
            config,
            tracker,
            layers,
            host,
        })
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    pub fn layers(&self) -> &[LayerState] {
        &self.layers
    }

    pub fn tracker(&self) -> &AngleTracker {
        &self.tracker
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Run one frame from the current device orientation.
    pub fn tick(&mut self, orientation: Quat) -> TickOutcome {
        if !orientation.is_finite() {
            return self.skip(AngleError::NonFinite(f32::NAN));
        }
        self.tick_yaw(yaw_from_orientation(orientation))
    }

    /// Run one frame from a yaw reading in degrees (any range).
    pub fn tick_yaw(&mut self, raw_yaw_deg: f32) -> TickOutcome {
        let tracked = match self.tracker.update(normalize_angle_180(raw_yaw_deg)) {
            Ok(t) => t,
            Err(e) => return self.skip(e),
        };
        let angle_deg = tracked.selected(self.config.wrap_around, self.config.speed_multiplier);

        let host_layers = self.host.layer_count();
        for (i, layer) in self.layers.iter_mut().enumerate() {
            if i >= host_layers {
                break;
            }
            let Some(depth_factor) = self.config.depth_factor(i) else {
                continue;
            };
            compute_offset(angle_deg, depth_factor, layer, &self.config);
            self.host.set_layer_center(i, layer.position());
        }

        if self.config.debug_logging {
            let mode = if self.config.wrap_around {
                "wrapped"
            } else {
                "clamped"
            };
            let suffix = if self.config.test_mode {
                " - TEST MODE"
            } else {
                ""
            };
            log::info!("[parallax] Y rotation ({mode}, speed-adjusted): {angle_deg:.2}{suffix}");
        }
        TickOutcome::Applied { angle_deg }
    }

    /// Put every layer back on its captured anchor and drop the rotation anchor.
    ///
    /// Safe to call at any time, including before the first tick.
    pub fn reset_layers(&mut self) {
        let host_layers = self.host.layer_count();
        for (i, layer) in self.layers.iter_mut().enumerate() {
            if i < host_layers {
                self.host.set_layer_center(i, layer.initial_offset);
            }
            layer.clear_offsets();
        }
        self.tracker.reset();
        if self.config.debug_logging {
            log::info!("[parallax] layers reset to initial positions");
        }
    }

    fn skip(&self, reason: AngleError) -> TickOutcome {
        log::warn!("[parallax] tick skipped: {reason}");
        TickOutcome::Skipped { reason }
    }
}
