use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use glam::{Quat, Vec2};
use instant::Instant;
use parallax_core::{LayerHost, ParallaxConfig, ParallaxController, TickOutcome};
use rand::prelude::*;

const FRAME_DT: Duration = Duration::from_micros(16_667); // 60 Hz
const DEFAULT_FRAMES: usize = 1_200;
const LOG_EVERY_FRAMES: usize = 60;
const SWEEP_DEG_PER_SEC: f32 = 75.0; // ~2.5 turns over the default run
const JITTER_DEG: f32 = 0.6; // sensor noise amplitude

// Back to front: the front layer swings the most.
const SCENE_LAYERS: [(f32, f32); 4] = [(0.0, -0.6), (0.0, -0.2), (0.0, 0.2), (0.0, 0.6)];
const SCENE_DEPTH_FACTORS: [f32; 4] = [1.0, 0.6, 0.3, 0.1];

/// In-memory stand-in for an engine's layer transforms.
#[derive(Default)]
struct SceneLayers {
    centers: Vec<Vec2>,
    status: String,
}

impl LayerHost for SceneLayers {
    fn layer_count(&self) -> usize {
        self.centers.len()
    }

    fn layer_center(&self, index: usize) -> Vec2 {
        self.centers[index]
    }

    fn set_layer_center(&mut self, index: usize, center: Vec2) {
        if let Some(c) = self.centers.get_mut(index) {
            *c = center;
        }
    }

    fn set_status_text(&mut self, text: &str) {
        self.status = text.to_string();
    }
}

/// Device yaw sweeping at a constant rate with seeded sensor jitter.
struct SyntheticDevice {
    yaw_deg: f32,
    rng: StdRng,
}

impl SyntheticDevice {
    fn new(seed: u64) -> Self {
        Self {
            yaw_deg: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn step(&mut self, dt: Duration) -> Quat {
        let jitter = self.rng.gen_range(-JITTER_DEG..=JITTER_DEG);
        self.yaw_deg += SWEEP_DEG_PER_SEC * dt.as_secs_f32() + jitter;
        Quat::from_rotation_y(self.yaw_deg.to_radians())
    }
}

fn env_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {name}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn config_from_env() -> anyhow::Result<ParallaxConfig> {
    let defaults = ParallaxConfig::default();
    Ok(ParallaxConfig::default()
        .with_depth_factors(SCENE_DEPTH_FACTORS)
        .with_wrap_around(env_or("PARALLAX_WRAP", defaults.wrap_around)?)
        .with_smoothing(env_or("PARALLAX_SMOOTHING", defaults.smoothing_factor)?)
        .with_speed(env_or("PARALLAX_SPEED", defaults.speed_multiplier)?)
        .with_test_mode(env_or("PARALLAX_TEST_MODE", defaults.test_mode)?)
        .with_debug_logging(env_or("PARALLAX_DEBUG", defaults.debug_logging)?))
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let frames: usize = env_or("PARALLAX_FRAMES", DEFAULT_FRAMES)?;
    let config = config_from_env()?;
    let scene = SceneLayers {
        centers: SCENE_LAYERS.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
        ..Default::default()
    };

    let mut controller =
        ParallaxController::new(config, scene).context("building parallax controller")?;
    log::info!(
        "[native] status={:?} layers={} frames={}",
        controller.host().status,
        controller.layers().len(),
        frames
    );

    let mut device = SyntheticDevice::new(42);
    let mut skipped = 0usize;
    let start = Instant::now();
    for frame in 0..frames {
        if frame == frames / 2 {
            controller.reset_layers();
            log::info!("[native] frame {frame}: layers reset");
        }

        let orientation = device.step(FRAME_DT);
        match controller.tick(orientation) {
            TickOutcome::Applied { angle_deg } if frame % LOG_EVERY_FRAMES == 0 => {
                let xs = controller
                    .host()
                    .centers
                    .iter()
                    .map(|c| format!("{:+.3}", c.x))
                    .collect::<Vec<_>>()
                    .join(" ");
                log::info!("[native] frame {frame:>5} angle={angle_deg:+8.2} x=[{xs}]");
            }
            TickOutcome::Applied { .. } => {}
            TickOutcome::Skipped { .. } => skipped += 1,
        }
    }

    log::info!(
        "[native] done: {} frames ({} skipped) in {:.2?}",
        frames,
        skipped,
        start.elapsed()
    );
    Ok(())
}
