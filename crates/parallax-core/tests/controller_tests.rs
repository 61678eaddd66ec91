// Host-side tests for the parallax controller, driven through an in-memory host.

use glam::{Quat, Vec2};
use parallax_core::*;

#[derive(Default)]
struct TestLayers {
    centers: Vec<Vec2>,
    status: Option<String>,
    writes: usize,
}

impl TestLayers {
    fn with_centers(centers: &[Vec2]) -> Self {
        Self {
            centers: centers.to_vec(),
            ..Default::default()
        }
    }
}

impl LayerHost for TestLayers {
    fn layer_count(&self) -> usize {
        self.centers.len()
    }
    fn layer_center(&self, index: usize) -> Vec2 {
        self.centers[index]
    }
    fn set_layer_center(&mut self, index: usize, center: Vec2) {
        self.centers[index] = center;
        self.writes += 1;
    }
    fn set_status_text(&mut self, text: &str) {
        self.status = Some(text.to_string());
    }
}

fn two_layer_controller(config: ParallaxConfig) -> ParallaxController<TestLayers> {
    let host = TestLayers::with_centers(&[Vec2::new(0.1, 0.3), Vec2::new(-0.2, -0.4)]);
    ParallaxController::new(config, host).unwrap()
}

fn snap_config() -> ParallaxConfig {
    ParallaxConfig::default()
        .with_depth_factors([1.0, 0.5])
        .with_range(-1.0, 1.0)
        .with_smoothing(1.0)
        .with_wrap_around(true)
        .with_speed(1.0)
}

#[test]
fn two_layers_follow_a_quarter_turn() {
    let mut c = two_layer_controller(snap_config());

    assert!(c.tick_yaw(0.0).is_applied());
    assert_eq!(c.layers()[0].target_offset, 0.0);
    assert_eq!(c.layers()[1].target_offset, 0.0);

    assert_eq!(c.tick_yaw(90.0), TickOutcome::Applied { angle_deg: 90.0 });
    assert!((c.layers()[0].target_offset - 0.5).abs() < 1e-6);
    assert!((c.layers()[1].target_offset - 0.25).abs() < 1e-6);
    assert!((c.host().centers[0].x - 0.5).abs() < 1e-6);
    assert!((c.host().centers[1].x - 0.25).abs() < 1e-6);
}

#[test]
fn orientation_tick_matches_yaw_tick() {
    let mut c = two_layer_controller(snap_config());
    c.tick(Quat::IDENTITY);
    c.tick(Quat::from_rotation_y(90f32.to_radians()));
    assert!((c.layers()[0].current_offset - 0.5).abs() < 1e-4);
    assert!((c.layers()[1].current_offset - 0.25).abs() < 1e-4);
}

#[test]
fn only_x_is_animated() {
    let mut c = two_layer_controller(snap_config());
    c.tick_yaw(0.0);
    c.tick_yaw(-60.0);
    assert_eq!(c.host().centers[0].y, 0.3);
    assert_eq!(c.host().centers[1].y, -0.4);
}

#[test]
fn test_mode_uses_full_factor_for_every_layer() {
    let config = snap_config()
        .with_depth_factors([0.2, -0.5])
        .with_test_mode(true);
    let mut c = two_layer_controller(config);
    assert_eq!(c.host().status.as_deref(), Some(STATUS_PARALLAX_OFF));
    c.tick_yaw(0.0);
    c.tick_yaw(90.0);
    for (i, layer) in c.layers().iter().enumerate() {
        assert!(
            (layer.target_offset - 0.5).abs() < 1e-6,
            "layer {i} target {} ignored test mode",
            layer.target_offset
        );
    }
}

#[test]
fn status_text_reports_parallax_on_outside_test_mode() {
    let c = two_layer_controller(snap_config());
    assert_eq!(c.host().status.as_deref(), Some(STATUS_PARALLAX_ON));
}

#[test]
fn zero_depth_factor_pins_layer_to_range_midpoint() {
    // Property: any rotation leaves a zero-factor layer at the midpoint
    let config = snap_config()
        .with_depth_factors([0.0, 0.0])
        .with_range(2.0, 6.0);
    let mut c = two_layer_controller(config);
    for step in -36..=36 {
        c.tick_yaw(step as f32 * 10.0);
        for layer in c.layers() {
            assert_eq!(layer.target_offset, 4.0);
        }
    }
}

#[test]
fn snap_smoothing_reaches_target_in_one_tick() {
    let mut c = two_layer_controller(snap_config());
    for yaw in [12.0f32, -75.5, 133.0, 179.0, -179.0, 3.0] {
        c.tick_yaw(yaw);
        for layer in c.layers() {
            assert_eq!(layer.current_offset, layer.target_offset);
        }
    }
}

#[test]
fn partial_smoothing_eases_towards_target() {
    let mut c = two_layer_controller(snap_config().with_smoothing(0.5));
    c.tick_yaw(0.0);
    c.tick_yaw(90.0);
    let l0 = c.layers()[0];
    assert!((l0.target_offset - 0.5).abs() < 1e-6);
    assert!((l0.current_offset - 0.25).abs() < 1e-6);
    c.tick_yaw(90.0);
    assert!((c.layers()[0].current_offset - 0.375).abs() < 1e-6);
}

#[test]
fn zero_smoothing_disables_easing() {
    let mut c = two_layer_controller(snap_config().with_smoothing(0.0));
    c.tick_yaw(0.0);
    c.tick_yaw(-90.0);
    assert!((c.layers()[0].current_offset + 0.5).abs() < 1e-6);
}

#[test]
fn large_depth_factor_saturates_at_full_range() {
    let mut c = two_layer_controller(snap_config().with_depth_factors([3.0, -3.0]));
    c.tick_yaw(0.0);
    c.tick_yaw(90.0);
    assert!((c.layers()[0].target_offset - 0.5).abs() < 1e-6);
    assert!((c.layers()[1].target_offset + 0.5).abs() < 1e-6);
}

#[test]
fn layer_without_depth_factor_is_left_alone() {
    let mut c = two_layer_controller(snap_config().with_depth_factors([1.0]));
    c.tick_yaw(0.0);
    c.tick_yaw(45.0);
    assert_eq!(c.host().centers[1], Vec2::new(-0.2, -0.4));
    assert_eq!(c.layers()[1].current_offset, 0.0);
    assert_eq!(c.layers()[1].target_offset, 0.0);
}

#[test]
fn continuous_mode_saturates_past_half_turn() {
    let config = snap_config().with_wrap_around(false).with_speed(2.0);
    let mut c = two_layer_controller(config);
    c.tick_yaw(0.0);
    for step in 1..=20 {
        c.tick_yaw(step as f32 * 15.0);
    }
    assert_eq!(c.tracker().state().accumulated_deg, 180.0);
    assert_eq!(c.layers()[0].target_offset, 1.0);
    assert_eq!(c.layers()[1].target_offset, 0.5);
}

#[test]
fn wrap_mode_speed_is_applied_per_tick_only() {
    let config = snap_config().with_speed(2.0);
    let mut c = two_layer_controller(config);
    c.tick_yaw(30.0);
    assert_eq!(c.tick_yaw(30.0), TickOutcome::Applied { angle_deg: 60.0 });
    assert_eq!(c.tick_yaw(120.0), TickOutcome::Applied { angle_deg: 180.0 });
}

#[test]
fn reset_restores_captured_anchors() {
    let mut c = two_layer_controller(snap_config());
    c.tick_yaw(0.0);
    c.tick_yaw(120.0);
    c.reset_layers();
    assert_eq!(c.host().centers[0], Vec2::new(0.1, 0.3));
    assert_eq!(c.host().centers[1], Vec2::new(-0.2, -0.4));
    for layer in c.layers() {
        assert_eq!(layer.current_offset, 0.0);
        assert_eq!(layer.target_offset, 0.0);
    }
    assert!(!c.tracker().is_initialized());
}

#[test]
fn reset_twice_equals_reset_once() {
    let mut c = two_layer_controller(snap_config().with_smoothing(0.3));
    c.tick_yaw(10.0);
    c.tick_yaw(70.0);
    c.reset_layers();
    let layers_once = c.layers().to_vec();
    let centers_once = c.host().centers.clone();
    let tracker_once = c.tracker().state();
    c.reset_layers();
    assert_eq!(c.layers(), layers_once.as_slice());
    assert_eq!(c.host().centers, centers_once);
    assert_eq!(c.tracker().state(), tracker_once);
}

#[test]
fn reset_before_first_tick_is_harmless() {
    let mut c = two_layer_controller(snap_config());
    c.reset_layers();
    assert_eq!(c.host().centers[0], Vec2::new(0.1, 0.3));
    assert!(c.tick_yaw(0.0).is_applied());
}

#[test]
fn reset_reanchors_rotation_without_drift() {
    let config = snap_config().with_wrap_around(false);
    let mut c = two_layer_controller(config);
    c.tick_yaw(0.0);
    c.tick_yaw(80.0);
    c.reset_layers();
    // First reading after a reset is taken as is
    assert_eq!(c.tick_yaw(-20.0), TickOutcome::Applied { angle_deg: -20.0 });
}

#[test]
fn non_finite_orientation_freezes_everything() {
    let mut c = two_layer_controller(snap_config().with_smoothing(0.5));
    c.tick_yaw(0.0);
    c.tick_yaw(40.0);
    let layers = c.layers().to_vec();
    let tracker = c.tracker().state();
    let writes = c.host().writes;

    let bad = Quat::from_xyzw(f32::NAN, 0.0, 0.0, 1.0);
    assert!(matches!(c.tick(bad), TickOutcome::Skipped { .. }));
    assert!(matches!(c.tick_yaw(f32::INFINITY), TickOutcome::Skipped { .. }));

    assert_eq!(c.layers(), layers.as_slice());
    assert_eq!(c.tracker().state(), tracker);
    assert_eq!(c.host().writes, writes);
    assert!(c.tick_yaw(40.0).is_applied());
}

#[test]
fn reversed_range_is_swapped_at_setup() {
    let c = two_layer_controller(snap_config().with_range(1.0, -1.0));
    assert_eq!(c.config().min_x, -1.0);
    assert_eq!(c.config().max_x, 1.0);
}

#[test]
fn invalid_config_is_rejected() {
    let host = TestLayers::with_centers(&[Vec2::ZERO]);
    let err = ParallaxController::new(snap_config().with_speed(0.0), host)
        .err()
        .unwrap();
    assert_eq!(err, ConfigError::NonPositiveSpeed(0.0));
}

#[test]
fn host_that_lost_layers_is_not_indexed_past_its_end() {
    let mut c = two_layer_controller(snap_config());
    c.host_mut().centers.truncate(1);
    assert!(c.tick_yaw(30.0).is_applied());
    c.reset_layers();
    assert_eq!(c.into_host().centers.len(), 1);
}
