//! Angle helpers shared by the tracker and the hosts.
//!
//! All angles are in degrees. Yaw is measured about the vertical (+Y) axis,
//! with 0° facing +Z and positive values turning towards +X.

use crate::constants::{FULL_TURN_DEG, HALF_TURN_DEG};
use glam::{Quat, Vec3};

/// Reduce `angle_deg` modulo 360 into (-180, 180].
///
/// `%` keeps the sign of the dividend, so negative inputs are folded back
/// explicitly. Non-finite inputs come back non-finite.
pub fn normalize_angle_180(angle_deg: f32) -> f32 {
    let mut angle = angle_deg % FULL_TURN_DEG;
    if angle > HALF_TURN_DEG {
        angle -= FULL_TURN_DEG;
    }
    if angle <= -HALF_TURN_DEG {
        angle += FULL_TURN_DEG;
    }
    angle
}

/// Yaw of `orientation` in degrees, normalized to (-180, 180].
///
/// The forward axis (+Z) is rotated by the orientation and projected onto the
/// horizontal plane, so pitch and roll do not leak into the result unless the
/// forward vector is close to vertical.
pub fn yaw_from_orientation(orientation: Quat) -> f32 {
    let forward = orientation * Vec3::Z;
    let yaw_radians = forward.x.atan2(forward.z);
    normalize_angle_180(yaw_radians.to_degrees())
}

/// Saturate `value` into `[lo, hi]`.
///
/// Unlike `f32::clamp` this never panics; callers guarantee `lo <= hi`.
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}
