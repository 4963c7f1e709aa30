//! Per-frame rotation of the cube group about the world Y axis

use glam::{Quat, Vec3};
use std::f32::consts::TAU;

/// Rotation of `speed` radians about +Y
pub fn spin_increment(speed: f32) -> Quat {
    Quat::from_axis_angle(Vec3::Y, speed)
}

/// Advance `orientation` by one frame.
///
/// The increment is applied in world space (`increment * orientation`), so
/// the cube keeps turning about world Y whatever its current orientation.
pub fn apply_spin(orientation: Quat, speed: f32) -> Quat {
    (spin_increment(speed) * orientation).normalize()
}

/// Yaw of a pure Y rotation, in `[0, 2π)`
pub fn yaw_of(orientation: Quat) -> f32 {
    let (axis, angle) = orientation.to_axis_angle();
    let signed = if axis.y < 0.0 { -angle } else { angle };
    signed.rem_euclid(TAU)
}
