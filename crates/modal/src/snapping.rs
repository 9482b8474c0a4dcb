//! Grid quantization shared by the translate, rotate and scale channels.

use glam::Vec3;

/// Round `value` to the nearest multiple of `increment` when `active`.
///
/// Increments that are not positive and finite leave the value untouched.
pub fn snap(value: f32, increment: f32, active: bool) -> f32 {
    if !active || !(increment.is_finite() && increment > 0.0) {
        return value;
    }
    (value / increment).round() * increment
}

/// Component-wise [`snap`] with a per-axis increment.
pub fn snap_vec3(value: Vec3, increment: Vec3, active: bool) -> Vec3 {
    Vec3::new(
        snap(value.x, increment.x, active),
        snap(value.y, increment.y, active),
        snap(value.z, increment.z, active),
    )
}
