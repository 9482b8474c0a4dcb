//! Rotate

use blendkeys_config::{PivotMode, PivotRotation};
use glam::{Quat, Vec2};
use tracing::debug;

use crate::host::EditorHost;
use crate::snapping::snap;
use crate::snapshot::Gesture;
use crate::viewport::Viewport;

use super::FrameInput;

/// Rotate the selection by the angle the cursor has swept around the
/// projected selection center.
pub(crate) fn update_rotate<H: EditorHost>(
    host: &mut H,
    gesture: &Gesture<H::ObjectId>,
    frame: &FrameInput,
) {
    let viewport = host.viewport();
    let Some(pivot_screen) = viewport.world_to_screen(gesture.center) else {
        return;
    };
    let forward = viewport.forward();
    let view_axis = viewport
        .screen_ray(pivot_screen)
        .map_or(forward, |ray| ray.direction);

    let settings = host.settings();
    let snapping = frame.snap_active(settings);
    let increment = settings.snap.rotate;
    let pivot_mode = settings.pivot_mode;
    let pivot_rotation = settings.pivot_rotation;

    let angle = frame.exact.unwrap_or_else(|| {
        screen_angle(
            gesture.mouse_start - pivot_screen,
            frame.mouse - pivot_screen,
        )
    });
    let angle = snap(angle, increment, snapping);

    let axis = match frame.axes.rotation_axis() {
        None => view_axis,
        Some(axis) => match pivot_rotation {
            PivotRotation::Global => axis.unit(),
            PivotRotation::Local => primary_rotation(host, gesture) * axis.unit(),
        },
    };
    let axis = axis.try_normalize().unwrap_or(forward);
    let rotation = Quat::from_axis_angle(axis, angle.to_radians());

    for (id, original) in gesture.snapshot.iter() {
        let pivot = match pivot_mode {
            PivotMode::Center => gesture.center,
            PivotMode::Individual => original.position,
        };
        let mut transform = *original;
        transform.rotate_around(pivot, rotation);
        host.set_transform(*id, transform);
    }
}

/// Angle in degrees swept from `from` to `to`, in [0, 360).
///
/// Screen space is y-down, so a positive cross product is a clockwise sweep
/// as the user sees it; counter-clockwise sweeps wrap to `360 - angle`.
pub(crate) fn screen_angle(from: Vec2, to: Vec2) -> f32 {
    let cross = from.perp_dot(to);
    let angle = cross.abs().atan2(from.dot(to)).to_degrees();
    if cross < 0.0 { 360.0 - angle } else { angle }
}

/// Orientation of the primary object at gesture start.
fn primary_rotation<H: EditorHost>(host: &H, gesture: &Gesture<H::ObjectId>) -> Quat {
    let Some(primary) = host.primary() else {
        debug!("Rotate: no primary object, falling back to world axes");
        return Quat::IDENTITY;
    };

    gesture
        .snapshot
        .get(primary)
        .map(|t| t.rotation)
        .or_else(|| host.transform(primary).map(|t| t.rotation))
        .unwrap_or(Quat::IDENTITY)
}
