//! Grab (translate)

use blendkeys_config::PivotRotation;
use glam::{Vec2, Vec3};
use tracing::trace;

use crate::host::{EditorHost, ObjectTransform};
use crate::mode::GrabState;
use crate::snapping::snap_vec3;
use crate::snapshot::Gesture;
use crate::viewport::Viewport;

use super::FrameInput;

/// Cursor hit on the camera-facing plane through the selection center.
fn drag_anchor<H: EditorHost>(host: &H, gesture: &Gesture<H::ObjectId>, mouse: Vec2) -> Option<Vec3> {
    let viewport = host.viewport();
    viewport
        .screen_ray(mouse)
        .and_then(|ray| ray.intersect_plane(gesture.center, viewport.forward()))
}

/// Anchor the grab at the cursor position the gesture started from.
///
/// When that ray misses the drag plane the offset is taken from the first
/// update that hits it.
pub(crate) fn start_grab<H: EditorHost>(host: &H, gesture: &Gesture<H::ObjectId>) -> GrabState {
    GrabState {
        offset: drag_anchor(host, gesture, gesture.mouse_start).map(|anchor| gesture.center - anchor),
    }
}

/// Move the selection so it follows the cursor on the camera-facing plane
/// through the selection center.
pub(crate) fn update_grab<H: EditorHost>(
    host: &mut H,
    gesture: &Gesture<H::ObjectId>,
    grab: &mut GrabState,
    frame: &FrameInput,
) {
    let Some(anchor) = drag_anchor(host, gesture, frame.mouse) else {
        trace!("Grab: cursor ray misses the drag plane");
        return;
    };

    // Relative to where the cursor first hit the plane, not snapped to it
    let offset = *grab.offset.get_or_insert(gesture.center - anchor);

    let settings = host.settings();
    let snapping = frame.snap_active(settings);
    let increment = Vec3::from_array(settings.snap.translate);
    let local = !frame.axes.is_empty() && settings.pivot_rotation == PivotRotation::Local;

    if local {
        let mut delta = offset - (gesture.center - anchor);
        if let Some(value) = frame.exact {
            delta = Vec3::splat(value);
        }
        let delta = snap_vec3(frame.axes.mask(delta), increment, snapping);

        for (id, original) in gesture.snapshot.iter() {
            let transform = ObjectTransform {
                position: original.position + original.rotation * delta,
                ..*original
            };
            host.set_transform(*id, transform);
        }
        return;
    }

    for (id, original) in gesture.snapshot.iter() {
        let target = anchor + offset + (original.position - gesture.center);
        let position = if frame.axes.is_empty() {
            target
        } else {
            // A typed number is the absolute coordinate on the masked axes
            let target = frame.exact.map_or(target, Vec3::splat);
            frame.axes.select(target, original.position)
        };

        let transform = ObjectTransform {
            position: snap_vec3(position, increment, snapping),
            ..*original
        };
        host.set_transform(*id, transform);
    }
}
