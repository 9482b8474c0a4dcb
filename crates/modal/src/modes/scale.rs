//! Scale

use blendkeys_config::PivotMode;
use tracing::debug;

use crate::host::{EditorHost, ObjectTransform};
use crate::mode::ScaleState;
use crate::snapping::snap;
use crate::snapshot::Gesture;
use crate::viewport::Viewport;

use super::FrameInput;

/// Origin distances below this many pixels give no usable ratio
const MIN_ORIGIN_DISTANCE: f32 = 1e-3;

pub(crate) fn start_scale<H: EditorHost>(host: &H, gesture: &Gesture<H::ObjectId>) -> ScaleState {
    let origin_distance = host
        .viewport()
        .world_to_screen(gesture.center)
        .map_or(0.0, |pivot| gesture.mouse_start.distance(pivot));
    if origin_distance < MIN_ORIGIN_DISTANCE {
        debug!("Scale: cursor starts on the pivot, mouse scaling disabled");
    }
    ScaleState { origin_distance }
}

/// Scale by the ratio of the current cursor distance from the projected
/// pivot to the distance at start.
pub(crate) fn update_scale<H: EditorHost>(
    host: &mut H,
    gesture: &Gesture<H::ObjectId>,
    scale: &ScaleState,
    frame: &FrameInput,
) {
    let Some(pivot_screen) = host.viewport().world_to_screen(gesture.center) else {
        return;
    };

    let settings = host.settings();
    let snapping = frame.snap_active(settings);
    let increment = settings.snap.scale;
    let pivot_mode = settings.pivot_mode;

    let multiplier = match frame.exact {
        Some(value) => value,
        None if scale.origin_distance >= MIN_ORIGIN_DISTANCE => {
            frame.mouse.distance(pivot_screen) / scale.origin_distance
        }
        None => 1.0,
    };
    let multiplier = snap(multiplier, increment, snapping);

    for (id, original) in gesture.snapshot.iter() {
        let pivot = match pivot_mode {
            PivotMode::Center => gesture.center,
            PivotMode::Individual => original.position,
        };
        let scaled = original.scale * multiplier;
        let moved = pivot + (original.position - pivot) * multiplier;

        let (new_scale, position) = if frame.axes.is_empty() {
            (scaled, moved)
        } else {
            (
                frame.axes.select(scaled, original.scale),
                frame.axes.select(moved, original.position),
            )
        };

        let transform = ObjectTransform {
            position,
            scale: new_scale,
            ..*original
        };
        host.set_transform(*id, transform);
    }
}
