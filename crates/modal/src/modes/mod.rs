//! Per-frame update math for grab, rotate and scale.
//!
//! Every update starts from the snapshot, never from the previous frame, so
//! errors cannot compound over a long gesture.

mod grab;
mod rotate;
mod scale;

use blendkeys_config::TransformSettings;
use glam::Vec2;

use crate::constraint::AxisMask;

pub(crate) use grab::{start_grab, update_grab};
pub(crate) use rotate::update_rotate;
pub(crate) use scale::{start_scale, update_scale};

/// Tool state sampled once per update.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameInput {
    pub mouse: Vec2,
    pub axes: AxisMask,
    /// Typed override, already validated
    pub exact: Option<f32>,
    /// Snap modifier held
    pub snapping: bool,
}

impl FrameInput {
    pub fn snap_active(&self, settings: &TransformSettings) -> bool {
        settings.snap.grid_snap_enabled || self.snapping
    }
}
