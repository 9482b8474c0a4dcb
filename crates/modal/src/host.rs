//! The seam between the modal tool and the editor that embeds it.

use std::fmt::Debug;

use blendkeys_config::TransformSettings;
use glam::{Quat, Vec3};

use crate::viewport::Viewport;

/// World position, world rotation and local scale of one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl ObjectTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Rotate around `pivot`, moving the position along with the orientation.
    pub fn rotate_around(&mut self, pivot: Vec3, rotation: Quat) {
        self.position = pivot + rotation * (self.position - pivot);
        self.rotation = (rotation * self.rotation).normalize();
    }
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Everything the modal tool needs from the editor.
///
/// The tool never stores the host; every operation borrows it for the duration
/// of the call.
pub trait EditorHost {
    type ObjectId: Copy + Eq + Debug;
    type Viewport: Viewport;

    /// Selected top-level objects in selection order.
    fn selection(&self) -> Vec<Self::ObjectId>;

    /// The most recently selected object, used for local axes.
    fn primary(&self) -> Option<Self::ObjectId>;

    /// Current transform, or `None` if the object no longer exists.
    fn transform(&self, id: Self::ObjectId) -> Option<ObjectTransform>;

    fn set_transform(&mut self, id: Self::ObjectId, transform: ObjectTransform);

    fn viewport(&self) -> &Self::Viewport;

    fn settings(&self) -> &TransformSettings;

    /// Record an undo entry for `ids` under `label`.
    ///
    /// The current state of `ids` is the entry's before-state; writes made
    /// after this call form its after-state.
    fn record_undo(&mut self, ids: &[Self::ObjectId], label: &str);
}
