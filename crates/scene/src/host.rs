//! ECS adapter for the modal tool's host seam

use std::collections::HashMap;

use bevy::math::Affine3A;
use bevy::prelude::*;
use blendkeys_config::TransformSettings;
use blendkeys_modal::{EditorHost, ObjectTransform, Ray, Viewport};

use crate::EditorCamera;
use crate::history::{HistoryEntry, TransformHistory};

/// World frame of an entity's parent.
///
/// The modal tool works in world position and world rotation; entities store
/// them relative to their parent. Scale stays local.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentFrame {
    affine: Affine3A,
    inverse: Affine3A,
    rotation: Quat,
}

impl ParentFrame {
    /// Frame of an entity without a parent
    pub const ROOT: Self = Self {
        affine: Affine3A::IDENTITY,
        inverse: Affine3A::IDENTITY,
        rotation: Quat::IDENTITY,
    };

    pub fn from_global(parent: &GlobalTransform) -> Self {
        let affine = parent.affine();
        Self {
            affine,
            inverse: affine.inverse(),
            rotation: parent.rotation(),
        }
    }

    pub fn to_world(&self, local: &Transform) -> ObjectTransform {
        ObjectTransform {
            position: self.affine.transform_point3(local.translation),
            rotation: self.rotation * local.rotation,
            scale: local.scale,
        }
    }

    pub fn write_local(&self, target: &mut Transform, world: ObjectTransform) {
        target.translation = self.inverse.transform_point3(world.position);
        target.rotation = self.rotation.inverse() * world.rotation;
        target.scale = world.scale;
    }
}

/// Snapshot of the editor camera for one frame
pub struct BevyViewport {
    camera: Camera,
    transform: GlobalTransform,
}

impl BevyViewport {
    pub fn new(camera: &Camera, transform: &GlobalTransform) -> Self {
        Self {
            camera: camera.clone(),
            transform: *transform,
        }
    }
}

impl Viewport for BevyViewport {
    fn forward(&self) -> Vec3 {
        self.transform.forward().as_vec3()
    }

    fn screen_ray(&self, screen: Vec2) -> Option<Ray> {
        let ray = self.camera.viewport_to_world(&self.transform, screen).ok()?;
        Some(Ray::new(ray.origin, ray.direction.as_vec3()))
    }

    fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        self.camera.world_to_viewport(&self.transform, world).ok()
    }
}

/// Transforms the modal tool may move; the editor camera is never one of them
pub type SceneTransforms<'w, 's> = Query<'w, 's, &'static mut Transform, Without<EditorCamera>>;

/// Borrowed view of the ECS state the modal tool reads and writes
pub struct EcsHost<'a, 'w, 's> {
    pub transforms: &'a mut SceneTransforms<'w, 's>,
    /// Top-level selected entities, oldest first
    pub selected: Vec<Entity>,
    pub primary: Option<Entity>,
    /// Parent frames of the selected entities; missing entries are roots
    pub frames: HashMap<Entity, ParentFrame>,
    pub settings: &'a TransformSettings,
    pub history: &'a mut TransformHistory,
    pub viewport: BevyViewport,
}

impl EcsHost<'_, '_, '_> {
    fn frame(&self, id: Entity) -> ParentFrame {
        self.frames.get(&id).copied().unwrap_or(ParentFrame::ROOT)
    }
}

impl EditorHost for EcsHost<'_, '_, '_> {
    type ObjectId = Entity;
    type Viewport = BevyViewport;

    fn selection(&self) -> Vec<Entity> {
        self.selected.clone()
    }

    fn primary(&self) -> Option<Entity> {
        self.primary
    }

    fn transform(&self, id: Entity) -> Option<ObjectTransform> {
        let frame = self.frame(id);
        self.transforms.get(id).ok().map(|t| frame.to_world(t))
    }

    fn set_transform(&mut self, id: Entity, transform: ObjectTransform) {
        let frame = self.frame(id);
        if let Ok(mut target) = self.transforms.get_mut(id) {
            frame.write_local(&mut target, transform);
        }
    }

    fn viewport(&self) -> &BevyViewport {
        &self.viewport
    }

    fn settings(&self) -> &TransformSettings {
        self.settings
    }

    fn record_undo(&mut self, ids: &[Entity], label: &str) {
        let (entities, before): (Vec<Entity>, Vec<Transform>) = ids
            .iter()
            .filter_map(|id| self.transforms.get(*id).ok().map(|t| (*id, *t)))
            .unzip();
        self.history.push(HistoryEntry {
            label: label.to_string(),
            entities,
            before,
            after: None,
        });
    }
}
