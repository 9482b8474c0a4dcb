//! In-memory editor host used by the unit tests.

use std::collections::BTreeMap;

use blendkeys_config::TransformSettings;
use glam::{Quat, Vec2, Vec3};

use crate::host::{EditorHost, ObjectTransform};
use crate::viewport::{Projection, ViewCamera, Viewport};

pub(crate) const TOLERANCE: f32 = 1e-4;

/// One `record_undo` call and the state it captured.
#[derive(Debug, Clone)]
pub(crate) struct UndoRecord {
    pub label: String,
    pub before: Vec<(u32, ObjectTransform)>,
}

pub(crate) struct TestHost {
    pub objects: BTreeMap<u32, ObjectTransform>,
    pub selected: Vec<u32>,
    pub camera: ViewCamera,
    pub settings: TransformSettings,
    pub undo_log: Vec<UndoRecord>,
}

impl TestHost {
    /// Orthographic camera at z = 10 looking down -Z over a 1000x1000 viewport,
    /// 100 pixels per world unit, world origin at screen (500, 500).
    pub fn with_transforms(transforms: &[ObjectTransform]) -> Self {
        let objects: BTreeMap<u32, ObjectTransform> = transforms
            .iter()
            .enumerate()
            .map(|(i, t)| (i as u32, *t))
            .collect();
        let selected = objects.keys().copied().collect();
        Self {
            objects,
            selected,
            camera: ViewCamera::new(
                Vec3::new(0.0, 0.0, 10.0),
                Quat::IDENTITY,
                Projection::Orthographic { height: 10.0 },
                Vec2::new(1000.0, 1000.0),
            ),
            settings: TransformSettings::default(),
            undo_log: Vec::new(),
        }
    }

    pub fn with_positions(positions: &[Vec3]) -> Self {
        let transforms: Vec<ObjectTransform> = positions
            .iter()
            .map(|p| ObjectTransform::from_position(*p))
            .collect();
        Self::with_transforms(&transforms)
    }

    pub fn get(&self, id: u32) -> ObjectTransform {
        self.objects[&id]
    }

    pub fn position(&self, id: u32) -> Vec3 {
        self.get(id).position
    }

    pub fn screen_of(&self, world: Vec3) -> Vec2 {
        self.camera.world_to_screen(world).unwrap()
    }
}

impl EditorHost for TestHost {
    type ObjectId = u32;
    type Viewport = ViewCamera;

    fn selection(&self) -> Vec<u32> {
        self.selected.clone()
    }

    fn primary(&self) -> Option<u32> {
        self.selected.last().copied()
    }

    fn transform(&self, id: u32) -> Option<ObjectTransform> {
        self.objects.get(&id).copied()
    }

    fn set_transform(&mut self, id: u32, transform: ObjectTransform) {
        if let Some(slot) = self.objects.get_mut(&id) {
            *slot = transform;
        }
    }

    fn viewport(&self) -> &ViewCamera {
        &self.camera
    }

    fn settings(&self) -> &TransformSettings {
        &self.settings
    }

    fn record_undo(&mut self, ids: &[u32], label: &str) {
        let before = ids.iter().map(|id| (*id, self.get(*id))).collect();
        self.undo_log.push(UndoRecord {
            label: label.to_string(),
            before,
        });
    }
}

pub(crate) fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < TOLERANCE,
        "expected {expected:?}, got {actual:?}"
    );
}
