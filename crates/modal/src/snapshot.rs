//! Pre-gesture snapshots, revert and undo commit.

use std::fmt::Debug;

use glam::{Vec2, Vec3};
use tracing::warn;

use crate::host::{EditorHost, ObjectTransform};

/// Original transforms of the selection, captured when a gesture starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<Id> {
    entries: Vec<(Id, ObjectTransform)>,
}

impl<Id: Copy + Eq + Debug> Snapshot<Id> {
    /// Capture the current transforms of `ids`, skipping objects the host
    /// no longer knows about.
    pub fn capture<H>(host: &H, ids: &[Id]) -> Self
    where
        H: EditorHost<ObjectId = Id>,
    {
        let entries = ids
            .iter()
            .filter_map(|&id| match host.transform(id) {
                Some(transform) => Some((id, transform)),
                None => {
                    warn!("Snapshot: object {:?} has no transform, skipping", id);
                    None
                }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Id, ObjectTransform)> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<Id> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    pub fn get(&self, id: Id) -> Option<&ObjectTransform> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, transform)| transform)
    }

    /// Average position; zero for an empty snapshot.
    pub fn center(&self) -> Vec3 {
        if self.entries.is_empty() {
            return Vec3::ZERO;
        }
        let sum = self
            .entries
            .iter()
            .fold(Vec3::ZERO, |acc, (_, t)| acc + t.position);
        sum / self.entries.len() as f32
    }

    /// Write every original transform back.
    pub fn reset<H>(&self, host: &mut H)
    where
        H: EditorHost<ObjectId = Id>,
    {
        for (id, original) in &self.entries {
            host.set_transform(*id, *original);
        }
    }

    /// Commit the current transforms with an undo entry spanning
    /// original -> current.
    ///
    /// The current values are read, the originals written back, the undo entry
    /// recorded against the originals, and the current values reapplied. The
    /// recorded before-state is therefore never an intermediate frame.
    pub fn save<H>(&self, host: &mut H, label: &str)
    where
        H: EditorHost<ObjectId = Id>,
    {
        let applied: Vec<ObjectTransform> = self
            .entries
            .iter()
            .map(|(id, original)| host.transform(*id).unwrap_or(*original))
            .collect();

        self.reset(host);
        host.record_undo(&self.ids(), label);

        for ((id, _), transform) in self.entries.iter().zip(applied) {
            host.set_transform(*id, transform);
        }
    }
}

/// Data shared by every active gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture<Id> {
    pub snapshot: Snapshot<Id>,
    /// Average selection position at start
    pub center: Vec3,
    /// Cursor position at start, in screen pixels
    pub mouse_start: Vec2,
}

impl<Id: Copy + Eq + Debug> Gesture<Id> {
    /// Capture the host's selection; `None` when nothing usable is selected.
    pub fn capture<H>(host: &H, mouse_start: Vec2) -> Option<Self>
    where
        H: EditorHost<ObjectId = Id>,
    {
        let snapshot = Snapshot::capture(host, &host.selection());
        if snapshot.is_empty() {
            return None;
        }
        let center = snapshot.center();
        Some(Self {
            snapshot,
            center,
            mouse_start,
        })
    }
}
