//! Object selection consumed by the modal transform tool
//!
//! Selection order matters: the last selected entity is the primary one and
//! supplies the local axes for constrained rotation.

use bevy::prelude::*;

/// Resource tracking current selection
#[derive(Resource, Debug, Default, Clone)]
pub struct SelectionState {
    /// Selected entities, oldest first
    pub entities: Vec<Entity>,
}

impl SelectionState {
    /// Replace the selection with a single entity
    pub fn select(&mut self, entity: Entity) {
        self.entities.clear();
        self.entities.push(entity);
    }

    /// Shift-click behaviour: add if missing, remove if present.
    /// A re-added entity becomes the primary.
    pub fn toggle(&mut self, entity: Entity) {
        if self.contains(entity) {
            self.entities.retain(|e| *e != entity);
        } else {
            self.entities.push(entity);
        }
    }

    pub fn deselect(&mut self, entity: Entity) {
        self.entities.retain(|e| *e != entity);
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn primary(&self) -> Option<Entity> {
        self.entities.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Selected entities with no selected ancestor, in selection order.
    ///
    /// Moving a parent already carries its children along.
    pub fn top_level(&self, parent_of: impl Fn(Entity) -> Option<Entity>) -> Vec<Entity> {
        self.entities
            .iter()
            .copied()
            .filter(|&entity| {
                let mut current = parent_of(entity);
                while let Some(ancestor) = current {
                    if self.contains(ancestor) {
                        return false;
                    }
                    current = parent_of(ancestor);
                }
                true
            })
            .collect()
    }
}
