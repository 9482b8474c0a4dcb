//! Transform edit history
//!
//! The modal tool records an entry when a gesture is confirmed or a channel is
//! cleared. Entries are recorded before the final transforms are written, so
//! the after-state is filled in by [`seal_history_entries`] once the frame's
//! writes have landed.

use bevy::prelude::*;

/// Default number of entries kept
pub const DEFAULT_MAX_ENTRIES: usize = 64;

/// One recorded transform edit
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Operation name ("Grab", "Clear Rotation", ...)
    pub label: String,
    pub entities: Vec<Entity>,
    /// Transforms before the edit, parallel to `entities`
    pub before: Vec<Transform>,
    /// Transforms after the edit; `None` until sealed
    pub after: Option<Vec<Transform>>,
}

impl HistoryEntry {
    pub fn is_sealed(&self) -> bool {
        self.after.is_some()
    }
}

/// Resource holding recorded transform edits, oldest first
#[derive(Resource, Debug)]
pub struct TransformHistory {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl Default for TransformHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }
}

impl TransformHistory {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Push an unsealed entry, dropping the oldest one past capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        debug!("History: recorded '{}' ({} entities)", entry.label, entry.entities.len());
        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fill in the after-state of every unsealed entry.
    ///
    /// Entities `lookup` no longer finds keep their before-state.
    pub fn seal(&mut self, lookup: impl Fn(Entity) -> Option<Transform>) -> usize {
        let mut sealed = 0;
        for entry in self.entries.iter_mut().filter(|e| !e.is_sealed()) {
            let after = entry
                .entities
                .iter()
                .zip(&entry.before)
                .map(|(entity, before)| lookup(*entity).unwrap_or(*before))
                .collect();
            entry.after = Some(after);
            sealed += 1;
        }
        sealed
    }
}

/// Seal entries recorded this frame with the transforms the tool wrote
pub fn seal_history_entries(mut history: ResMut<TransformHistory>, transforms: Query<&Transform>) {
    if history.entries.iter().all(HistoryEntry::is_sealed) {
        return;
    }
    history.seal(|entity| transforms.get(entity).ok().copied());
}
