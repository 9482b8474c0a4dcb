//! Bevy integration for the blendkeys modal transform tool
//!
//! Add [`ModalTransformPlugin`], tag the viewport camera with [`EditorCamera`]
//! and keep [`SelectionState`] up to date. G / R / S then grab, rotate and
//! scale the selected entities, with every confirmed edit pushed onto
//! [`TransformHistory`].

use bevy::prelude::*;
use blendkeys_config::TransformSettings;
use blendkeys_input::Keymap;

mod history;
mod host;
mod input;
mod selection;

pub use history::{seal_history_entries, HistoryEntry, TransformHistory};
pub use host::{BevyViewport, EcsHost, ParentFrame, SceneTransforms};
pub use input::{build_modifiers, key_from_keycode, route_modal_input, ModalTool};
pub use selection::SelectionState;

/// Marker for the camera the modal tool projects through
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct EditorCamera;

/// Plugin wiring the modal transform tool into the app
#[derive(Debug, Clone, Default)]
pub struct ModalTransformPlugin {
    pub keymap: Keymap,
}

impl Plugin for ModalTransformPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TransformSettings>()
            .init_resource::<SelectionState>()
            .init_resource::<TransformHistory>()
            .insert_resource(ModalTool::new(self.keymap.clone()))
            .add_systems(
                Update,
                (
                    route_modal_input,
                    seal_history_entries.after(route_modal_input),
                ),
            );

        info!("ModalTransformPlugin: keymap {:?}", self.keymap);
    }
}
