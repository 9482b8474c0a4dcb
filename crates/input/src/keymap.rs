//! Key bindings for the modal transform tool.

use serde::{Deserialize, Serialize};

use crate::key::Key;

/// Which keys drive the tool.
///
/// Shift plus a mode key clears that channel instead of starting the mode
/// (Shift+G clears translation, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    pub grab: Key,
    pub rotate: Key,
    pub scale: Key,
    pub axis_x: Key,
    pub axis_y: Key,
    pub axis_z: Key,
    /// Held to snap regardless of the editor's grid snap setting
    pub snap_modifier: Key,
    pub cancel: Key,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            grab: Key::Char('g'),
            rotate: Key::Char('r'),
            scale: Key::Char('s'),
            axis_x: Key::Char('x'),
            axis_y: Key::Char('y'),
            axis_z: Key::Char('z'),
            snap_modifier: Key::ControlLeft,
            cancel: Key::Escape,
        }
    }
}
