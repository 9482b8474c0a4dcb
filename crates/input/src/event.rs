//! Input event types for mouse and keyboard.

use serde::{Deserialize, Serialize};

use crate::key::Key;

/// A single input event as seen by the modal tool.
///
/// `position` is the cursor in logical viewport pixels, origin top-left,
/// y growing downwards. Every event carries it so that the active gesture can
/// follow the cursor on any event, not only on mouse moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub kind: InputKind,
    #[serde(default)]
    pub modifiers: Modifiers,
    pub position: [f32; 2],
}

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    KeyDown(Key),
    KeyUp(Key),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    /// Cursor motion or a plain per-frame tick
    MouseMove,
}

impl InputEvent {
    pub fn key_down(key: Key, modifiers: Modifiers, position: [f32; 2]) -> Self {
        Self {
            kind: InputKind::KeyDown(key),
            modifiers,
            position,
        }
    }

    pub fn key_up(key: Key, modifiers: Modifiers, position: [f32; 2]) -> Self {
        Self {
            kind: InputKind::KeyUp(key),
            modifiers,
            position,
        }
    }

    pub fn mouse_down(button: MouseButton, position: [f32; 2]) -> Self {
        Self {
            kind: InputKind::MouseDown(button),
            modifiers: Modifiers::default(),
            position,
        }
    }

    pub fn mouse_up(button: MouseButton, position: [f32; 2]) -> Self {
        Self {
            kind: InputKind::MouseUp(button),
            modifiers: Modifiers::default(),
            position,
        }
    }

    pub fn mouse_move(position: [f32; 2]) -> Self {
        Self {
            kind: InputKind::MouseMove,
            modifiers: Modifiers::default(),
            position,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Shift held with no other modifier
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// True when shift is the only modifier held.
    pub fn is_shift_only(&self) -> bool {
        *self == Self::SHIFT
    }
}
