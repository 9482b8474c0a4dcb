//! Bevy input translation and routing into the modal tool
//!
//! Keyboard and mouse button messages are converted to host-neutral
//! [`InputEvent`]s and fed through the router; a mouse move at the current
//! cursor position follows every frame so an active gesture tracks the cursor.

use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use blendkeys_config::TransformSettings;
use blendkeys_input::{InputEvent, Key, Keymap, Modifiers, MouseButton as ToolButton};
use blendkeys_modal::{EventDisposition, ModalToolContext};

use crate::EditorCamera;
use crate::history::TransformHistory;
use crate::host::{BevyViewport, EcsHost, ParentFrame, SceneTransforms};
use crate::selection::SelectionState;

/// Resource owning the modal tool state
#[derive(Resource, Debug)]
pub struct ModalTool {
    pub context: ModalToolContext<Entity>,
    /// Last known cursor position, used while the cursor is outside the window
    pub cursor: Vec2,
    /// Whether the tool consumed any input this frame. Camera and selection
    /// systems should skip their own handling when set.
    pub consumed: bool,
}

impl ModalTool {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            context: ModalToolContext::new(keymap),
            cursor: Vec2::ZERO,
            consumed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.context.is_active()
    }
}

impl Default for ModalTool {
    fn default() -> Self {
        Self::new(Keymap::default())
    }
}

/// Build the current modifier state from Bevy's ButtonInput
pub fn build_modifiers(key_input: &ButtonInput<KeyCode>) -> Modifiers {
    Modifiers {
        shift: key_input.pressed(KeyCode::ShiftLeft) || key_input.pressed(KeyCode::ShiftRight),
        ctrl: key_input.pressed(KeyCode::ControlLeft) || key_input.pressed(KeyCode::ControlRight),
        alt: key_input.pressed(KeyCode::AltLeft) || key_input.pressed(KeyCode::AltRight),
        meta: key_input.pressed(KeyCode::SuperLeft) || key_input.pressed(KeyCode::SuperRight),
    }
}

/// Convert a Bevy KeyCode to the tool's key identifier.
/// Physical keys are used, so Shift+G still reports `g`.
pub fn key_from_keycode(key_code: KeyCode) -> Key {
    match key_code {
        // Alphabet
        KeyCode::KeyA => Key::Char('a'),
        KeyCode::KeyB => Key::Char('b'),
        KeyCode::KeyC => Key::Char('c'),
        KeyCode::KeyD => Key::Char('d'),
        KeyCode::KeyE => Key::Char('e'),
        KeyCode::KeyF => Key::Char('f'),
        KeyCode::KeyG => Key::Char('g'),
        KeyCode::KeyH => Key::Char('h'),
        KeyCode::KeyI => Key::Char('i'),
        KeyCode::KeyJ => Key::Char('j'),
        KeyCode::KeyK => Key::Char('k'),
        KeyCode::KeyL => Key::Char('l'),
        KeyCode::KeyM => Key::Char('m'),
        KeyCode::KeyN => Key::Char('n'),
        KeyCode::KeyO => Key::Char('o'),
        KeyCode::KeyP => Key::Char('p'),
        KeyCode::KeyQ => Key::Char('q'),
        KeyCode::KeyR => Key::Char('r'),
        KeyCode::KeyS => Key::Char('s'),
        KeyCode::KeyT => Key::Char('t'),
        KeyCode::KeyU => Key::Char('u'),
        KeyCode::KeyV => Key::Char('v'),
        KeyCode::KeyW => Key::Char('w'),
        KeyCode::KeyX => Key::Char('x'),
        KeyCode::KeyY => Key::Char('y'),
        KeyCode::KeyZ => Key::Char('z'),

        // Numbers, top row and numpad alike
        KeyCode::Digit0 | KeyCode::Numpad0 => Key::Char('0'),
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Char('1'),
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::Char('2'),
        KeyCode::Digit3 | KeyCode::Numpad3 => Key::Char('3'),
        KeyCode::Digit4 | KeyCode::Numpad4 => Key::Char('4'),
        KeyCode::Digit5 | KeyCode::Numpad5 => Key::Char('5'),
        KeyCode::Digit6 | KeyCode::Numpad6 => Key::Char('6'),
        KeyCode::Digit7 | KeyCode::Numpad7 => Key::Char('7'),
        KeyCode::Digit8 | KeyCode::Numpad8 => Key::Char('8'),
        KeyCode::Digit9 | KeyCode::Numpad9 => Key::Char('9'),
        KeyCode::Period | KeyCode::NumpadDecimal => Key::Char('.'),
        KeyCode::Minus | KeyCode::NumpadSubtract => Key::Char('-'),

        // Function keys
        KeyCode::F1 => Key::Function(1),
        KeyCode::F2 => Key::Function(2),
        KeyCode::F3 => Key::Function(3),
        KeyCode::F4 => Key::Function(4),
        KeyCode::F5 => Key::Function(5),
        KeyCode::F6 => Key::Function(6),
        KeyCode::F7 => Key::Function(7),
        KeyCode::F8 => Key::Function(8),
        KeyCode::F9 => Key::Function(9),
        KeyCode::F10 => Key::Function(10),
        KeyCode::F11 => Key::Function(11),
        KeyCode::F12 => Key::Function(12),

        // Special keys
        KeyCode::Space => Key::Char(' '),
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Delete => Key::Delete,

        // Arrow keys
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        // Modifier keys
        KeyCode::ShiftLeft => Key::ShiftLeft,
        KeyCode::ShiftRight => Key::ShiftRight,
        KeyCode::ControlLeft => Key::ControlLeft,
        KeyCode::ControlRight => Key::ControlRight,
        KeyCode::AltLeft => Key::AltLeft,
        KeyCode::AltRight => Key::AltRight,
        KeyCode::SuperLeft => Key::SuperLeft,
        KeyCode::SuperRight => Key::SuperRight,

        KeyCode::Unidentified(_) => Key::None,
        _ => Key::Other,
    }
}

fn tool_button(button: MouseButton) -> Option<ToolButton> {
    match button {
        MouseButton::Left => Some(ToolButton::Left),
        MouseButton::Right => Some(ToolButton::Right),
        MouseButton::Middle => Some(ToolButton::Middle),
        _ => None,
    }
}

/// Feed this frame's keyboard and mouse button input through the modal tool
pub fn route_modal_input(
    mut key_events: MessageReader<KeyboardInput>,
    mut button_events: MessageReader<MouseButtonInput>,
    key_input: Res<ButtonInput<KeyCode>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<EditorCamera>>,
    mut transforms: SceneTransforms,
    parents: Query<&ChildOf>,
    globals: Query<&GlobalTransform>,
    selection: Res<SelectionState>,
    settings: Res<TransformSettings>,
    mut history: ResMut<TransformHistory>,
    mut tool: ResMut<ModalTool>,
) {
    tool.consumed = false;

    let Ok((camera, camera_transform)) = camera_query.single() else {
        key_events.clear();
        button_events.clear();
        return;
    };

    if let Some(cursor) = window_query.single().ok().and_then(|w| w.cursor_position()) {
        tool.cursor = cursor;
    }
    let position = tool.cursor.to_array();
    let modifiers = build_modifiers(&key_input);

    let mut events: Vec<InputEvent> = Vec::new();
    // Bevy delivers keys and buttons on separate message queues, so their
    // relative order within one frame is lost: keys replay first.
    for event in key_events.read() {
        // Held keys would confirm the gesture they just started
        if event.repeat {
            continue;
        }
        let key = key_from_keycode(event.key_code);
        events.push(if event.state.is_pressed() {
            InputEvent::key_down(key, modifiers, position)
        } else {
            InputEvent::key_up(key, modifiers, position)
        });
    }
    for event in button_events.read() {
        let Some(button) = tool_button(event.button) else {
            continue;
        };
        events.push(if event.state.is_pressed() {
            InputEvent::mouse_down(button, position)
        } else {
            InputEvent::mouse_up(button, position)
        });
    }
    events.push(InputEvent::mouse_move(position));

    let parent_of = |entity: Entity| parents.get(entity).ok().map(ChildOf::parent);
    let frames = selection
        .entities
        .iter()
        .map(|&entity| {
            let frame = parent_of(entity)
                .and_then(|parent| globals.get(parent).ok())
                .map_or(ParentFrame::ROOT, ParentFrame::from_global);
            (entity, frame)
        })
        .collect();

    let mut host = EcsHost {
        transforms: &mut transforms,
        selected: selection.top_level(parent_of),
        primary: selection.primary(),
        frames,
        settings: &settings,
        history: &mut history,
        viewport: BevyViewport::new(camera, camera_transform),
    };

    for event in &events {
        if tool.context.handle_event(&mut host, event) == EventDisposition::Consumed {
            tool.consumed = true;
        }
    }
}
