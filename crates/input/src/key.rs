//! Host-neutral key identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A physical key, reduced to what the modal tool distinguishes.
///
/// Printable keys are stored as lowercase characters; left and right modifier
/// keys stay distinct because the snap modifier is bound to one side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Key {
    /// No key (synthetic events, unmapped scancodes)
    #[default]
    None,
    Char(char),
    Backspace,
    Enter,
    Escape,
    Tab,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    SuperLeft,
    SuperRight,
    Function(u8),
    /// A real key the tool has no name for
    Other,
}

impl Key {
    /// Keys that edit the typed exact-number buffer.
    pub fn is_numeric_entry(&self) -> bool {
        matches!(self, Key::Char('0'..='9' | '.' | '-') | Key::Backspace)
    }
}

/// Parse a web `KeyboardEvent.key` value.
/// See: https://developer.mozilla.org/en-US/docs/Web/API/KeyboardEvent/key/Key_Values
impl FromStr for Key {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Key::Char(c.to_ascii_lowercase()));
        }

        let key = match s {
            "Backspace" => Key::Backspace,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            "Tab" => Key::Tab,
            "Delete" => Key::Delete,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            // The web key value does not carry the side; assume left.
            "Shift" => Key::ShiftLeft,
            "Control" => Key::ControlLeft,
            "Alt" => Key::AltLeft,
            "Meta" => Key::SuperLeft,
            "Unidentified" => Key::None,
            _ => match s.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
                Some(n) if (1..=24).contains(&n) => Key::Function(n),
                _ => return Err(InputError::UnknownKey(s.to_string())),
            },
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::None => f.write_str("None"),
            Key::Char(' ') => f.write_str("Space"),
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Function(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}
