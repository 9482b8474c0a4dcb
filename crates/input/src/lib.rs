//! Input event model for blendkeys
//!
//! Hosts translate their native keyboard and mouse events into [`InputEvent`]
//! before handing them to the modal transform controller. Events forwarded from
//! another process (e.g. a webview UI) arrive as JSON and go through
//! [`decode_event`].

mod error;
mod event;
mod key;
mod keymap;

pub use error::InputError;
pub use event::{InputEvent, InputKind, Modifiers, MouseButton};
pub use key::Key;
pub use keymap::Keymap;

/// Decode a JSON-encoded input event.
pub fn decode_event(json: &str) -> Result<InputEvent, InputError> {
    Ok(serde_json::from_str(json)?)
}
