//! Error types for input decoding.

/// Errors that can occur while decoding forwarded input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to decode input event: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unknown key name: {0:?}")]
    UnknownKey(String),
}
