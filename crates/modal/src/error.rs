//! Error types for the modal controller.

use crate::mode::TransformMode;

/// Reasons a gesture could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ModalError {
    #[error("Cannot start a gesture while {0:?} is active")]
    GestureActive(TransformMode),

    #[error("Nothing is selected")]
    EmptySelection,
}
