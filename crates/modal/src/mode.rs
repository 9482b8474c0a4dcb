//! Mode state machine types.

use glam::Vec3;

use crate::host::ObjectTransform;
use crate::snapshot::Gesture;

/// The three modal operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformMode {
    Grab,
    Rotate,
    Scale,
}

impl TransformMode {
    /// Label of the undo entry recorded on confirm
    pub fn undo_label(self) -> &'static str {
        match self {
            TransformMode::Grab => "Grab",
            TransformMode::Rotate => "Rotate",
            TransformMode::Scale => "Scale",
        }
    }
}

/// Channel reset by a clear shortcut (Shift+G / Shift+R / Shift+S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClearChannel {
    Translation,
    Rotation,
    Scale,
}

impl ClearChannel {
    pub fn undo_label(self) -> &'static str {
        match self {
            ClearChannel::Translation => "Clear Translation",
            ClearChannel::Rotation => "Clear Rotation",
            ClearChannel::Scale => "Clear Scale",
        }
    }

    /// Reset this channel of `transform` to identity.
    pub fn apply(self, transform: &mut ObjectTransform) {
        match self {
            ClearChannel::Translation => transform.position = Vec3::ZERO,
            ClearChannel::Rotation => transform.rotation = ObjectTransform::IDENTITY.rotation,
            ClearChannel::Scale => transform.scale = Vec3::ONE,
        }
    }
}

/// Grab-only state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GrabState {
    /// `center - first cursor anchor`; `None` until the first update
    pub offset: Option<Vec3>,
}

/// Scale-only state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    /// Screen distance from the projected pivot to the mouse at start
    pub origin_distance: f32,
}

/// The active gesture, if any, with its per-mode data.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeState<Id> {
    Idle,
    Grabbing(Gesture<Id>, GrabState),
    Rotating(Gesture<Id>),
    Scaling(Gesture<Id>, ScaleState),
}

impl<Id> Default for ModeState<Id> {
    fn default() -> Self {
        ModeState::Idle
    }
}

impl<Id> ModeState<Id> {
    pub fn is_idle(&self) -> bool {
        matches!(self, ModeState::Idle)
    }

    pub fn mode(&self) -> Option<TransformMode> {
        match self {
            ModeState::Idle => None,
            ModeState::Grabbing(..) => Some(TransformMode::Grab),
            ModeState::Rotating(..) => Some(TransformMode::Rotate),
            ModeState::Scaling(..) => Some(TransformMode::Scale),
        }
    }

    pub fn gesture(&self) -> Option<&Gesture<Id>> {
        match self {
            ModeState::Idle => None,
            ModeState::Grabbing(gesture, _)
            | ModeState::Rotating(gesture)
            | ModeState::Scaling(gesture, _) => Some(gesture),
        }
    }
}
