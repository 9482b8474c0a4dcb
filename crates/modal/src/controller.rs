//! ModalToolContext and its state machine operations

use std::fmt::Debug;

use blendkeys_input::Keymap;
use glam::Vec2;
use tracing::{debug, info};

use crate::constraint::{Axis, AxisMask, ExactNumberEntry};
use crate::error::ModalError;
use crate::host::EditorHost;
use crate::mode::{ClearChannel, ModeState, TransformMode};
use crate::modes::{self, FrameInput};
use crate::snapshot::Gesture;

/// All mutable state of the modal transform tool.
///
/// Owned by the editor integration and passed by `&mut` into every call.
/// Exactly one gesture can be active; [`ModalToolContext::start`] refuses to
/// start another until the current one is confirmed or cancelled.
#[derive(Debug, Clone)]
pub struct ModalToolContext<Id> {
    pub(crate) state: ModeState<Id>,
    pub(crate) axes: AxisMask,
    pub(crate) exact: ExactNumberEntry,
    /// Snap modifier held
    pub(crate) snapping: bool,
    /// Camera pan (right drag) in progress; masks all hotkeys
    pub(crate) panning: bool,
    pub(crate) keymap: Keymap,
}

impl<Id> Default for ModalToolContext<Id> {
    fn default() -> Self {
        Self {
            state: ModeState::Idle,
            axes: AxisMask::default(),
            exact: ExactNumberEntry::default(),
            snapping: false,
            panning: false,
            keymap: Keymap::default(),
        }
    }
}

impl<Id: Copy + Eq + Debug> ModalToolContext<Id> {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            ..Self::default()
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn state(&self) -> &ModeState<Id> {
        &self.state
    }

    pub fn mode(&self) -> Option<TransformMode> {
        self.state.mode()
    }

    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    pub fn axes(&self) -> AxisMask {
        self.axes
    }

    pub fn exact_number(&self) -> &ExactNumberEntry {
        &self.exact
    }

    pub fn is_snapping(&self) -> bool {
        self.snapping
    }

    /// For hosts that track the snap modifier themselves.
    pub fn set_snapping(&mut self, snapping: bool) {
        self.snapping = snapping;
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Reset the per-gesture constraints and capture the selection.
    fn prepare<H>(&mut self, host: &H, mouse: Vec2) -> Result<Gesture<Id>, ModalError>
    where
        H: EditorHost<ObjectId = Id>,
    {
        self.exact.clear();
        self.axes.reset();
        Gesture::capture(host, mouse).ok_or(ModalError::EmptySelection)
    }

    /// Start a gesture. Only valid while idle.
    pub fn start<H>(&mut self, host: &mut H, mode: TransformMode, mouse: Vec2) -> Result<(), ModalError>
    where
        H: EditorHost<ObjectId = Id>,
    {
        if let Some(active) = self.state.mode() {
            return Err(ModalError::GestureActive(active));
        }

        let gesture = self.prepare(host, mouse)?;
        let count = gesture.snapshot.len();

        self.state = match mode {
            TransformMode::Grab => {
                let grab = modes::start_grab(host, &gesture);
                ModeState::Grabbing(gesture, grab)
            }
            TransformMode::Rotate => ModeState::Rotating(gesture),
            TransformMode::Scale => {
                let scale = modes::start_scale(host, &gesture);
                ModeState::Scaling(gesture, scale)
            }
        };

        info!("Modal: {:?} started on {} object(s)", mode, count);
        Ok(())
    }

    /// Recompute the live transforms for the cursor at `mouse`.
    pub fn update<H>(&mut self, host: &mut H, mouse: Vec2)
    where
        H: EditorHost<ObjectId = Id>,
    {
        let frame = FrameInput {
            mouse,
            axes: self.axes,
            exact: self.exact.value(),
            snapping: self.snapping,
        };

        match &mut self.state {
            ModeState::Idle => {}
            ModeState::Grabbing(gesture, grab) => modes::update_grab(host, gesture, grab, &frame),
            ModeState::Rotating(gesture) => modes::update_rotate(host, gesture, &frame),
            ModeState::Scaling(gesture, scale) => modes::update_scale(host, gesture, scale, &frame),
        }
    }

    /// Commit the active gesture with an undo entry. Returns false while idle.
    pub fn confirm<H>(&mut self, host: &mut H) -> bool
    where
        H: EditorHost<ObjectId = Id>,
    {
        let Some(mode) = self.state.mode() else {
            return false;
        };

        let state = std::mem::take(&mut self.state);
        if let Some(gesture) = state.gesture() {
            gesture.snapshot.save(host, mode.undo_label());
        }

        info!("Modal: {:?} confirmed", mode);
        true
    }

    /// Revert the active gesture. Returns false while idle.
    pub fn cancel<H>(&mut self, host: &mut H) -> bool
    where
        H: EditorHost<ObjectId = Id>,
    {
        let Some(mode) = self.state.mode() else {
            return false;
        };

        let state = std::mem::take(&mut self.state);
        if let Some(gesture) = state.gesture() {
            gesture.snapshot.reset(host);
        }

        info!("Modal: {:?} cancelled", mode);
        true
    }

    /// Reset one transform channel of the whole selection, with undo.
    ///
    /// An active gesture is cancelled first. Returns false when nothing is
    /// selected.
    pub fn clear<H>(&mut self, host: &mut H, channel: ClearChannel, mouse: Vec2) -> bool
    where
        H: EditorHost<ObjectId = Id>,
    {
        self.cancel(host);

        let gesture = match self.prepare(host, mouse) {
            Ok(gesture) => gesture,
            Err(err) => {
                debug!("Modal: {:?} skipped: {}", channel, err);
                return false;
            }
        };

        gesture.snapshot.save(host, channel.undo_label());
        for (id, original) in gesture.snapshot.iter() {
            let mut transform = *original;
            channel.apply(&mut transform);
            host.set_transform(*id, transform);
        }

        info!("Modal: {:?} on {} object(s)", channel, gesture.snapshot.len());
        true
    }

    /// Toggle an axis lock.
    ///
    /// While rotating only one axis is honoured, so the mask is cleared before
    /// the toggle: pressing a different axis switches to it, pressing the
    /// active axis keeps it.
    pub fn toggle_axis(&mut self, axis: Axis) {
        if matches!(self.state, ModeState::Rotating(_)) {
            self.axes.reset();
        }
        self.axes.toggle(axis);
        debug!("Modal: axis constraint {}", self.axes);
    }
}
