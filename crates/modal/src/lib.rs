//! blendkeys modal transform controller
//!
//! Turns a stream of raw input events into grab / rotate / scale edits on the
//! host editor's selection, Blender style:
//! - G / R / S start a gesture, X / Y / Z constrain it, typed digits override
//!   the magnitude, left control snaps, left click or any other key confirms,
//!   Escape or right click cancels
//! - Shift+G / Shift+R / Shift+S clear translation / rotation / scale
//!
//! Modules:
//! - [`controller`] - [`ModalToolContext`], the state machine and its operations
//! - [`router`] - event routing and key dispatch
//! - [`host`] - the [`EditorHost`] seam to the editor (selection, transforms, undo)
//! - [`viewport`] - camera projection helpers and the [`Viewport`] seam
//! - [`constraint`] - axis mask and typed exact-number entry
//! - [`snapping`] - grid quantization shared by all channels

pub mod constraint;
pub mod controller;
pub mod error;
pub mod host;
pub mod mode;
mod modes;
pub mod router;
pub mod snapping;
pub mod snapshot;
pub mod viewport;

#[cfg(test)]
mod test_host;

pub use constraint::{Axis, AxisMask, ExactNumberEntry};
pub use controller::ModalToolContext;
pub use error::ModalError;
pub use host::{EditorHost, ObjectTransform};
pub use mode::{ClearChannel, ModeState, TransformMode};
pub use router::EventDisposition;
pub use snapping::{snap, snap_vec3};
pub use snapshot::{Gesture, Snapshot};
pub use viewport::{Projection, Ray, ViewCamera, Viewport};

pub use blendkeys_config as config;
pub use blendkeys_input as input;
