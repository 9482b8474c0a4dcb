//! Shared configuration for blendkeys
//!
//! This crate holds the editor-level settings that the modal transform tool
//! reads but never owns: where rotate/scale pivot, which axes constrained
//! operations use, and the grid snapping increments. Settings live in memory
//! only; the host decides where they come from.

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default translation snap increment in world units (per axis)
pub const DEFAULT_TRANSLATE_SNAP: f32 = 1.0;

/// Default rotation snap increment in degrees
pub const DEFAULT_ROTATE_SNAP: f32 = 15.0;

/// Default scale snap increment (multiplier step)
pub const DEFAULT_SCALE_SNAP: f32 = 0.1;

/// Pivot used by rotate and scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PivotMode {
    /// Averaged position of the whole selection
    #[default]
    Center,
    /// Each object's own origin
    Individual,
}

/// Axes used by axis-constrained operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PivotRotation {
    /// World axes
    #[default]
    Global,
    /// Axes of the primary (last selected) object
    Local,
}

/// Grid snapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapSettings {
    /// Editor-wide grid snapping toggle; the snap modifier key works either way
    pub grid_snap_enabled: bool,
    /// Translation increment per world axis
    pub translate: [f32; 3],
    /// Rotation increment in degrees
    pub rotate: f32,
    /// Scale multiplier increment
    pub scale: f32,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            grid_snap_enabled: false,
            translate: [DEFAULT_TRANSLATE_SNAP; 3],
            rotate: DEFAULT_ROTATE_SNAP,
            scale: DEFAULT_SCALE_SNAP,
        }
    }
}

/// Settings consumed by the modal transform tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct TransformSettings {
    pub pivot_mode: PivotMode,
    pub pivot_rotation: PivotRotation,
    pub snap: SnapSettings,
}

/// Errors reported by [`TransformSettings::validate`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("Snap increment for {channel} must be positive and finite, got {value}")]
    InvalidSnapIncrement { channel: &'static str, value: f32 },
}

impl TransformSettings {
    /// Builder-style pivot mode override
    pub fn with_pivot_mode(mut self, pivot_mode: PivotMode) -> Self {
        self.pivot_mode = pivot_mode;
        self
    }

    /// Builder-style pivot rotation override
    pub fn with_pivot_rotation(mut self, pivot_rotation: PivotRotation) -> Self {
        self.pivot_rotation = pivot_rotation;
        self
    }

    /// Builder-style grid snap toggle
    pub fn with_grid_snap(mut self, enabled: bool) -> Self {
        self.snap.grid_snap_enabled = enabled;
        self
    }

    /// Check that every snap increment can be divided by.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let increments = [
            ("translate.x", self.snap.translate[0]),
            ("translate.y", self.snap.translate[1]),
            ("translate.z", self.snap.translate[2]),
            ("rotate", self.snap.rotate),
            ("scale", self.snap.scale),
        ];

        for (channel, value) in increments {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::InvalidSnapIncrement { channel, value });
            }
        }
        Ok(())
    }
}
