//! Input event routing and key dispatch.

use std::fmt::Debug;

use blendkeys_input::{InputEvent, InputKind, Key, Modifiers, MouseButton};
use glam::Vec2;
use tracing::debug;

use crate::constraint::Axis;
use crate::controller::ModalToolContext;
use crate::host::EditorHost;
use crate::mode::{ClearChannel, TransformMode};

/// Whether the host should stop propagating an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Consumed,
    PassThrough,
}

impl EventDisposition {
    pub fn is_consumed(self) -> bool {
        self == EventDisposition::Consumed
    }

    fn from_consumed(consumed: bool) -> Self {
        if consumed {
            EventDisposition::Consumed
        } else {
            EventDisposition::PassThrough
        }
    }
}

impl<Id: Copy + Eq + Debug> ModalToolContext<Id> {
    /// Feed one viewport event through the tool.
    ///
    /// Key downs go through [`ModalToolContext::handle_key`]; mouse buttons
    /// confirm or cancel; every event ends with an update at its position so
    /// the edit tracks the cursor.
    pub fn handle_event<H>(&mut self, host: &mut H, event: &InputEvent) -> EventDisposition
    where
        H: EditorHost<ObjectId = Id>,
    {
        let mouse = Vec2::from(event.position);
        let mut consumed = false;

        match event.kind {
            InputKind::MouseDown(MouseButton::Right) if !self.is_active() => {
                // Right drag pans the camera; hotkeys are masked until release
                self.panning = true;
                return EventDisposition::PassThrough;
            }
            InputKind::MouseUp(MouseButton::Right) => {
                self.panning = false;
            }
            InputKind::KeyUp(key) if key == self.keymap.snap_modifier && self.snapping => {
                self.snapping = false;
                debug!("Modal: snapping off");
                consumed = self.is_active();
            }
            InputKind::KeyDown(key) => {
                consumed = self.handle_key(host, key, event.modifiers, mouse).is_consumed();
            }
            InputKind::MouseDown(MouseButton::Left) if self.is_active() => {
                self.confirm(host);
                consumed = true;
            }
            InputKind::MouseDown(MouseButton::Right) => {
                self.cancel(host);
                consumed = true;
            }
            _ => {}
        }

        if self.is_active() {
            self.update(host, mouse);
        }

        EventDisposition::from_consumed(consumed)
    }

    /// Dispatch a key down.
    ///
    /// Public so panels without a viewport (outliner, hierarchy) can forward
    /// their key presses. Does not run an update; the next viewport event
    /// does.
    pub fn handle_key<H>(
        &mut self,
        host: &mut H,
        key: Key,
        modifiers: Modifiers,
        mouse: Vec2,
    ) -> EventDisposition
    where
        H: EditorHost<ObjectId = Id>,
    {
        if self.panning {
            return EventDisposition::PassThrough;
        }

        let was_active = self.is_active();
        let mode = self.mode_for_key(key);

        if let Some(mode) = mode.filter(|_| modifiers.is_shift_only()) {
            let channel = match mode {
                TransformMode::Grab => ClearChannel::Translation,
                TransformMode::Rotate => ClearChannel::Rotation,
                TransformMode::Scale => ClearChannel::Scale,
            };
            self.clear(host, channel, mouse);
        } else if let Some(mode) = mode.filter(|_| !was_active) {
            if let Err(err) = self.start(host, mode, mouse) {
                debug!("Modal: {:?} not started: {}", mode, err);
            }
        } else if let Some(axis) = self.axis_for_key(key) {
            self.toggle_axis(axis);
        } else if was_active && key.is_numeric_entry() {
            match key {
                Key::Backspace => self.exact.backspace(),
                Key::Char(c) => self.exact.push(c),
                _ => {}
            }
            debug!("Modal: exact number '{}'", self.exact.as_str());
        } else if key == self.keymap.snap_modifier {
            self.snapping = true;
            debug!("Modal: snapping on");
        } else if key == self.keymap.cancel {
            self.cancel(host);
        } else if key != Key::None {
            self.confirm(host);
        } else {
            return EventDisposition::PassThrough;
        }

        EventDisposition::from_consumed(was_active || self.is_active())
    }

    fn mode_for_key(&self, key: Key) -> Option<TransformMode> {
        if key == self.keymap.grab {
            Some(TransformMode::Grab)
        } else if key == self.keymap.rotate {
            Some(TransformMode::Rotate)
        } else if key == self.keymap.scale {
            Some(TransformMode::Scale)
        } else {
            None
        }
    }

    fn axis_for_key(&self, key: Key) -> Option<Axis> {
        if key == self.keymap.axis_x {
            Some(Axis::X)
        } else if key == self.keymap.axis_y {
            Some(Axis::Y)
        } else if key == self.keymap.axis_z {
            Some(Axis::Z)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ObjectTransform;
    use crate::test_host::{assert_vec3_near, TestHost, TOLERANCE};
    use crate::AxisMask;
    use blendkeys_config::{PivotMode, PivotRotation};
    use glam::{Quat, Vec3};

    fn key(ctx: &mut ModalToolContext<u32>, host: &mut TestHost, k: Key, at: Vec2) -> EventDisposition {
        ctx.handle_event(host, &InputEvent::key_down(k, Modifiers::default(), at.into()))
    }

    fn shift_key(ctx: &mut ModalToolContext<u32>, host: &mut TestHost, k: Key) -> EventDisposition {
        ctx.handle_event(host, &InputEvent::key_down(k, Modifiers::SHIFT, [0.0, 0.0]))
    }

    fn move_to(ctx: &mut ModalToolContext<u32>, host: &mut TestHost, at: Vec2) -> EventDisposition {
        ctx.handle_event(host, &InputEvent::mouse_move(at.into()))
    }

    fn click(ctx: &mut ModalToolContext<u32>, host: &mut TestHost, button: MouseButton, at: Vec2) -> EventDisposition {
        ctx.handle_event(host, &InputEvent::mouse_down(button, at.into()))
    }

    #[test]
    fn test_grab_scenario() {
        let mut host = TestHost::with_positions(&[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
        ]);
        let mut ctx = ModalToolContext::default();

        let start = Vec2::new(700.0, 500.0);
        assert!(key(&mut ctx, &mut host, Key::Char('g'), start).is_consumed());
        assert_eq!(ctx.mode(), Some(TransformMode::Grab));

        assert!(!move_to(&mut ctx, &mut host, Vec2::new(750.0, 520.0)).is_consumed());
        move_to(&mut ctx, &mut host, Vec2::new(800.0, 500.0));
        assert!(click(&mut ctx, &mut host, MouseButton::Left, Vec2::new(800.0, 500.0)).is_consumed());

        assert!(!ctx.is_active());
        assert_vec3_near(host.position(0), Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_near(host.position(1), Vec3::new(3.0, 0.0, 0.0));
        assert_vec3_near(host.position(2), Vec3::new(5.0, 0.0, 0.0));

        assert_eq!(host.undo_log.len(), 1);
        assert_eq!(host.undo_log[0].label, "Grab");
        assert_eq!(host.undo_log[0].before[1].1.position, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_scale_typed_number_with_axis() {
        let mut host = TestHost::with_positions(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)]);
        let mut ctx = ModalToolContext::default();

        let start = Vec2::new(900.0, 500.0);
        key(&mut ctx, &mut host, Key::Char('s'), start);
        key(&mut ctx, &mut host, Key::Char('x'), start);
        key(&mut ctx, &mut host, Key::Char('5'), start);
        // Mouse motion has no effect while a number is typed
        move_to(&mut ctx, &mut host, Vec2::new(523.0, 911.0));
        key(&mut ctx, &mut host, Key::Enter, Vec2::new(523.0, 911.0));

        for id in 0..2 {
            assert_vec3_near(host.get(id).scale, Vec3::new(5.0, 1.0, 1.0));
        }
        assert_vec3_near(host.position(0), Vec3::new(-3.0, 0.0, 0.0));
        assert_vec3_near(host.position(1), Vec3::new(7.0, 0.0, 0.0));
        assert_eq!(host.undo_log[0].label, "Scale");
    }

    #[test]
    fn test_scale_follows_mouse_distance() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();

        key(&mut ctx, &mut host, Key::Char('s'), Vec2::new(600.0, 500.0));
        move_to(&mut ctx, &mut host, Vec2::new(500.0, 750.0));
        assert_vec3_near(host.get(0).scale, Vec3::splat(2.5));
    }

    #[test]
    fn test_backspace_edits_typed_number() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();

        key(&mut ctx, &mut host, Key::Char('s'), Vec2::new(600.0, 500.0));
        for k in [Key::Char('2'), Key::Char('5'), Key::Backspace] {
            assert!(key(&mut ctx, &mut host, k, Vec2::new(600.0, 500.0)).is_consumed());
        }
        assert_eq!(ctx.exact_number().as_str(), "2");
        assert_vec3_near(host.get(0).scale, Vec3::splat(2.0));
    }

    #[test]
    fn test_escape_mid_rotate_reverts_exactly() {
        let original = ObjectTransform {
            position: Vec3::new(1.0, 0.5, -0.25),
            rotation: Quat::from_rotation_x(0.3),
            scale: Vec3::splat(1.25),
        };
        let mut host = TestHost::with_transforms(&[original]);
        let mut ctx = ModalToolContext::default();

        key(&mut ctx, &mut host, Key::Char('r'), Vec2::new(700.0, 450.0));
        move_to(&mut ctx, &mut host, Vec2::new(420.0, 610.0));
        assert_ne!(host.get(0).rotation, original.rotation);

        assert!(key(&mut ctx, &mut host, Key::Escape, Vec2::new(420.0, 610.0)).is_consumed());
        assert!(!ctx.is_active());
        assert_eq!(host.get(0), original);
        assert!(host.undo_log.is_empty());
    }

    #[test]
    fn test_rotate_follows_cursor_around_view_axis() {
        let mut host = TestHost::with_positions(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)]);
        let mut ctx = ModalToolContext::default();

        // Center projects to (500, 500); a quarter turn clockwise on screen
        key(&mut ctx, &mut host, Key::Char('r'), Vec2::new(600.0, 500.0));
        move_to(&mut ctx, &mut host, Vec2::new(500.0, 600.0));
        click(&mut ctx, &mut host, MouseButton::Left, Vec2::new(500.0, 600.0));

        assert_vec3_near(host.position(0), Vec3::new(0.0, -1.0, 0.0));
        assert_vec3_near(host.position(1), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(host.undo_log[0].label, "Rotate");
    }

    #[test]
    fn test_rotate_axis_switch_is_exclusive() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();
        let at = Vec2::new(600.0, 500.0);

        key(&mut ctx, &mut host, Key::Char('r'), at);
        key(&mut ctx, &mut host, Key::Char('x'), at);
        key(&mut ctx, &mut host, Key::Char('y'), at);
        assert_eq!(ctx.axes(), AxisMask { x: false, y: true, z: false });
        key(&mut ctx, &mut host, Key::Char('y'), at);
        assert_eq!(ctx.axes(), AxisMask { x: false, y: true, z: false });
    }

    #[test]
    fn test_typed_rotation_about_z() {
        let mut host = TestHost::with_positions(&[Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();
        let at = Vec2::new(700.0, 300.0);

        key(&mut ctx, &mut host, Key::Char('r'), at);
        key(&mut ctx, &mut host, Key::Char('z'), at);
        key(&mut ctx, &mut host, Key::Char('9'), at);
        key(&mut ctx, &mut host, Key::Char('0'), at);

        // Pivot is the center (1, 0, 0); +90 degrees about +Z
        assert_vec3_near(host.position(0), Vec3::new(1.0, 1.0, 0.0));
        assert_vec3_near(host.position(1), Vec3::new(1.0, -1.0, 0.0));
        let expected = Quat::from_rotation_z(90f32.to_radians());
        assert!(host.get(0).rotation.angle_between(expected) < TOLERANCE * 10.0);
    }

    #[test]
    fn test_idle_keys_pass_through() {
        let mut host = TestHost::with_positions(&[Vec3::ONE]);
        let mut ctx = ModalToolContext::default();
        let at = Vec2::new(10.0, 10.0);

        assert_eq!(key(&mut ctx, &mut host, Key::Char('x'), at), EventDisposition::PassThrough);
        assert_eq!(key(&mut ctx, &mut host, Key::Char('5'), at), EventDisposition::PassThrough);
        assert_eq!(key(&mut ctx, &mut host, Key::Enter, at), EventDisposition::PassThrough);
        assert_eq!(key(&mut ctx, &mut host, Key::Escape, at), EventDisposition::PassThrough);
        assert_eq!(click(&mut ctx, &mut host, MouseButton::Left, at), EventDisposition::PassThrough);
        assert_eq!(host.position(0), Vec3::ONE);
        assert!(host.undo_log.is_empty());
        // Idle toggles still land in the mask and are reset by the next start
        key(&mut ctx, &mut host, Key::Char('g'), at);
        assert!(ctx.axes().is_empty());
    }

    #[test]
    fn test_panning_masks_hotkeys() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();
        let at = Vec2::new(500.0, 500.0);

        assert_eq!(click(&mut ctx, &mut host, MouseButton::Right, at), EventDisposition::PassThrough);
        assert!(ctx.is_panning());
        assert_eq!(key(&mut ctx, &mut host, Key::Char('g'), at), EventDisposition::PassThrough);
        assert!(!ctx.is_active());

        ctx.handle_event(&mut host, &InputEvent::mouse_up(MouseButton::Right, at.into()));
        assert!(!ctx.is_panning());
        assert!(key(&mut ctx, &mut host, Key::Char('g'), at).is_consumed());
    }

    #[test]
    fn test_right_click_cancels_active_gesture() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();

        key(&mut ctx, &mut host, Key::Char('g'), Vec2::new(500.0, 500.0));
        move_to(&mut ctx, &mut host, Vec2::new(800.0, 200.0));
        assert!(click(&mut ctx, &mut host, MouseButton::Right, Vec2::new(800.0, 200.0)).is_consumed());

        assert!(!ctx.is_active());
        assert!(!ctx.is_panning());
        assert_eq!(host.position(0), Vec3::ZERO);
    }

    #[test]
    fn test_snap_modifier_held_during_grab() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();
        let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };

        key(&mut ctx, &mut host, Key::Char('g'), Vec2::new(500.0, 500.0));
        let down = InputEvent::key_down(Key::ControlLeft, ctrl, [500.0, 500.0]);
        assert!(ctx.handle_event(&mut host, &down).is_consumed());
        assert!(ctx.is_snapping());
        assert!(ctx.is_active());

        move_to(&mut ctx, &mut host, Vec2::new(640.0, 430.0));
        assert_vec3_near(host.position(0), Vec3::new(1.0, 1.0, 0.0));

        let up = InputEvent::key_up(Key::ControlLeft, Modifiers::default(), [640.0, 430.0]);
        assert!(ctx.handle_event(&mut host, &up).is_consumed());
        assert!(!ctx.is_snapping());
        assert_vec3_near(host.position(0), Vec3::new(1.4, 0.7, 0.0));
    }

    #[test]
    fn test_any_real_key_confirms() {
        let at = Vec2::new(500.0, 500.0);
        for k in [Key::AltLeft, Key::ShiftLeft, Key::ControlRight, Key::Char('q')] {
            let mut host = TestHost::with_positions(&[Vec3::ZERO]);
            let mut ctx = ModalToolContext::default();

            key(&mut ctx, &mut host, Key::Char('g'), at);
            assert!(key(&mut ctx, &mut host, k, at).is_consumed(), "{k:?}");
            assert!(!ctx.is_active(), "{k:?}");
            assert_eq!(host.undo_log.len(), 1);
        }
    }

    #[test]
    fn test_none_key_does_not_confirm() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();
        let at = Vec2::new(500.0, 500.0);

        key(&mut ctx, &mut host, Key::Char('g'), at);
        assert_eq!(key(&mut ctx, &mut host, Key::None, at), EventDisposition::PassThrough);
        assert!(ctx.is_active());
        assert!(host.undo_log.is_empty());
    }

    #[test]
    fn test_mode_key_while_active_confirms() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();
        let at = Vec2::new(500.0, 500.0);

        key(&mut ctx, &mut host, Key::Char('g'), at);
        assert!(key(&mut ctx, &mut host, Key::Char('r'), at).is_consumed());
        assert!(!ctx.is_active());
        assert_eq!(host.undo_log[0].label, "Grab");
    }

    #[test]
    fn test_shift_clears_pass_through_when_idle() {
        let mut host = TestHost::with_transforms(&[ObjectTransform {
            position: Vec3::new(3.0, 2.0, 1.0),
            rotation: Quat::from_rotation_z(1.0),
            scale: Vec3::splat(4.0),
        }]);
        let mut ctx = ModalToolContext::default();

        assert_eq!(shift_key(&mut ctx, &mut host, Key::Char('g')), EventDisposition::PassThrough);
        assert_eq!(host.position(0), Vec3::ZERO);
        shift_key(&mut ctx, &mut host, Key::Char('r'));
        shift_key(&mut ctx, &mut host, Key::Char('s'));
        assert_eq!(host.get(0), ObjectTransform::IDENTITY);

        let labels: Vec<&str> = host.undo_log.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Clear Translation", "Clear Rotation", "Clear Scale"]);
    }

    #[test]
    fn test_shift_clear_during_grab_is_consumed() {
        let mut host = TestHost::with_positions(&[Vec3::new(1.0, 1.0, 0.0)]);
        let mut ctx = ModalToolContext::default();

        key(&mut ctx, &mut host, Key::Char('g'), Vec2::new(600.0, 400.0));
        move_to(&mut ctx, &mut host, Vec2::new(900.0, 400.0));
        assert!(shift_key(&mut ctx, &mut host, Key::Char('g')).is_consumed());

        assert!(!ctx.is_active());
        assert_eq!(host.undo_log.len(), 1);
        assert_eq!(host.undo_log[0].before[0].1.position, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(host.position(0), Vec3::ZERO);
    }

    #[test]
    fn test_local_grab_uses_object_axes() {
        let mut host = TestHost::with_transforms(&[ObjectTransform {
            position: Vec3::ZERO,
            rotation: Quat::from_rotation_z(90f32.to_radians()),
            scale: Vec3::ONE,
        }]);
        host.settings = host
            .settings
            .clone()
            .with_pivot_rotation(PivotRotation::Local);
        let mut ctx = ModalToolContext::default();

        key(&mut ctx, &mut host, Key::Char('g'), Vec2::new(500.0, 500.0));
        key(&mut ctx, &mut host, Key::Char('x'), Vec2::new(500.0, 500.0));
        move_to(&mut ctx, &mut host, Vec2::new(600.0, 500.0));

        assert_vec3_near(host.position(0), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_typed_number_sets_masked_grab_coordinate() {
        let mut host = TestHost::with_positions(&[Vec3::new(2.0, 3.0, 0.0)]);
        let mut ctx = ModalToolContext::default();
        let at = host.screen_of(Vec3::new(2.0, 3.0, 0.0));

        key(&mut ctx, &mut host, Key::Char('g'), at);
        key(&mut ctx, &mut host, Key::Char('x'), at);
        key(&mut ctx, &mut host, Key::Char('5'), at);
        move_to(&mut ctx, &mut host, at + Vec2::new(-250.0, 120.0));

        assert_vec3_near(host.position(0), Vec3::new(5.0, 3.0, 0.0));
    }

    #[test]
    fn test_individual_pivot_rotates_in_place() {
        let mut host = TestHost::with_positions(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)]);
        host.settings = host.settings.clone().with_pivot_mode(PivotMode::Individual);
        let mut ctx = ModalToolContext::default();
        let at = Vec2::new(650.0, 420.0);

        for k in [Key::Char('r'), Key::Char('z'), Key::Char('9'), Key::Char('0')] {
            key(&mut ctx, &mut host, k, at);
        }
        click(&mut ctx, &mut host, MouseButton::Left, at);

        let expected = Quat::from_rotation_z(90f32.to_radians());
        for (id, x) in [(0, 1.0), (1, 3.0)] {
            assert_vec3_near(host.position(id), Vec3::new(x, 0.0, 0.0));
            assert!(host.get(id).rotation.angle_between(expected) < TOLERANCE * 10.0);
        }
    }

    #[test]
    fn test_individual_pivot_scales_in_place() {
        let mut host = TestHost::with_positions(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)]);
        host.settings = host.settings.clone().with_pivot_mode(PivotMode::Individual);
        let mut ctx = ModalToolContext::default();
        let at = Vec2::new(900.0, 500.0);

        key(&mut ctx, &mut host, Key::Char('s'), at);
        key(&mut ctx, &mut host, Key::Char('2'), at);

        for (id, x) in [(0, 1.0), (1, 3.0)] {
            assert_vec3_near(host.position(id), Vec3::new(x, 0.0, 0.0));
            assert_vec3_near(host.get(id).scale, Vec3::splat(2.0));
        }
    }

    #[test]
    fn test_local_rotation_uses_primary_axes() {
        // Primary (last selected) is turned so its local Z points along -Y
        let mut host = TestHost::with_transforms(&[
            ObjectTransform::from_position(Vec3::new(2.0, 0.0, 0.0)),
            ObjectTransform {
                rotation: Quat::from_rotation_x(90f32.to_radians()),
                ..ObjectTransform::IDENTITY
            },
        ]);
        host.settings = host.settings.clone().with_pivot_rotation(PivotRotation::Local);
        let mut ctx = ModalToolContext::default();
        let at = Vec2::new(700.0, 300.0);

        for k in [Key::Char('r'), Key::Char('z'), Key::Char('9'), Key::Char('0')] {
            key(&mut ctx, &mut host, k, at);
        }

        // 90 degrees about -Y around the center (1, 0, 0)
        assert_vec3_near(host.position(0), Vec3::new(1.0, 0.0, 1.0));
        assert_vec3_near(host.position(1), Vec3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn test_grid_snap_rounds_rotation_angle() {
        let mut host = TestHost::with_positions(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)]);
        host.settings = host.settings.clone().with_grid_snap(true);
        let mut ctx = ModalToolContext::default();
        let pivot = host.screen_of(Vec3::ZERO);

        key(&mut ctx, &mut host, Key::Char('r'), pivot + Vec2::new(100.0, 0.0));
        // 50 degrees clockwise on screen snaps to 45
        let swept = 50f32.to_radians();
        move_to(&mut ctx, &mut host, pivot + Vec2::new(swept.cos(), swept.sin()) * 100.0);

        let half = 0.5f32.sqrt();
        assert_vec3_near(host.position(0), Vec3::new(half, -half, 0.0));
        assert_vec3_near(host.position(1), Vec3::new(-half, half, 0.0));
    }

    #[test]
    fn test_snap_modifier_rounds_scale_multiplier() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();
        let pivot = host.screen_of(Vec3::ZERO);

        key(&mut ctx, &mut host, Key::Char('s'), pivot + Vec2::new(100.0, 0.0));
        move_to(&mut ctx, &mut host, pivot + Vec2::new(0.0, 233.0));
        assert_vec3_near(host.get(0).scale, Vec3::splat(2.33));

        key(&mut ctx, &mut host, Key::ControlLeft, pivot + Vec2::new(0.0, 233.0));
        assert_vec3_near(host.get(0).scale, Vec3::splat(2.3));
    }

    #[test]
    fn test_scale_started_on_pivot_ignores_mouse() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();
        let pivot = host.screen_of(Vec3::ZERO);

        key(&mut ctx, &mut host, Key::Char('s'), pivot);
        move_to(&mut ctx, &mut host, pivot + Vec2::new(300.0, -120.0));
        assert_vec3_near(host.get(0).scale, Vec3::ONE);

        // A typed multiplier still applies
        key(&mut ctx, &mut host, Key::Char('3'), pivot + Vec2::new(300.0, -120.0));
        assert_vec3_near(host.get(0).scale, Vec3::splat(3.0));
    }

    #[test]
    fn test_handle_key_without_viewport_update() {
        let mut host = TestHost::with_positions(&[Vec3::ZERO]);
        let mut ctx = ModalToolContext::default();

        let disposition = ctx.handle_key(&mut host, Key::Char('g'), Modifiers::default(), Vec2::new(500.0, 500.0));
        assert!(disposition.is_consumed());
        assert_eq!(ctx.mode(), Some(TransformMode::Grab));
        assert_eq!(host.position(0), Vec3::ZERO);
    }
}
