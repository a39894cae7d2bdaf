//! Per-frame keyboard input resource.
//!
//! Captures the keys the game reads and exposes them to systems via the
//! [`InputState`] resource: arrow keys to walk, space to jump, F11 to toggle
//! the debug overlay. The window-close request is sampled alongside so the
//! tick can treat it as the quit signal.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::rigidbody::MoveKeys;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// An inactive state bound to `key`.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    /// Record this frame's hardware state for the bound key.
    pub fn sample(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
    pub mode_debug: BoolState,
    /// The window was asked to close this frame.
    pub quit_requested: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound(KeyboardKey::KEY_LEFT),
            right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound(KeyboardKey::KEY_SPACE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
            quit_requested: false,
        }
    }
}

impl InputState {
    /// Movement keys held this frame.
    pub fn move_keys(&self) -> MoveKeys {
        MoveKeys {
            left: self.left.active,
            right: self.right.active,
            jump: self.jump.active,
        }
    }
}
