//! Input system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. It also
//! samples the window-close request and emits
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent) on F11.
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let sample = |state: &mut BoolState| {
        let key: KeyboardKey = state.key_binding;
        state.sample(
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        );
    };

    sample(&mut input.left);
    sample(&mut input.right);
    sample(&mut input.jump);
    sample(&mut input.mode_debug);

    input.quit_requested = rl.window_should_close();

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
