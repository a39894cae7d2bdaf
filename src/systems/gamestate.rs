//! Session state systems.
//!
//! - [`state_is_running`] – run condition gating every simulation step
//! - [`quit_system`] – ends the session when the window is closed
//! - [`win_check_system`] – ends the session once enough coins are collected
use bevy_ecs::prelude::*;

use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::InputState;
use crate::resources::score::Score;

pub fn state_is_running(state: Res<GameState>) -> bool {
    state.is_running()
}

/// Move the session to `outcome` and announce it, unless it already ended.
pub(crate) fn end_session(state: &mut GameState, outcome: GameStates, commands: &mut Commands) {
    if state.finish(outcome) {
        commands.trigger(GameStateChangedEvent { state: outcome });
    }
}

pub fn quit_system(
    input: Res<InputState>,
    mut state: ResMut<GameState>,
    mut commands: Commands,
) {
    if input.quit_requested {
        end_session(&mut state, GameStates::Quit, &mut commands);
    }
}

pub fn win_check_system(
    score: Res<Score>,
    config: Res<GameConfig>,
    mut state: ResMut<GameState>,
    mut commands: Commands,
) {
    if score.coins >= config.coins_to_win {
        end_session(&mut state, GameStates::Won, &mut commands);
    }
}
