//! Session end event and observer.
//!
//! Systems that move the [`GameState`](crate::resources::gamestate::GameState)
//! into a terminal state trigger a [`GameStateChangedEvent`]. The observer
//! here reports the outcome; the main loop reads the state itself to decide
//! what to show next.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::GameStates;
use crate::resources::score::Score;
use crate::resources::scroll::ScrollManager;

/// Emitted once, when the session leaves [`GameStates::Running`].
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {
    pub state: GameStates,
}

/// Observer that logs the session outcome.
pub fn observe_gamestate_change_event(
    trigger: On<GameStateChangedEvent>,
    score: Option<Res<Score>>,
    scroll: Option<Res<ScrollManager>>,
) {
    let coins = score.map(|s| s.coins).unwrap_or_default();
    let distance = scroll.map(|s| s.world_shift).unwrap_or_default();
    info!(
        "Session ended: {:?} with {} coins after scrolling {:.0} units",
        trigger.event().state,
        coins,
        distance
    );
}
