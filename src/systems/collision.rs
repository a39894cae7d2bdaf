//! Player overlap checks against coins and enemies.
//!
//! Coin pickup marks every overlapping coin first, then drops them from
//! [`EntityGroups`] and despawns them, so a coin is counted at most once.
use bevy_ecs::prelude::*;
use log::debug;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::group::EntityGroups;
use crate::resources::score::Score;
use crate::systems::gamestate::end_session;

pub fn coin_pickup_system(
    mut commands: Commands,
    query: Query<&BoxCollider>,
    mut groups: ResMut<EntityGroups>,
    mut score: ResMut<Score>,
) {
    let Some(player) = groups.player.and_then(|p| query.get(p).ok()) else {
        return;
    };

    let picked: SmallVec<[Entity; 4]> = groups
        .coins
        .iter()
        .copied()
        .filter(|coin| query.get(*coin).is_ok_and(|c| c.overlaps(player)))
        .collect();
    if picked.is_empty() {
        return;
    }

    groups.remove_coins(&picked);
    for coin in &picked {
        commands.entity(*coin).despawn();
    }
    score.coins += picked.len() as u32;
    debug!("Picked {} coin(s), total {}", picked.len(), score.coins);
}

pub fn enemy_contact_system(
    mut commands: Commands,
    query: Query<&BoxCollider>,
    groups: Res<EntityGroups>,
    mut state: ResMut<GameState>,
) {
    let Some(player) = groups.player.and_then(|p| query.get(p).ok()) else {
        return;
    };

    let touched = groups
        .enemies
        .iter()
        .filter_map(|e| query.get(*e).ok())
        .any(|enemy| enemy.overlaps(player));
    if touched {
        end_session(&mut state, GameStates::Lost, &mut commands);
    }
}
