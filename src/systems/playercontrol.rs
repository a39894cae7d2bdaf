//! Player controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! runs the player's movement and platform collision for the tick. Platforms
//! are handed over in spawn order, which the landing resolution depends on.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::entitykind::EntityKind;
use crate::resources::gameconfig::GameConfig;
use crate::resources::group::EntityGroups;
use crate::resources::input::InputState;

pub fn player_control_system(
    mut query: Query<(&mut BoxCollider, &mut EntityKind)>,
    groups: Res<EntityGroups>,
    input: Res<InputState>,
    config: Res<GameConfig>,
) {
    let Some(player) = groups.player else {
        return;
    };

    let platforms: Vec<BoxCollider> = groups
        .platforms
        .iter()
        .filter_map(|e| query.get(*e).ok())
        .map(|(collider, _)| *collider)
        .collect();

    let Ok((mut collider, mut kind)) = query.get_mut(player) else {
        return;
    };
    if let EntityKind::Player(body) = &mut *kind {
        body.handle_input_and_move(
            &mut collider,
            input.move_keys(),
            &platforms,
            &config.physics(),
        );
    }
}
